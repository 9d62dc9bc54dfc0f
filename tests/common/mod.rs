use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static WORKSPACE_COUNTER: AtomicU64 = AtomicU64::new(0);

const TEMPLATES: [(&str, &str); 3] = [
    (
        "templates/checklist/checklist.html",
        include_str!("../../templates/checklist/checklist.html"),
    ),
    (
        "templates/checklist/aztec.html",
        include_str!("../../templates/checklist/aztec.html"),
    ),
    (
        "templates/checklist/incoming_change.html",
        include_str!("../../templates/checklist/incoming_change.html"),
    ),
];

pub struct TestWorkspace {
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new(name: &str) -> Self {
        let mut root = std::env::temp_dir();
        let seq = WORKSPACE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        root.push(format!(
            "release-checklist-tests-{name}-{}-{nanos}-{seq}",
            std::process::id()
        ));

        for (relative, content) in TEMPLATES {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().expect("template path has a parent"))
                .expect("failed to create templates directory");
            fs::write(path, content).expect("failed to seed template file");
        }

        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_release-checklist"));
        command
            .current_dir(&self.root)
            .args(args)
            .env("RELEASE_CHECKLIST_LOCAL_TEMPLATES", "1")
            .env_remove("RELEASE_CHECKLIST_TEMPLATES_DIR")
            .env_remove("RELEASE_CHECKLIST_FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("CI")
            .env_remove("VISUAL")
            .env_remove("EDITOR")
            .env("NO_COLOR", "1");
        command
    }

    pub fn run_cli(&self, args: &[&str]) -> Output {
        self.run_cli_with_input(args, "")
    }

    pub fn run_cli_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to execute release-checklist");
        if let Some(mut stdin) = child.stdin.take() {
            // The binary may exit before reading stdin at all.
            let _ = stdin.write_all(input.as_bytes());
        }
        child
            .wait_with_output()
            .expect("failed to wait for release-checklist")
    }

    pub fn run_cli_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        self.command(args)
            .envs(vars.iter().copied())
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute release-checklist")
    }
}

impl Drop for TestWorkspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn output_stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn output_stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
