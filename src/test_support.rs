use crate::actions::Reporter;
use crate::event::EventContext;
use crate::host::HostApi;
use std::cell::RefCell;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository with a single commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Write `content` to `rel_path` and commit it.
pub(crate) fn commit_file(repo_dir: &Path, rel_path: &str, content: &str) {
    let full = repo_dir.join(rel_path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();
    git(repo_dir, &["add", rel_path]);
    git(repo_dir, &["commit", "-m", &format!("Add {}", rel_path)]);
}

pub(crate) fn head_sha(repo_dir: &Path) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Records every message it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    failures: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn fail(&self, msg: &str) {
        self.failures.borrow_mut().push(msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }
}

/// A host answering from fixed file lists.
#[derive(Debug, Clone)]
pub(crate) struct StaticHost {
    pub(crate) pull_request_files: Result<Vec<String>, String>,
    pub(crate) pushed_files: Result<Vec<String>, String>,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            pull_request_files: Ok(Vec::new()),
            pushed_files: Ok(Vec::new()),
        }
    }
}

impl StaticHost {
    pub(crate) fn pushed(files: &[&str]) -> Self {
        Self {
            pushed_files: Ok(files.iter().map(|f| f.to_string()).collect()),
            ..Default::default()
        }
    }

    pub(crate) fn pull_request(files: &[&str]) -> Self {
        Self {
            pull_request_files: Ok(files.iter().map(|f| f.to_string()).collect()),
            ..Default::default()
        }
    }

    pub(crate) fn failing(msg: &str) -> Self {
        Self {
            pull_request_files: Err(msg.to_string()),
            pushed_files: Err(msg.to_string()),
        }
    }
}

impl HostApi for StaticHost {
    fn list_pull_request_files(&self, _event: &EventContext) -> Result<Vec<String>, String> {
        self.pull_request_files.clone()
    }

    fn list_pushed_files(&self, _event: &EventContext) -> Result<Vec<String>, String> {
        self.pushed_files.clone()
    }
}
