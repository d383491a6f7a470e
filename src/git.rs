//! Git command runner for svgplan.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. The local host and candidate listing go
//! through this module.

use crate::error::{PlanError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as repo-relative paths with forward slashes.
    pub fn paths(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.replace('\\', "/"))
            .collect()
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PlanError::GitError)` - On non-zero exit code or spawn failure
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            PlanError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(PlanError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Not being inside a repository is a user error (exit 1), not a git
/// failure.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.stdout)),
        Err(PlanError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(PlanError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Every tracked file, repo-relative.
pub fn tracked_files<P: AsRef<Path>>(cwd: P) -> Result<Vec<String>> {
    Ok(run_git(cwd, &["ls-files"])?.paths())
}

/// Files changed between two commits.
///
/// With `merge_base` set, compares `head` against the merge base of the two
/// (`base...head`), which is what a pull request shows.
pub fn changed_files<P: AsRef<Path>>(
    cwd: P,
    base: &str,
    head: &str,
    merge_base: bool,
) -> Result<Vec<String>> {
    let range = if merge_base {
        format!("{}...{}", base, head)
    } else {
        format!("{}..{}", base, head)
    };
    Ok(run_git(cwd, &["diff", "--name-only", &range])?.paths())
}

/// Files touched by a single commit, including a root commit.
pub fn commit_files<P: AsRef<Path>>(cwd: P, sha: &str) -> Result<Vec<String>> {
    let output = run_git(
        cwd,
        &["diff-tree", "--root", "--no-commit-id", "--name-only", "-r", sha],
    )?;
    Ok(output.paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo, head_sha};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_captures_stdout() {
        let temp_dir = create_test_repo();
        let output = run_git(temp_dir.path(), &["rev-parse", "--show-toplevel"]).unwrap();
        assert!(!output.stdout.is_empty());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let err = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]).unwrap_err();
        assert!(matches!(err, PlanError::GitError(_)));
    }

    #[test]
    fn test_get_repo_root_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("icons").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = get_repo_root(&subdir).unwrap();
        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_get_repo_root_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = get_repo_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PlanError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_tracked_files() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "icons/a.svg", "<svg/>");

        let files = tracked_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec!["README.md", "icons/a.svg"]);
    }

    #[test]
    fn test_changed_files_between_commits() {
        let temp_dir = create_test_repo();
        let base = head_sha(temp_dir.path());
        commit_file(temp_dir.path(), "icons/a.svg", "<svg/>");
        commit_file(temp_dir.path(), "icons/b.svg", "<svg/>");
        let head = head_sha(temp_dir.path());

        let files = changed_files(temp_dir.path(), &base, &head, false).unwrap();
        assert_eq!(files, vec!["icons/a.svg", "icons/b.svg"]);

        let files = changed_files(temp_dir.path(), &base, &head, true).unwrap();
        assert_eq!(files, vec!["icons/a.svg", "icons/b.svg"]);
    }

    #[test]
    fn test_commit_files_root_commit() {
        let temp_dir = create_test_repo();
        let root = head_sha(temp_dir.path());

        let files = commit_files(temp_dir.path(), &root).unwrap();
        assert_eq!(files, vec!["README.md"]);
    }

    #[test]
    fn test_git_output_paths() {
        let output = GitOutput {
            stdout: "a.svg\nicons\\b.svg\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.paths(), vec!["a.svg", "icons/b.svg"]);

        let empty = GitOutput {
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(empty.paths().is_empty());
    }
}
