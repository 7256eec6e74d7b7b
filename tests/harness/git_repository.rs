use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run git with a fixed identity; panics on failure.
pub(crate) fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A local upstream repository with a `master` branch and two tags.
pub(crate) struct UpstreamRepo {
    pub path: PathBuf,
    pub v1: String,
    pub v2: String,
}

impl UpstreamRepo {
    pub(crate) fn create(path: &Path) -> Self {
        fs::create_dir_all(path).expect("Failed to create upstream directory");
        git(path, &["init", "--initial-branch=master"]);

        fs::write(path.join("settings.py"), "VERSION = 1\n").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "first"]);
        git(path, &["tag", "v1.0"]);
        let v1 = git(path, &["rev-parse", "HEAD"]);

        fs::write(path.join("settings.py"), "VERSION = 2\n").unwrap();
        git(path, &["commit", "-am", "second"]);
        git(path, &["tag", "v2.0"]);
        let v2 = git(path, &["rev-parse", "HEAD"]);

        Self { path: path.to_path_buf(), v1, v2 }
    }

    pub(crate) fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Add a commit on master after the tags.
    pub(crate) fn advance(&self) -> String {
        fs::write(self.path.join("settings.py"), "VERSION = 3\n").unwrap();
        git(&self.path, &["commit", "-am", "third"]);
        git(&self.path, &["rev-parse", "HEAD"])
    }
}

pub(crate) fn head_of(repo: &Path) -> String {
    git(repo, &["rev-parse", "HEAD"])
}
