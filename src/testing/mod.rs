mod fake_git;
mod fake_package_manager;
mod fake_runner;

pub use fake_git::FakeGit;
pub use fake_package_manager::FakePackageManager;
pub use fake_runner::FakeRunner;
