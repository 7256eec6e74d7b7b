use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, PackagePin};
use crate::ports::PackageManager;

#[derive(Default)]
pub struct FakePackageManager {
    pub upgrades: Mutex<usize>,
    pub installed: Mutex<Vec<String>>,
    pub upgrade_fails: Mutex<bool>,
    pub failing_package: Mutex<Option<String>>,
    pub show_output: Mutex<HashMap<String, Result<String, String>>>,
}

impl FakePackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_upgrade_fails(&self, fails: bool) {
        *self.upgrade_fails.lock().unwrap() = fails;
    }

    pub fn fail_package(&self, name: &str) {
        *self.failing_package.lock().unwrap() = Some(name.to_string());
    }

    pub fn set_show(&self, name: &str, output: &str) {
        self.show_output.lock().unwrap().insert(name.to_string(), Ok(output.to_string()));
    }

    pub fn set_show_error(&self, name: &str, error: &str) {
        self.show_output.lock().unwrap().insert(name.to_string(), Err(error.to_string()));
    }

    pub fn installed(&self) -> Vec<String> {
        self.installed.lock().unwrap().clone()
    }

    pub fn upgrades(&self) -> usize {
        *self.upgrades.lock().unwrap()
    }
}

impl PackageManager for FakePackageManager {
    fn self_upgrade(&self) -> Result<(), AppError> {
        *self.upgrades.lock().unwrap() += 1;
        if *self.upgrade_fails.lock().unwrap() {
            return Err(AppError::PipUpgradeFailed { details: String::new() });
        }
        Ok(())
    }

    fn install(&self, pin: &PackagePin) -> Result<(), AppError> {
        if self.failing_package.lock().unwrap().as_deref() == Some(pin.name.as_str()) {
            return Err(AppError::CommandFailed {
                command: format!("python -m pip install --user {}", pin.specifier()),
                code: Some(1),
                details: String::new(),
            });
        }
        self.installed.lock().unwrap().push(pin.specifier());
        Ok(())
    }

    fn show(&self, name: &str) -> Result<String, AppError> {
        match self.show_output.lock().unwrap().get(name) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(details)) => Err(AppError::CommandSpawn {
                command: format!("python -m pip show {}", name),
                details: details.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}
