use crate::domain::{AppError, PackagePin};

/// Python package manager operations.
pub trait PackageManager {
    /// Upgrade the package manager itself to its newest release.
    fn self_upgrade(&self) -> Result<(), AppError>;

    /// Install or upgrade one package for the current user.
    fn install(&self, pin: &PackagePin) -> Result<(), AppError>;

    /// Raw text printed by the package manager's info query for `name`.
    fn show(&self, name: &str) -> Result<String, AppError>;
}

impl<T: PackageManager + ?Sized> PackageManager for &T {
    fn self_upgrade(&self) -> Result<(), AppError> {
        (**self).self_upgrade()
    }

    fn install(&self, pin: &PackagePin) -> Result<(), AppError> {
        (**self).install(pin)
    }

    fn show(&self, name: &str) -> Result<String, AppError> {
        (**self).show(name)
    }
}
