pub mod bootstrap;
pub mod checkout_repository;
pub mod launch;
pub mod update_packages;
