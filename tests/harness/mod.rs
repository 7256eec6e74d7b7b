#![allow(dead_code, unused_imports)]

pub(crate) mod fake_python;
pub(crate) mod git_repository;
pub(crate) mod test_context;

pub(crate) use fake_python::FakePython;
pub(crate) use git_repository::UpstreamRepo;
pub(crate) use test_context::TestContext;
