pub mod fixtures;
pub mod stub_backend;
