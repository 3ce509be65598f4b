pub mod factory;

pub use factory::RustlsCredentialFactory;
