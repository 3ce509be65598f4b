pub mod credentials;
pub mod identity;
pub mod store;

pub use credentials::RustlsCredentialFactory;
pub use identity::SystemIdentity;
pub use store::PemDirectoryStore;
