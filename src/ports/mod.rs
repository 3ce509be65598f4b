pub mod factory;
pub mod identity;
pub mod selector;
pub mod store;

pub use factory::CredentialFactoryPort;
pub use identity::LocalIdentityPort;
pub use selector::CertificateSelectorPort;
pub use store::CertificateStorePort;
