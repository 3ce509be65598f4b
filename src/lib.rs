pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{PemDirectoryStore, RustlsCredentialFactory, SystemIdentity};
pub use domain::{
    CredentialError, CredentialService, Result, ServerCertificate, ServerCredentials, TlsPolicy,
    TlsVersion,
};
pub use ports::{
    CertificateSelectorPort, CertificateStorePort, CredentialFactoryPort, LocalIdentityPort,
};

use std::path::PathBuf;
use std::sync::Arc;

impl CredentialService {
    /// Wire up a service with the default adapters: rustls credentials, a
    /// PEM directory as the certificate store and the machine hostname as
    /// the local identity.
    pub fn with_defaults(store_root: impl Into<PathBuf>, policy: TlsPolicy) -> Self {
        CredentialService::new(
            Arc::new(RustlsCredentialFactory),
            Arc::new(PemDirectoryStore::new(store_root)),
            Arc::new(SystemIdentity),
            policy,
        )
    }
}
