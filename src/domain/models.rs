use rustls::ServerConfig;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use std::fmt;
use std::sync::Arc;

/// Reusable server credentials negotiated with the TLS subsystem.
///
/// Cloning is a reference-count bump; every clone refers to the same
/// underlying credential context.
#[derive(Clone)]
pub struct ServerCredentials {
    config: Arc<ServerConfig>,
}

impl ServerCredentials {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The TLS server configuration backing these credentials, ready to be
    /// handed to an acceptor.
    pub fn config(&self) -> Arc<ServerConfig> {
        Arc::clone(&self.config)
    }

    /// True when both values refer to the identical credential context.
    pub fn same_handle(&self, other: &ServerCredentials) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

impl fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("config", &Arc::as_ptr(&self.config))
            .finish()
    }
}

/// A resolved server certificate: the chain presented to clients plus the
/// matching private key.
pub struct ServerCertificate {
    pub cert_chain: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
}

impl ServerCertificate {
    pub fn new(cert_chain: Vec<CertificateDer<'static>>, key: PrivateKeyDer<'static>) -> Self {
        Self { cert_chain, key }
    }
}

impl Clone for ServerCertificate {
    fn clone(&self) -> Self {
        Self {
            cert_chain: self.cert_chain.clone(),
            key: self.key.clone_key(),
        }
    }
}

impl fmt::Debug for ServerCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material
        f.debug_struct("ServerCertificate")
            .field("cert_chain_len", &self.cert_chain.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TlsVersion {
    Tls12,
    Tls13,
}

/// Protocol policy enforced by newly created credentials.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TlsPolicy {
    /// Oldest protocol version the credentials will negotiate.
    #[serde(default = "default_min_version")]
    pub min_version: TlsVersion,
    /// Cipher suites by IANA name. Empty means the provider's defaults,
    /// which are already limited to strong suites.
    #[serde(default)]
    pub cipher_suites: Vec<String>,
}

fn default_min_version() -> TlsVersion {
    TlsVersion::Tls12
}

impl Default for TlsPolicy {
    fn default() -> Self {
        Self {
            min_version: default_min_version(),
            cipher_suites: Vec::new(),
        }
    }
}
