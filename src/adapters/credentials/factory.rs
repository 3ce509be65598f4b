use std::sync::Arc;

use rustls::crypto::{aws_lc_rs, CryptoProvider};
use rustls::{ServerConfig, SupportedCipherSuite, SupportedProtocolVersion};

use crate::domain::{CredentialError, Result, ServerCertificate, ServerCredentials, TlsPolicy, TlsVersion};
use crate::ports::CredentialFactoryPort;

/// Credential factory backed by rustls.
///
/// Turns one resolved server certificate into a reusable credential handle:
/// a server configuration restricted to the policy's protocol versions and
/// cipher suites, bound to exactly that certificate chain.
pub struct RustlsCredentialFactory;

impl CredentialFactoryPort for RustlsCredentialFactory {
    fn create_credentials(
        &self,
        certificate: ServerCertificate,
        policy: &TlsPolicy,
    ) -> Result<ServerCredentials> {
        log::debug!(
            "creating server credentials from a chain of {} certificate(s)",
            certificate.cert_chain.len()
        );

        let versions = protocol_versions(policy);
        let builder = if policy.cipher_suites.is_empty() {
            ServerConfig::builder_with_protocol_versions(&versions)
        } else {
            let suites = resolve_cipher_suites(&policy.cipher_suites)?;
            let provider = CryptoProvider {
                cipher_suites: suites,
                ..aws_lc_rs::default_provider()
            };
            ServerConfig::builder_with_provider(Arc::new(provider))
                .with_protocol_versions(&versions)
                .map_err(|e| {
                    log::error!("rejected protocol/cipher policy: {}", e);
                    CredentialError::AcquisitionFailed(format!("invalid protocol/cipher policy: {}", e))
                })?
        };

        let config = builder
            .with_no_client_auth()
            .with_single_cert(certificate.cert_chain, certificate.key)
            .map_err(|e| {
                log::error!("credential creation refused by TLS subsystem: {}", e);
                CredentialError::AcquisitionFailed(e.to_string())
            })?;

        Ok(ServerCredentials::new(config))
    }
}

fn protocol_versions(policy: &TlsPolicy) -> Vec<&'static SupportedProtocolVersion> {
    match policy.min_version {
        TlsVersion::Tls12 => vec![&rustls::version::TLS12, &rustls::version::TLS13],
        TlsVersion::Tls13 => vec![&rustls::version::TLS13],
    }
}

fn resolve_cipher_suites(names: &[String]) -> Result<Vec<SupportedCipherSuite>> {
    use rustls::crypto::aws_lc_rs::cipher_suite;

    let known: &[(&str, SupportedCipherSuite)] = &[
        ("TLS_AES_256_GCM_SHA384", cipher_suite::TLS13_AES_256_GCM_SHA384),
        ("TLS_AES_128_GCM_SHA256", cipher_suite::TLS13_AES_128_GCM_SHA256),
        (
            "TLS_CHACHA20_POLY1305_SHA256",
            cipher_suite::TLS13_CHACHA20_POLY1305_SHA256,
        ),
        (
            "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
            cipher_suite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        ),
        (
            "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
            cipher_suite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        ),
        (
            "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            cipher_suite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        ),
        (
            "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            cipher_suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        ),
    ];

    let mut suites = Vec::with_capacity(names.len());
    for name in names {
        let normalized = name.to_uppercase().replace('-', "_");
        match known.iter().find(|(n, _)| *n == normalized) {
            Some((_, suite)) => suites.push(*suite),
            None => {
                return Err(CredentialError::AcquisitionFailed(format!(
                    "unknown cipher suite '{}'",
                    name
                )));
            }
        }
    }
    Ok(suites)
}
