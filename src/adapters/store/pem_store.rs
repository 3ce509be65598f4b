use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::domain::{CredentialError, Result, ServerCertificate};
use crate::ports::CertificateStorePort;

/// Default certificate store: a directory of PEM files keyed by hostname.
///
/// A server named `svc.example` is backed by `svc.example.pem` (the
/// certificate chain, leaf first) and `svc.example.key` (the private key)
/// under the store root.
pub struct PemDirectoryStore {
    root: PathBuf,
}

impl PemDirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CertificateStorePort for PemDirectoryStore {
    fn find_by_name(&self, server_name: &str) -> Result<ServerCertificate> {
        let cert_path = self.root.join(format!("{}.pem", server_name));
        let key_path = self.root.join(format!("{}.key", server_name));

        let cert_chain = rustls_pemfile::certs(&mut open_pem(&cert_path, server_name)?)
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| {
                CredentialError::StoreInaccessible(format!("{}: {}", cert_path.display(), e))
            })?;
        if cert_chain.is_empty() {
            return Err(CredentialError::CertificateNotFound(server_name.to_string()));
        }

        let key = rustls_pemfile::private_key(&mut open_pem(&key_path, server_name)?)
            .map_err(|e| {
                CredentialError::StoreInaccessible(format!("{}: {}", key_path.display(), e))
            })?
            .ok_or_else(|| {
                CredentialError::StoreInaccessible(format!(
                    "{}: no private key entry",
                    key_path.display()
                ))
            })?;

        log::debug!("found certificate for host {} in {}", server_name, self.root.display());
        Ok(ServerCertificate::new(cert_chain, key))
    }
}

fn open_pem(path: &Path, server_name: &str) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CredentialError::CertificateNotFound(server_name.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::error!("cannot read {}: permission denied", path.display());
            Err(CredentialError::PermissionDenied(path.display().to_string()))
        }
        Err(e) => Err(CredentialError::StoreInaccessible(format!(
            "{}: {}",
            path.display(),
            e
        ))),
    }
}
