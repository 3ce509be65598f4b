use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::{CredentialError, Result, ServerCredentials, TlsPolicy};
use crate::ports::{
    CertificateSelectorPort, CertificateStorePort, CredentialFactoryPort, LocalIdentityPort,
};

/// Per-hostname cache of server credentials.
///
/// Credentials are expensive to create relative to how often handshakes need
/// them, so the first request for a hostname creates them and every later
/// request reuses the stored handle. Entries are never evicted; they live for
/// the rest of the process.
pub struct CredentialService {
    factory: Arc<dyn CredentialFactoryPort>,
    store: Arc<dyn CertificateStorePort>,
    identity: Arc<dyn LocalIdentityPort>,
    policy: TlsPolicy,
    // The map is not safe for concurrent use, so every access takes this
    // lock, reads included.
    cache: Mutex<HashMap<String, ServerCredentials>>,
}

impl CredentialService {
    pub fn new(
        factory: Arc<dyn CredentialFactoryPort>,
        store: Arc<dyn CertificateStorePort>,
        identity: Arc<dyn LocalIdentityPort>,
        policy: TlsPolicy,
    ) -> Self {
        Self {
            factory,
            store,
            identity,
            policy,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get the cached credentials for `server_name`, creating them on first
    /// use.
    ///
    /// An empty `server_name` stands for the local machine and resolves to
    /// its hostname, so "no name supplied" and "explicitly the local host"
    /// share one cache entry. When `selector` is present it decides which
    /// certificate backs new credentials and is invoked with the requested
    /// name as given; otherwise the default store lookup by normalized name
    /// is used.
    ///
    /// The whole operation, selection and creation included, runs under one
    /// lock: concurrent callers for the same name trigger exactly one
    /// creation. A failed attempt is not cached, so the next call for that
    /// name retries resolution.
    pub fn credentials_for(
        &self,
        server_name: &str,
        selector: Option<&dyn CertificateSelectorPort>,
    ) -> Result<ServerCredentials> {
        let key = self.normalize(server_name);

        let mut cache = self
            .cache
            .lock()
            .map_err(|_| CredentialError::Internal("credential cache lock poisoned".to_string()))?;

        if let Some(credentials) = cache.get(&key) {
            debug!(host = %key, "credential cache hit");
            return Ok(credentials.clone());
        }

        debug!(host = %key, "credential cache miss, resolving certificate");
        // The selector sees the requested name verbatim; only the cache key
        // and the default store lookup use the normalized form.
        let certificate = match selector {
            Some(selector) => selector.select(server_name)?,
            None => self.store.find_by_name(&key)?,
        };

        let credentials = self.factory.create_credentials(certificate, &self.policy)?;
        cache.insert(key, credentials.clone());
        Ok(credentials)
    }

    fn normalize(&self, server_name: &str) -> String {
        if server_name.is_empty() {
            self.identity.local_hostname().to_ascii_lowercase()
        } else {
            server_name.to_ascii_lowercase()
        }
    }
}
