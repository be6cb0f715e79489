//! API key authentication

use std::fmt::{Debug, Formatter, Result as FmtResult};

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

pub(crate) mod middleware;

/// The configured API key, held only as its SHA-256 digest.
#[derive(Clone)]
pub(crate) struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    #[must_use]
    pub(crate) fn new(key: &str) -> Self {
        Self {
            digest: digest(key),
        }
    }

    /// Compare a presented key against the configured one in constant time.
    #[must_use]
    pub(crate) fn verify(&self, presented: &str) -> bool {
        self.digest.ct_eq(&digest(presented)).into()
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("ApiKey(<redacted>)")
    }
}

fn digest(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}
