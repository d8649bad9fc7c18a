//! Shared-secret check for the submission endpoint.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies submitted secrets against the configured shared secret.
///
/// Both sides are MAC'd with HMAC-SHA256 under a random per-process key and
/// compared with the MAC's constant-time check, so response timing does not
/// reveal how much of a guess was right.
pub struct SecretVerifier {
    key: [u8; 32],
    expected: Vec<u8>,
}

impl SecretVerifier {
    /// Creates a verifier for `secret`.
    pub fn new(secret: &str) -> Self {
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);

        let expected = Self::mac(&key, secret).finalize().into_bytes().to_vec();

        Self { key, expected }
    }

    fn mac(key: &[u8], value: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(key)
            .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
        mac.update(value.as_bytes());
        mac
    }

    /// Returns `true` if `candidate` equals the configured secret.
    pub fn verify(&self, candidate: &str) -> bool {
        Self::mac(&self.key, candidate)
            .verify_slice(&self.expected)
            .is_ok()
    }
}

impl std::fmt::Debug for SecretVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_matching_secret() {
        let verifier = SecretVerifier::new("changeme");
        assert!(verifier.verify("changeme"));
    }

    #[test]
    fn test_verify_rejects_other_secrets() {
        let verifier = SecretVerifier::new("changeme");

        assert!(!verifier.verify("changem"));
        assert!(!verifier.verify("changeme "));
        assert!(!verifier.verify("CHANGEME"));
        assert!(!verifier.verify(""));
    }

    #[test]
    fn test_debug_hides_secret() {
        let verifier = SecretVerifier::new("hunter2");
        assert!(!format!("{verifier:?}").contains("hunter2"));
    }
}
