use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::AccountError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

const SALT_LEN: usize = 16;

/// Salted SHA-256 digest of the check-in password.
///
/// This gates the local check-in screen so a shared device does not show one
/// patient's history to the next person. It is not an authentication
/// boundary: the record sits unencrypted next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    salt: String,
    hash: String,
}

impl Credential {
    pub fn new(raw: &str) -> Result<Self, AccountError> {
        let mut salt = [0u8; SALT_LEN];
        getrandom::getrandom(&mut salt).map_err(|e| AccountError::Credential(e.to_string()))?;
        Ok(Self::with_salt(raw, &salt))
    }

    fn with_salt(raw: &str, salt: &[u8]) -> Self {
        Self {
            salt: hex::encode(salt),
            hash: digest(salt, raw),
        }
    }

    /// Check `raw` against the stored digest.
    pub fn validate(&self, raw: &str) -> bool {
        match hex::decode(&self.salt) {
            Ok(salt) => digest(&salt, raw) == self.hash,
            Err(_) => false,
        }
    }
}

fn digest(salt: &[u8], raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

/// Registration rules for a new password.
pub fn check_password(raw: &str) -> Result<(), AccountError> {
    if raw.is_empty() {
        return Err(AccountError::MissingPassword);
    }
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword);
    }
    Ok(())
}
