//! The persisted credential record and the verifier service over it.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{VaultError, VaultResult};
use crate::probe::{self, NONCE_SIZE};
use crate::unlock_key::UnlockKey;

/// File name of the record inside the profile directory.
pub const CREDENTIAL_FILE: &str = "credential.json";

const RECORD_VERSION: u32 = 1;
const SALT_SIZE: usize = 32;

/// One user-supplied passphrase on its way to verification.
///
/// Transient by construction: moved into the verifier call, zeroized on
/// drop, and kept out of logs (`Debug` redacts the contents).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CredentialAttempt {
    password: String,
}

impl CredentialAttempt {
    pub fn new(password: String) -> Self {
        Self { password }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for CredentialAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAttempt")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What the vault persists instead of a password: a salt and a sealed
/// probe. Deriving a key from a submitted passphrase and opening the probe
/// is the entire verification.
///
/// Unlike [`CredentialAttempt`], the record holds nothing secret (it is
/// written to disk as plain JSON), so its `Debug` is derived.
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub salt: Vec<u8>,
    pub probe_nonce: [u8; NONCE_SIZE],
    pub probe_ciphertext: Vec<u8>,
}

impl CredentialRecord {
    /// Build a record for a fresh passphrase.
    pub fn create(passphrase: &str) -> VaultResult<Self> {
        let mut salt = vec![0u8; SALT_SIZE];
        rand::rng().fill_bytes(&mut salt);

        let key = UnlockKey::derive(passphrase.as_bytes(), &salt)?;
        let (probe_ciphertext, probe_nonce) = probe::seal(&key)?;

        Ok(Self {
            version: RECORD_VERSION,
            created_at: Utc::now(),
            salt,
            probe_nonce,
            probe_ciphertext,
        })
    }

    /// Whether the passphrase opens this record's probe.
    pub fn matches(&self, passphrase: &str) -> VaultResult<bool> {
        let key = UnlockKey::derive(passphrase.as_bytes(), &self.salt)?;
        Ok(probe::opens(&self.probe_ciphertext, &self.probe_nonce, &key))
    }

    /// Save to disk as JSON.
    pub fn save(&self, path: &Path) -> VaultResult<()> {
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| VaultError::Serialization(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| VaultError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load from disk. A missing file is the distinct
    /// [`VaultError::CredentialsNotFound`] so callers can route to setup
    /// instead of treating it as corruption.
    pub fn load(path: &Path) -> VaultResult<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::CredentialsNotFound(path.display().to_string()));
            }
            Err(e) => return Err(VaultError::Io(e.to_string())),
        };
        serde_json::from_slice(&bytes).map_err(|e| VaultError::Serialization(e.to_string()))
    }

    /// Canonical record location inside a profile directory.
    pub fn path_in(profile_dir: &Path) -> PathBuf {
        profile_dir.join(CREDENTIAL_FILE)
    }
}

/// Service the unlock flow hands each credential attempt to.
///
/// `Ok(false)` is a wrong password; `Err` means the verifier itself could
/// not run. The gate presents both as a failed attempt; the distinction
/// only reaches the log.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify_password(&self, attempt: CredentialAttempt) -> VaultResult<bool>;
}

/// Production verifier over a loaded [`CredentialRecord`].
pub struct VaultVerifier {
    record: CredentialRecord,
}

impl VaultVerifier {
    pub fn new(record: CredentialRecord) -> Self {
        Self { record }
    }
}

#[async_trait]
impl CredentialVerifier for VaultVerifier {
    async fn verify_password(&self, attempt: CredentialAttempt) -> VaultResult<bool> {
        self.record.matches(attempt.password())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_its_passphrase() {
        let record = CredentialRecord::create("hunter2 but longer").unwrap();
        assert!(record.matches("hunter2 but longer").unwrap());
    }

    #[test]
    fn record_rejects_other_passphrases() {
        let record = CredentialRecord::create("hunter2 but longer").unwrap();
        assert!(!record.matches("hunter3 but longer").unwrap());
        assert!(!record.matches("").unwrap());
    }

    #[test]
    fn salts_are_unique_per_record() {
        let a = CredentialRecord::create("same passphrase").unwrap();
        let b = CredentialRecord::create("same passphrase").unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.probe_ciphertext, b.probe_ciphertext);
    }

    #[test]
    fn tampered_record_rejects_correct_passphrase() {
        let mut record = CredentialRecord::create("the real one").unwrap();
        record.probe_ciphertext[0] ^= 0xff;
        assert!(!record.matches("the real one").unwrap());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = CredentialRecord::path_in(dir.path());

        let record = CredentialRecord::create("roundtrip passphrase").unwrap();
        record.save(&path).unwrap();

        let loaded = CredentialRecord::load(&path).unwrap();
        assert_eq!(loaded.version, RECORD_VERSION);
        assert!(loaded.matches("roundtrip passphrase").unwrap());
        assert!(!loaded.matches("something else").unwrap());
    }

    #[test]
    fn missing_record_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CredentialRecord::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, VaultError::CredentialsNotFound(_)));
    }

    #[test]
    fn corrupt_record_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CREDENTIAL_FILE);
        std::fs::write(&path, b"not json at all").unwrap();

        let err = CredentialRecord::load(&path).unwrap_err();
        assert!(matches!(err, VaultError::Serialization(_)));
    }

    #[test]
    fn attempt_debug_is_redacted() {
        let attempt = CredentialAttempt::new("super secret".into());
        let dbg = format!("{:?}", attempt);
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("super secret"));
    }

    #[test]
    fn record_debug_shows_metadata() {
        let record = CredentialRecord::create("printable").unwrap();
        let dbg = format!("{:?}", record);
        assert!(dbg.contains("version"));
        assert!(dbg.contains("salt"));
    }

    #[tokio::test]
    async fn vault_verifier_checks_against_record() {
        let record = CredentialRecord::create("the passphrase").unwrap();
        let verifier = VaultVerifier::new(record);

        let ok = verifier
            .verify_password(CredentialAttempt::new("the passphrase".into()))
            .await
            .unwrap();
        assert!(ok);

        let bad = verifier
            .verify_password(CredentialAttempt::new("not it".into()))
            .await
            .unwrap();
        assert!(!bad);
    }
}
