use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{VaultError, VaultResult};

pub const KEY_SIZE: usize = 32;

/// The key that seals the credential probe. 256 bits, derived fresh from
/// the passphrase for every create and verify, never written anywhere.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UnlockKey {
    bytes: [u8; KEY_SIZE],
}

impl UnlockKey {
    /// Derive from a passphrase and the record's salt via HKDF-SHA256.
    pub fn derive(passphrase: &[u8], salt: &[u8]) -> VaultResult<Self> {
        let hk = Hkdf::<Sha256>::new(Some(salt), passphrase);
        let mut bytes = [0u8; KEY_SIZE];
        hk.expand(b"coffer-unlock-key", &mut bytes)
            .map_err(|e| VaultError::DerivationFailed(e.to_string()))?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for UnlockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let salt = b"per-record-salt-0123456789abcdef";
        let k1 = UnlockKey::derive(b"correct horse battery", salt).unwrap();
        let k2 = UnlockKey::derive(b"correct horse battery", salt).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_passphrases_differ() {
        let salt = b"per-record-salt-0123456789abcdef";
        let k1 = UnlockKey::derive(b"passphrase A", salt).unwrap();
        let k2 = UnlockKey::derive(b"passphrase B", salt).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_salts_differ() {
        let k1 = UnlockKey::derive(b"same passphrase", b"salt-one").unwrap();
        let k2 = UnlockKey::derive(b"same passphrase", b"salt-two").unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn debug_redacts_key() {
        let key = UnlockKey::derive(b"secret", b"salt").unwrap();
        let dbg = format!("{:?}", key);
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains(&format!("{:?}", key.as_bytes())));
    }
}
