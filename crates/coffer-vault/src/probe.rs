//! The credential probe: a fixed tagged plaintext sealed under the
//! passphrase-derived key with XChaCha20-Poly1305. Opening it is the whole
//! proof of a correct passphrase; the passphrase itself is stored in no
//! form at all.

use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    XChaCha20Poly1305,
};

use crate::error::{VaultError, VaultResult};
use crate::unlock_key::UnlockKey;

pub const NONCE_SIZE: usize = 24;

/// Tag is versioned so a future record format can rotate it.
const PROBE_PLAINTEXT: &[u8] = b"coffer-credential-probe-v1";

/// Seal the probe under the given key. Returns (ciphertext, nonce).
pub fn seal(key: &UnlockKey) -> VaultResult<(Vec<u8>, [u8; NONCE_SIZE])> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, PROBE_PLAINTEXT)
        .map_err(|_| VaultError::EncryptionFailed)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    nonce_bytes.copy_from_slice(&nonce);
    Ok((ciphertext, nonce_bytes))
}

/// Whether the key opens a sealed probe.
///
/// Every decryption failure reads as a plain mismatch; the AEAD tag
/// makes a wrong key indistinguishable from tampered data anyway.
pub fn opens(ciphertext: &[u8], nonce: &[u8; NONCE_SIZE], key: &UnlockKey) -> bool {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = chacha20poly1305::XNonce::from_slice(nonce);

    match cipher.decrypt(nonce, ciphertext) {
        Ok(plaintext) => plaintext == PROBE_PLAINTEXT,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(passphrase: &[u8]) -> UnlockKey {
        UnlockKey::derive(passphrase, b"probe-test-salt").unwrap()
    }

    #[test]
    fn sealed_probe_opens_with_same_key() {
        let k = key(b"right passphrase");
        let (ct, nonce) = seal(&k).unwrap();
        assert!(opens(&ct, &nonce, &k));
    }

    #[test]
    fn wrong_key_does_not_open() {
        let (ct, nonce) = seal(&key(b"right passphrase")).unwrap();
        assert!(!opens(&ct, &nonce, &key(b"wrong passphrase")));
    }

    #[test]
    fn tampered_ciphertext_does_not_open() {
        let k = key(b"right passphrase");
        let (mut ct, nonce) = seal(&k).unwrap();
        ct[0] ^= 0xff;
        assert!(!opens(&ct, &nonce, &k));
    }

    #[test]
    fn tampered_nonce_does_not_open() {
        let k = key(b"right passphrase");
        let (ct, mut nonce) = seal(&k).unwrap();
        nonce[0] ^= 0xff;
        assert!(!opens(&ct, &nonce, &k));
    }

    #[test]
    fn seals_are_nonce_unique() {
        let k = key(b"right passphrase");
        let (_, n1) = seal(&k).unwrap();
        let (_, n2) = seal(&k).unwrap();
        assert_ne!(n1, n2);
    }
}
