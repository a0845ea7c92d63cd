//! Credential storage and verification for Coffer.
//!
//! The vault never stores a password in any form. A record is a salt plus
//! a probe ciphertext; deriving a key from a submitted passphrase and
//! opening the probe is the entire verification. Alongside the verifier
//! live the local-authentication bridge and the irreversible application
//! reset.

pub mod biometric;
pub mod credentials;
pub mod error;
pub mod mock;
pub mod probe;
pub mod reset;
pub mod unlock_key;

pub use biometric::{BiometricCapability, LocalAuthenticator};
pub use credentials::{
    CredentialAttempt, CredentialRecord, CredentialVerifier, VaultVerifier, CREDENTIAL_FILE,
};
pub use error::{VaultError, VaultResult};
pub use mock::{MockAppReset, MockCredentialVerifier, MockLocalAuthenticator};
pub use reset::{AppReset, ProfileWipe};
pub use unlock_key::UnlockKey;
