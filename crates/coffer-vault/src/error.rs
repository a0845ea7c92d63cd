use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("No credential record at {0}")]
    CredentialsNotFound(String),

    #[error("Probe encryption failed")]
    EncryptionFailed,

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Credential store I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Local authentication unavailable: {0}")]
    BiometricUnavailable(String),

    #[error("Local authentication failed")]
    BiometricFailed,

    #[error("Application reset failed: {0}")]
    ResetFailed(String),
}

pub type VaultResult<T> = Result<T, VaultError>;
