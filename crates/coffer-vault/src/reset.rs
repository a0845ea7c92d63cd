//! Irreversible application reset.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{VaultError, VaultResult};

/// Service behind the typed-RESET confirmation.
#[async_trait]
pub trait AppReset: Send + Sync {
    /// Destroy the user's persisted profile. Irreversible; callers gate it
    /// behind the typed confirmation.
    async fn reset_application(&self) -> VaultResult<()>;
}

/// Wipes the profile directory (credential record and wallet data) and
/// leaves an empty directory ready for a fresh setup.
pub struct ProfileWipe {
    profile_dir: PathBuf,
}

impl ProfileWipe {
    pub fn new(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_dir: profile_dir.into(),
        }
    }
}

#[async_trait]
impl AppReset for ProfileWipe {
    async fn reset_application(&self) -> VaultResult<()> {
        match tokio::fs::remove_dir_all(&self.profile_dir).await {
            Ok(()) => {}
            // An absent profile still counts as wiped.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(VaultError::ResetFailed(e.to_string())),
        }
        tokio::fs::create_dir_all(&self.profile_dir)
            .await
            .map_err(|e| VaultError::ResetFailed(e.to_string()))?;
        Ok(())
    }
}
