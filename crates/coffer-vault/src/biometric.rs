//! Local platform authentication (biometric / PIN) bridge.
//!
//! Desktop builds currently wire no authenticator. The trait is the seam a
//! platform backend (Touch ID, Windows Hello, fingerprint daemon) plugs
//! into; the unlock screen renders the affordance only when one is present
//! and usable.

use async_trait::async_trait;

use crate::error::VaultResult;

/// What the platform reports about its authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricCapability {
    /// Hardware present and enrolled; prompting will work.
    Available,
    /// No authenticator hardware on this device.
    NoHardware,
    /// Hardware present but nothing enrolled.
    NotEnrolled,
}

impl BiometricCapability {
    pub fn is_usable(self) -> bool {
        self == BiometricCapability::Available
    }
}

/// Platform-agnostic local authentication interface.
#[async_trait]
pub trait LocalAuthenticator: Send + Sync {
    fn capability(&self) -> BiometricCapability;

    /// Prompt the user. `Ok(())` is a successful presence check and grants
    /// the same unlock as a correct password.
    async fn authenticate(&self, reason: &str) -> VaultResult<()>;
}
