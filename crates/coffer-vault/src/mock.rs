//! Scripted in-memory implementations of the vault services for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::biometric::{BiometricCapability, LocalAuthenticator};
use crate::credentials::{CredentialAttempt, CredentialVerifier};
use crate::error::{VaultError, VaultResult};
use crate::reset::AppReset;

/// Verifier with a scripted answer and an invocation counter.
pub struct MockCredentialVerifier {
    accepted: Option<String>,
    outage: Option<String>,
    calls: AtomicUsize,
}

impl MockCredentialVerifier {
    /// Accepts exactly this password, rejects everything else.
    pub fn accepting(password: &str) -> Self {
        Self {
            accepted: Some(password.to_string()),
            outage: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Rejects every attempt.
    pub fn rejecting() -> Self {
        Self {
            accepted: None,
            outage: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Errors on every attempt, simulating a verifier that cannot run.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            accepted: None,
            outage: Some(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many verifications actually ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify_password(&self, attempt: CredentialAttempt) -> VaultResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.outage {
            return Err(VaultError::Io(reason.clone()));
        }
        Ok(self.accepted.as_deref() == Some(attempt.password()))
    }
}

/// Local authenticator with a scripted prompt result.
pub struct MockLocalAuthenticator {
    capability: BiometricCapability,
    should_succeed: bool,
    calls: AtomicUsize,
}

impl MockLocalAuthenticator {
    pub fn success() -> Self {
        Self {
            capability: BiometricCapability::Available,
            should_succeed: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failure() -> Self {
        Self {
            capability: BiometricCapability::Available,
            should_succeed: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_hardware() -> Self {
        Self {
            capability: BiometricCapability::NoHardware,
            should_succeed: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocalAuthenticator for MockLocalAuthenticator {
    fn capability(&self) -> BiometricCapability {
        self.capability
    }

    async fn authenticate(&self, _reason: &str) -> VaultResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_succeed {
            Ok(())
        } else {
            Err(VaultError::BiometricFailed)
        }
    }
}

/// App reset with a scripted outcome and an invocation counter.
pub struct MockAppReset {
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockAppReset {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppReset for MockAppReset {
    async fn reset_application(&self) -> VaultResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(VaultError::ResetFailed(reason.clone())),
            None => Ok(()),
        }
    }
}
