//! Bootloader error handling
//!
//! This module defines the error types used by the boot sequence
//! for consistent error reporting and handling.

use core::fmt;

use fc_api::StoreStatus;

/// Bootloader error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    /// First store init failed with a status that erasing cannot fix
    StoreInitFailed(StoreStatus),

    /// Store init still failed after erase-and-retry
    StoreRetryFailed(StoreStatus),

    /// Erasing a corrupt store failed
    StoreEraseFailed(StoreStatus),

    /// Platform bring-up reported the hardware unsafe
    PlatformNotReady,

    /// Boot phase transition outside the boot state machine
    InvalidState,

    /// Application runtime returned control to the bootloader
    RuntimeReturned,

    /// A global logger was already registered
    LoggerAlreadyInitialized,
}

impl BootError {
    /// Convert to an error code suitable for a crash log or reset reason
    pub fn as_error_code(&self) -> u32 {
        match self {
            BootError::StoreInitFailed(status) => 0x1000 | status_bits(status),
            BootError::StoreRetryFailed(status) => 0x2000 | status_bits(status),
            BootError::StoreEraseFailed(status) => 0x3000 | status_bits(status),
            BootError::PlatformNotReady => 0x4000,
            BootError::InvalidState => 0xE001,
            BootError::RuntimeReturned => 0xF000,
            BootError::LoggerAlreadyInitialized => 0xF001,
        }
    }

    /// Get a human-readable description of the error
    pub fn description(&self) -> &'static str {
        match self {
            BootError::StoreInitFailed(_) => "Persistent store init failed",
            BootError::StoreRetryFailed(_) => "Persistent store init failed after erase",
            BootError::StoreEraseFailed(_) => "Persistent store erase failed",
            BootError::PlatformNotReady => "Platform bring-up failed",
            BootError::InvalidState => "Invalid boot state transition",
            BootError::RuntimeReturned => "System runtime unexpectedly returned",
            BootError::LoggerAlreadyInitialized => "Logger already initialized",
        }
    }

    /// Store status behind a store failure, if any
    pub fn store_status(&self) -> Option<StoreStatus> {
        match self {
            BootError::StoreInitFailed(status)
            | BootError::StoreRetryFailed(status)
            | BootError::StoreEraseFailed(status) => Some(*status),
            _ => None,
        }
    }

    /// Check if a single erase-and-retry can clear this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            BootError::StoreInitFailed(status) => status.is_recoverable(),
            _ => false,
        }
    }
}

fn status_bits(status: &StoreStatus) -> u32 {
    match status {
        StoreStatus::Ok => 0x0,
        StoreStatus::NoFreePages => 0x1,
        StoreStatus::NewVersionFound => 0x2,
        StoreStatus::OtherFailure => 0xF,
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store_status() {
            Some(status) => write!(
                f,
                "BootError: {}: {} (code: {:#x})",
                self.description(),
                status,
                self.as_error_code()
            ),
            None => write!(
                f,
                "BootError: {} (code: {:#x})",
                self.description(),
                self.as_error_code()
            ),
        }
    }
}

/// Result type used throughout the bootloader
pub type Result<T = ()> = core::result::Result<T, BootError>;
