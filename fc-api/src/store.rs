//! Persistent store contract
//!
//! Status codes mirror the ESP-IDF NVS error space so a flash driver can
//! hand its raw `esp_err_t` straight to [`StoreStatus::from_raw`].

use core::fmt;

use static_assertions::const_assert;

/// `ESP_OK`
pub const ESP_OK: i32 = 0;
/// `ESP_ERR_NVS_NO_FREE_PAGES`: the NVS partition is full or truncated
pub const ESP_ERR_NVS_NO_FREE_PAGES: i32 = 0x110d;
/// `ESP_ERR_NVS_NEW_VERSION_FOUND`: the partition holds data in a newer format
pub const ESP_ERR_NVS_NEW_VERSION_FOUND: i32 = 0x1110;
/// Code reported for [`StoreStatus::OtherFailure`] (`ESP_FAIL`)
pub const ESP_FAIL: i32 = -1;

const_assert!(ESP_ERR_NVS_NO_FREE_PAGES != ESP_ERR_NVS_NEW_VERSION_FOUND);
const_assert!(ESP_OK != ESP_FAIL);

/// Outcome of a persistent-store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreStatus {
    /// Store opened and validated
    Ok,
    /// No free pages left; the store is corrupt or truncated
    NoFreePages,
    /// Store was written by an incompatible (newer) format version
    NewVersionFound,
    /// Anything else, e.g. a flash I/O fault
    OtherFailure,
}

impl StoreStatus {
    /// Map a raw `esp_err_t` to a status. Unknown codes are `OtherFailure`.
    pub const fn from_raw(code: i32) -> Self {
        match code {
            ESP_OK => StoreStatus::Ok,
            ESP_ERR_NVS_NO_FREE_PAGES => StoreStatus::NoFreePages,
            ESP_ERR_NVS_NEW_VERSION_FOUND => StoreStatus::NewVersionFound,
            _ => StoreStatus::OtherFailure,
        }
    }

    pub const fn as_raw(&self) -> i32 {
        match self {
            StoreStatus::Ok => ESP_OK,
            StoreStatus::NoFreePages => ESP_ERR_NVS_NO_FREE_PAGES,
            StoreStatus::NewVersionFound => ESP_ERR_NVS_NEW_VERSION_FOUND,
            StoreStatus::OtherFailure => ESP_FAIL,
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, StoreStatus::Ok)
    }

    /// Corrupt or incompatible store that a single wipe resolves
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, StoreStatus::NoFreePages | StoreStatus::NewVersionFound)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            StoreStatus::Ok => "ESP_OK",
            StoreStatus::NoFreePages => "ESP_ERR_NVS_NO_FREE_PAGES",
            StoreStatus::NewVersionFound => "ESP_ERR_NVS_NEW_VERSION_FOUND",
            StoreStatus::OtherFailure => "ESP_FAIL",
        }
    }
}

impl From<i32> for StoreStatus {
    fn from(code: i32) -> Self {
        Self::from_raw(code)
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#x})", self.name(), self.as_raw())
    }
}

/// Flash-backed key-value store
///
/// Both calls may block on flash I/O. The orchestrator is the only caller
/// during boot, so implementations need no locking around `erase`.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PersistentStore {
    /// Open and validate the store
    fn init(&mut self) -> StoreStatus;

    /// Destructively wipe the store so the next `init` starts clean
    fn erase(&mut self) -> StoreStatus;
}
