//! FC API - Collaborator contracts for the flight-controller boot orchestrator
//!
//! The boot orchestrator drives three subsystems that live outside of it:
//!
//! - **Store**: the flash-backed key-value store ([`PersistentStore`])
//! - **Platform**: hardware bring-up ([`Platform`])
//! - **Runtime**: the scheduler and application ([`SystemRuntime`])
//!
//! Each subsystem implements its trait from this crate, so none of them has
//! to depend on the orchestrator itself.
//!
//! # Usage
//!
//! ```rust
//! use fc_api::{PersistentStore, StoreStatus};
//!
//! struct RamStore {
//!     erased: bool,
//! }
//!
//! impl PersistentStore for RamStore {
//!     fn init(&mut self) -> StoreStatus {
//!         if self.erased { StoreStatus::Ok } else { StoreStatus::NoFreePages }
//!     }
//!
//!     fn erase(&mut self) -> StoreStatus {
//!         self.erased = true;
//!         StoreStatus::Ok
//!     }
//! }
//!
//! let mut store = RamStore { erased: false };
//! assert!(store.init().is_recoverable());
//! assert!(store.erase().is_ok());
//! assert!(store.init().is_ok());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod platform;
pub mod runtime;
pub mod store;

pub use platform::Platform;
pub use runtime::SystemRuntime;
pub use store::{PersistentStore, StoreStatus};

#[cfg(feature = "mock")]
pub use platform::MockPlatform;
#[cfg(feature = "mock")]
pub use runtime::MockSystemRuntime;
#[cfg(feature = "mock")]
pub use store::MockPersistentStore;
