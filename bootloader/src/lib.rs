//! FC Bootloader Library - Power-on boot orchestration
//!
//! Runs once at power-on/reset, before any scheduler exists:
//!
//! 1. bring the persistent store to a known-good state, erasing it at most
//!    once when it is corrupt or from an incompatible firmware version
//! 2. refuse to continue on hardware that failed bring-up
//! 3. hand control to the system runtime for good
//!
//! The sequence itself is a plain function from collaborator answers to a
//! [`BootOutcome`](boot_stage::BootOutcome). The firmware's
//! [`FailSafe`](boot_stage::FailSafe) decides what halting and aborting
//! physically mean.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "xtensa", feature(asm_experimental_arch))]

/// Core - Boot phase tracking
pub mod core;

/// Boot orchestration - Store init, platform gate, handoff
pub mod boot_stage;

/// Bootloader error types
pub mod error;

/// Utility library - Logging
pub mod utils;

pub use boot_stage::{
    boot_main, firmware_main, run_boot_sequence, BootConfig, BootCoordinator, BootOutcome, FailSafe,
};
pub use error::{BootError, Result};
pub use fc_api::{PersistentStore, Platform, StoreStatus, SystemRuntime};
