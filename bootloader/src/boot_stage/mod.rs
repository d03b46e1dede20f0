//! Boot Stage - Store initialization, platform gate, runtime handoff

pub mod boot_config;
pub mod boot_coordinator;
pub mod boot_handoff;
pub mod boot_result;
pub mod boot_summary;
pub mod platform_gate;
pub mod store_init;

// Re-export commonly used types
pub use boot_config::{BootConfig, HaltMode};
pub use boot_coordinator::{run_boot_sequence, BootCoordinator};
pub use boot_handoff::{boot_main, firmware_main};
pub use boot_result::{BootOutcome, FailSafe, IdleFailSafe};
pub use boot_summary::BootSummary;
