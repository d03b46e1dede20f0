//! Core - Boot state tracking

pub mod boot_state;
