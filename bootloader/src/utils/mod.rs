//! Utility Library - Logging

pub mod logger;
