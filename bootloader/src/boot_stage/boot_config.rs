// Boot configuration and runtime settings

use log::LevelFilter;

/// How the fail-safe halt idles while waiting for an external reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltMode {
    /// Busy spin
    Spin,
    /// Sleep until the next interrupt where the core supports it, else spin
    WaitForInterrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootConfig {
    pub log_level: LevelFilter,
    pub halt_mode: HaltMode,
    pub report_summary: bool,
}

impl BootConfig {
    pub const fn new() -> Self {
        Self {
            log_level: LevelFilter::Info,
            halt_mode: HaltMode::WaitForInterrupt,
            report_summary: true,
        }
    }

    pub const fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub const fn with_halt_mode(mut self, mode: HaltMode) -> Self {
        self.halt_mode = mode;
        self
    }

    pub const fn with_summary(mut self, report: bool) -> Self {
        self.report_summary = report;
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.log_level >= LevelFilter::Debug
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::new()
    }
}
