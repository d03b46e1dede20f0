// Boot sequence summary and diagnostic output

use fc_api::StoreStatus;

use super::boot_result::BootOutcome;

/// What one boot run did, for the crash log and the boot banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootSummary {
    pub store_init_attempts: u8,
    pub store_erased: bool,
    pub first_store_status: Option<StoreStatus>,
    pub final_store_status: Option<StoreStatus>,
    pub platform_ready: Option<bool>,
    pub outcome: Option<BootOutcome>,
}

impl BootSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_store_init(&mut self, status: StoreStatus) {
        self.store_init_attempts += 1;
        if self.first_store_status.is_none() {
            self.first_store_status = Some(status);
        }
        self.final_store_status = Some(status);
    }

    pub fn record_erase(&mut self) {
        self.store_erased = true;
    }

    pub fn record_platform(&mut self, ready: bool) {
        self.platform_ready = Some(ready);
    }

    pub fn record_outcome(&mut self, outcome: BootOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Log the summary; `detailed` adds the status of every store attempt
    pub fn log_summary(&self, detailed: bool) {
        log::info!("=== Boot Summary ===");
        log::info!(
            "Store: {} attempt(s), erased: {}",
            self.store_init_attempts,
            if self.store_erased { "yes" } else { "no" }
        );
        if detailed && self.store_init_attempts > 1 {
            if let Some(status) = self.first_store_status {
                log::info!("Store status before erase: {}", status);
            }
        }
        if let Some(status) = self.final_store_status {
            log::info!("Store status: {}", status);
        }
        match self.platform_ready {
            Some(true) => log::info!("Platform: ready"),
            Some(false) => log::info!("Platform: FAILED"),
            None => log::info!("Platform: not started"),
        }
        match self.outcome {
            Some(outcome) => log::info!("Outcome: {}", outcome),
            None => log::info!("Outcome: pending"),
        }
    }
}
