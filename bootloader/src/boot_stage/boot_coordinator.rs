//! Boot Coordinator - Power-on boot sequencing
//!
//! Drives the persistent store, the platform gate and the runtime handoff in
//! that order and turns the collaborators' answers into exactly one
//! [`BootOutcome`]. Nothing here idles, resets or panics: realizing a halt or
//! an abort is the job of the firmware's [`FailSafe`](super::boot_result::FailSafe).

use fc_api::{PersistentStore, Platform, SystemRuntime};

use super::{
    boot_config::BootConfig,
    boot_result::BootOutcome,
    boot_summary::BootSummary,
    platform_gate::check_platform,
    store_init::init_persistent_store,
};
use crate::{
    core::boot_state::{BootPhase, BootState},
    error::{BootError, Result},
};

/// Boot Coordinator - one power-on sequence over three collaborators
pub struct BootCoordinator<S, P, R> {
    config: BootConfig,
    store: S,
    platform: P,
    runtime: R,
    summary: BootSummary,
}

impl<S, P, R> BootCoordinator<S, P, R>
where
    S: PersistentStore,
    P: Platform,
    R: SystemRuntime,
{
    /// Create new boot coordinator
    pub fn new(config: BootConfig, store: S, platform: P, runtime: R) -> Self {
        Self {
            config,
            store,
            platform,
            runtime,
            summary: BootSummary::new(),
        }
    }

    /// Run the boot sequence from `Start` to a terminal outcome
    ///
    /// Every run starts from a fresh [`BootState`]; the only thing kept
    /// afterwards is the summary of the latest run.
    pub fn run(&mut self) -> BootOutcome {
        let mut state = BootState::new();
        let mut summary = BootSummary::new();

        let outcome = match self.sequence(&mut state, &mut summary) {
            Ok(outcome) => outcome,
            Err(error) => {
                if state.set_error().is_err() {
                    log::error!("Boot aborted from phase {}", state.get_phase().name());
                }
                BootOutcome::Aborted(error)
            }
        };

        summary.record_outcome(outcome);
        if self.config.report_summary {
            summary.log_summary(self.config.is_verbose());
        }
        self.summary = summary;
        outcome
    }

    fn sequence(
        &mut self,
        state: &mut BootState,
        summary: &mut BootSummary,
    ) -> Result<BootOutcome> {
        init_persistent_store(&mut self.store, state, summary)?;

        match check_platform(&mut self.platform, state, summary) {
            Ok(()) => {}
            Err(BootError::PlatformNotReady) => {
                state.set_phase(BootPhase::Halted)?;
                return Ok(BootOutcome::Halted);
            }
            Err(error) => return Err(error),
        }

        // The runtime never hands control back in firmware, so the phase
        // has to be final before the call.
        state.set_phase(BootPhase::Launched)?;
        log::info!("Launching system runtime");
        self.runtime.launch();
        Ok(BootOutcome::Launched)
    }

    /// Get current boot configuration
    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Summary of the most recent run
    pub fn summary(&self) -> &BootSummary {
        &self.summary
    }

    pub fn into_parts(self) -> (S, P, R) {
        (self.store, self.platform, self.runtime)
    }
}

/// Run one boot sequence with the default configuration
pub fn run_boot_sequence<S, P, R>(store: S, platform: P, runtime: R) -> BootOutcome
where
    S: PersistentStore,
    P: Platform,
    R: SystemRuntime,
{
    BootCoordinator::new(BootConfig::default(), store, platform, runtime).run()
}
