// Boot state tracking for debugging and diagnostics

use crate::error::{BootError, Result};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Start = 0,
    StoreInit = 1,
    StoreErase = 2,
    StoreRetry = 3,
    PlatformInit = 4,
    Launched = 5,
    Halted = 6,
    Aborted = 0xFFFF_FFFF,
}

impl BootPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootPhase::Launched | BootPhase::Halted | BootPhase::Aborted)
    }

    /// Edges of the boot state machine. Nothing leads back to an earlier phase.
    pub fn can_transition_to(&self, next: BootPhase) -> bool {
        use BootPhase::*;
        matches!(
            (self, next),
            (Start, StoreInit)
                | (StoreInit, PlatformInit)
                | (StoreInit, StoreErase)
                | (StoreInit, Aborted)
                | (StoreErase, StoreRetry)
                | (StoreErase, Aborted)
                | (StoreRetry, PlatformInit)
                | (StoreRetry, Aborted)
                | (PlatformInit, Launched)
                | (PlatformInit, Halted)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            BootPhase::Start => "start",
            BootPhase::StoreInit => "store-init",
            BootPhase::StoreErase => "store-erase",
            BootPhase::StoreRetry => "store-retry",
            BootPhase::PlatformInit => "platform-init",
            BootPhase::Launched => "launched",
            BootPhase::Halted => "halted",
            BootPhase::Aborted => "aborted",
        }
    }
}

/// Phase of a single boot run. One per run, never shared.
#[derive(Debug)]
pub struct BootState {
    current_phase: BootPhase,
}

impl BootState {
    pub fn new() -> Self {
        Self {
            current_phase: BootPhase::Start,
        }
    }

    pub fn set_phase(&mut self, phase: BootPhase) -> Result {
        if !self.current_phase.can_transition_to(phase) {
            log::error!(
                "Rejected boot phase transition {} -> {}",
                self.current_phase.name(),
                phase.name()
            );
            return Err(BootError::InvalidState);
        }
        log::debug!("Boot phase {} -> {}", self.current_phase.name(), phase.name());
        self.current_phase = phase;
        Ok(())
    }

    pub fn get_phase(&self) -> BootPhase {
        self.current_phase
    }

    pub fn set_error(&mut self) -> Result {
        self.set_phase(BootPhase::Aborted)
    }

    pub fn is_error(&self) -> bool {
        self.current_phase == BootPhase::Aborted
    }

    pub fn is_finished(&self) -> bool {
        self.current_phase.is_terminal()
    }
}

impl Default for BootState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path_transitions() {
        let mut state = BootState::new();
        assert_eq!(state.get_phase(), BootPhase::Start);
        for phase in [BootPhase::StoreInit, BootPhase::PlatformInit, BootPhase::Launched] {
            assert!(state.set_phase(phase).is_ok());
        }
        assert!(state.is_finished());
        assert!(!state.is_error());
    }

    #[test]
    fn test_retry_path_transitions() {
        let mut state = BootState::new();
        state.set_phase(BootPhase::StoreInit).unwrap();
        state.set_phase(BootPhase::StoreErase).unwrap();
        state.set_phase(BootPhase::StoreRetry).unwrap();
        state.set_error().unwrap();
        assert!(state.is_error());
    }

    #[test]
    fn test_never_loops_back() {
        let mut state = BootState::new();
        state.set_phase(BootPhase::StoreInit).unwrap();
        state.set_phase(BootPhase::StoreErase).unwrap();
        state.set_phase(BootPhase::StoreRetry).unwrap();
        // A second erase would be another retry cycle
        assert_eq!(state.set_phase(BootPhase::StoreErase), Err(BootError::InvalidState));
        assert_eq!(state.set_phase(BootPhase::StoreInit), Err(BootError::InvalidState));
        assert_eq!(state.get_phase(), BootPhase::StoreRetry);
    }

    #[test]
    fn test_terminal_phases_are_final() {
        for terminal in [BootPhase::Launched, BootPhase::Halted, BootPhase::Aborted] {
            for next in [
                BootPhase::Start,
                BootPhase::StoreInit,
                BootPhase::StoreErase,
                BootPhase::StoreRetry,
                BootPhase::PlatformInit,
                BootPhase::Launched,
                BootPhase::Halted,
                BootPhase::Aborted,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_platform_requires_verified_store() {
        assert!(!BootPhase::Start.can_transition_to(BootPhase::PlatformInit));
        assert!(!BootPhase::StoreErase.can_transition_to(BootPhase::PlatformInit));
    }
}
