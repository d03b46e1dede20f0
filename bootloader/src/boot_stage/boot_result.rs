// Boot outcome and fail-safe realization

use core::fmt;

use super::boot_config::{BootConfig, HaltMode};
use crate::error::BootError;

/// Terminal state of one boot run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// Control was handed to the system runtime
    Launched,
    /// Platform bring-up failed; idle until an external reset
    Halted,
    /// The persistent store could not be brought to a known-good state
    Aborted(BootError),
}

impl BootOutcome {
    pub fn is_launched(&self) -> bool {
        matches!(self, BootOutcome::Launched)
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, BootOutcome::Halted)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, BootOutcome::Aborted(_))
    }

    pub fn error(&self) -> Option<BootError> {
        match self {
            BootOutcome::Aborted(error) => Some(*error),
            _ => None,
        }
    }
}

impl fmt::Display for BootOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootOutcome::Launched => write!(f, "launched"),
            BootOutcome::Halted => write!(f, "halted (platform not ready)"),
            BootOutcome::Aborted(error) => write!(f, "aborted: {}", error),
        }
    }
}

/// Physical realization of the non-launch outcomes
///
/// The boot sequence only decides; the firmware decides what "halt" and
/// "abort" mean on its board.
pub trait FailSafe {
    /// Park the CPU until a watchdog reset or power cycle
    fn halt(&mut self) -> !;

    /// Stop on a fatal boot error
    fn abort(&mut self, error: BootError) -> !;
}

/// Default fail-safe: idle on halt, panic on abort
#[derive(Debug, Clone, Copy)]
pub struct IdleFailSafe {
    mode: HaltMode,
}

impl IdleFailSafe {
    pub const fn new(mode: HaltMode) -> Self {
        Self { mode }
    }

    pub const fn from_config(config: &BootConfig) -> Self {
        Self::new(config.halt_mode)
    }

    pub fn mode(&self) -> HaltMode {
        self.mode
    }
}

impl FailSafe for IdleFailSafe {
    fn halt(&mut self) -> ! {
        log::warn!("System halted, waiting for external reset");
        boot_halt(self.mode)
    }

    fn abort(&mut self, error: BootError) -> ! {
        log::error!("{}", error);
        panic!("boot aborted: {}", error);
    }
}

/// Idle forever
pub fn boot_halt(mode: HaltMode) -> ! {
    loop {
        match mode {
            HaltMode::Spin => core::hint::spin_loop(),
            HaltMode::WaitForInterrupt => wait_for_interrupt(),
        }
    }
}

#[inline(always)]
fn wait_for_interrupt() {
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    // SAFETY: `wfi` only stalls the hart until the next interrupt
    unsafe {
        core::arch::asm!("wfi", options(nomem, nostack));
    }
    #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
    // SAFETY: `wfi` only stalls the core until the next interrupt
    unsafe {
        core::arch::asm!("wfi", options(nomem, nostack));
    }
    #[cfg(target_arch = "xtensa")]
    // SAFETY: `waiti 0` enables all interrupt levels and sleeps until one fires
    unsafe {
        core::arch::asm!("waiti 0", options(nomem, nostack));
    }
    #[cfg(not(any(
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "xtensa"
    )))]
    core::hint::spin_loop();
}
