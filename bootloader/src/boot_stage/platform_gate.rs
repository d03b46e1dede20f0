// Platform gate - no flight logic on unverified hardware

use fc_api::Platform;

use super::boot_summary::BootSummary;
use crate::core::boot_state::{BootPhase, BootState};
use crate::error::{BootError, Result};

/// Run hardware bring-up once. `Err(PlatformNotReady)` means halt, not abort.
pub fn check_platform<P>(
    platform: &mut P,
    state: &mut BootState,
    summary: &mut BootSummary,
) -> Result
where
    P: Platform + ?Sized,
{
    state.set_phase(BootPhase::PlatformInit)?;
    let ready = platform.init();
    summary.record_platform(ready);

    if ready {
        log::info!("Platform initialized");
        Ok(())
    } else {
        log::error!("Platform initialization failed");
        Err(BootError::PlatformNotReady)
    }
}
