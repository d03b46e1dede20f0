//! Persistent store initialization
//!
//! A store that reports no free pages or a newer format version is corrupt
//! or left over from another firmware build; one wipe fixes it. Anything
//! else, including the same corruption after the wipe, is fatal: booting on
//! an unverified store is not an option.

use fc_api::{PersistentStore, StoreStatus};

use super::boot_summary::BootSummary;
use crate::core::boot_state::{BootPhase, BootState};
use crate::error::{BootError, Result};

/// Bring the store to `Ok`, erasing and retrying at most once
pub fn init_persistent_store<S>(
    store: &mut S,
    state: &mut BootState,
    summary: &mut BootSummary,
) -> Result
where
    S: PersistentStore + ?Sized,
{
    state.set_phase(BootPhase::StoreInit)?;
    let status = store.init();
    summary.record_store_init(status);

    match status {
        StoreStatus::Ok => {
            log::info!("Persistent store ready");
            Ok(())
        }
        status if status.is_recoverable() => {
            log::warn!("Persistent store unusable ({}), erasing", status);
            erase_and_retry(store, state, summary)
        }
        status => {
            log::error!("Persistent store init failed: {}", status);
            Err(BootError::StoreInitFailed(status))
        }
    }
}

fn erase_and_retry<S>(store: &mut S, state: &mut BootState, summary: &mut BootSummary) -> Result
where
    S: PersistentStore + ?Sized,
{
    state.set_phase(BootPhase::StoreErase)?;
    let erased = store.erase();
    summary.record_erase();
    if !erased.is_ok() {
        log::error!("Persistent store erase failed: {}", erased);
        return Err(BootError::StoreEraseFailed(erased));
    }

    state.set_phase(BootPhase::StoreRetry)?;
    let status = store.init();
    summary.record_store_init(status);
    if !status.is_ok() {
        log::error!("Persistent store init failed after erase: {}", status);
        return Err(BootError::StoreRetryFailed(status));
    }

    log::info!("Persistent store ready after erase");
    Ok(())
}
