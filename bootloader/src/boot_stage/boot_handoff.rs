// Boot handoff - firmware entry and terminal realization

use fc_api::{PersistentStore, Platform, SystemRuntime};

use super::{
    boot_config::BootConfig,
    boot_coordinator::BootCoordinator,
    boot_result::{BootOutcome, FailSafe},
};
use crate::{
    error::BootError,
    utils::logger::{self, LogSink},
};

/// Run the boot sequence and never come back
///
/// `Launched` only reaches this point if the runtime returned, which in
/// firmware is a fault, so it is aborted like any other fatal error.
pub fn boot_main<S, P, R, F>(
    config: BootConfig,
    store: S,
    platform: P,
    runtime: R,
    mut fail_safe: F,
) -> !
where
    S: PersistentStore,
    P: Platform,
    R: SystemRuntime,
    F: FailSafe,
{
    logger::set_level(config.log_level);
    log::info!("Boot orchestrator starting");

    let mut coordinator = BootCoordinator::new(config, store, platform, runtime);
    match coordinator.run() {
        BootOutcome::Launched => fail_safe.abort(BootError::RuntimeReturned),
        BootOutcome::Halted => fail_safe.halt(),
        BootOutcome::Aborted(error) => fail_safe.abort(error),
    }
}

/// Body of the `app_main` generated by [`boot_entry!`]
///
/// Installs the boot console when one is given, then runs [`boot_main`].
/// A logger that is already installed is kept; only its level changes.
pub fn firmware_main<S, P, R, F>(
    config: BootConfig,
    console: Option<LogSink>,
    store: S,
    platform: P,
    runtime: R,
    fail_safe: F,
) -> !
where
    S: PersistentStore,
    P: Platform,
    R: SystemRuntime,
    F: FailSafe,
{
    if let Some(sink) = console {
        if let Err(error) = logger::init(sink, config.log_level) {
            log::warn!("Boot console not installed: {}", error);
        }
    }
    boot_main(config, store, platform, runtime, fail_safe)
}

/// Define the firmware's `app_main` symbol
///
/// The optional `console` is any `&'static mut (dyn core::fmt::Write + Send)`
/// and becomes the `log` backend at `config.log_level`. Halting idles the
/// way `config.halt_mode` says.
///
/// ```ignore
/// fc_bootloader::boot_entry!(
///     BootConfig::new(),
///     NvsFlash::take(),
///     Esp32Board::new(),
///     FreeRtosSystem::new(),
///     console = Uart0::take(),
/// );
/// ```
#[macro_export]
macro_rules! boot_entry {
    (@app_main $config:expr, $console:expr, $store:expr, $platform:expr, $runtime:expr) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn app_main() -> ! {
            let config: $crate::boot_stage::BootConfig = $config;
            $crate::boot_stage::boot_handoff::firmware_main(
                config,
                $console,
                $store,
                $platform,
                $runtime,
                $crate::boot_stage::boot_result::IdleFailSafe::from_config(&config),
            )
        }
    };
    ($config:expr, $store:expr, $platform:expr, $runtime:expr, console = $console:expr $(,)?) => {
        $crate::boot_entry!(
            @app_main $config,
            ::core::option::Option::Some($console),
            $store,
            $platform,
            $runtime
        );
    };
    ($config:expr, $store:expr, $platform:expr, $runtime:expr $(,)?) => {
        $crate::boot_entry!(
            @app_main $config,
            ::core::option::Option::None,
            $store,
            $platform,
            $runtime
        );
    };
}
