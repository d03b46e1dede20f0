//! System runtime contract

/// Scheduler and application entry
///
/// Firmware implementations never return from [`SystemRuntime::launch`]:
/// the scheduler takes over the CPU for good. The signature still returns
/// `()` so host-side doubles can record the handoff; the boot entry treats
/// a return as a fault.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SystemRuntime {
    /// Hand control to the application runtime
    fn launch(&mut self);
}
