//! Platform bring-up contract

/// Hardware bring-up (clocks, buses, sensors, motor outputs)
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Platform {
    /// Bring the hardware up. `false` means it is unsafe to continue booting.
    fn init(&mut self) -> bool;
}
