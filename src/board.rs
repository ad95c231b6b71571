//! Board resource lookup
//!
//! The host's board description (device tree, static tables, ...) is reached
//! through [`BoardDescriptor`]. Lookups return `Ok(None)` when the board simply
//! does not describe the resource, which is distinct from a resource that is
//! described but cannot be requested.

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

/// Property name of the panel power supply
pub const SUPPLY_NAME: &str = "power-supply";

/// Property name of the panel reset line
pub const RESET_NAME: &str = "reset-gpios";

/// A switchable voltage supply
pub trait PowerSupply {
    /// Error type for supply operations
    type Error: Debug;

    /// Switch the supply on or off
    ///
    /// # Errors
    ///
    /// Returns an error if the regulator refuses the request.
    fn set_enable(&mut self, enable: bool) -> Result<(), Self::Error>;
}

/// Lookup of board resources by name
pub trait BoardDescriptor {
    /// Supply handle type
    type Supply: PowerSupply;
    /// Output line type
    type Line: OutputPin;
    /// Lookup failure
    type Error: Debug;

    /// Resolve a voltage supply by name
    ///
    /// # Errors
    ///
    /// Returns an error if the supply is described but cannot be requested.
    fn supply(&mut self, name: &str) -> Result<Option<Self::Supply>, Self::Error>;

    /// Resolve a GPIO line by name, configured as an output
    ///
    /// # Errors
    ///
    /// Returns an error if the line is described but cannot be requested.
    fn output_line(&mut self, name: &str) -> Result<Option<Self::Line>, Self::Error>;
}

/// Placeholder supply for panels wired straight to a fixed rail
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoSupply;

impl PowerSupply for NoSupply {
    type Error = core::convert::Infallible;

    fn set_enable(&mut self, _enable: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}
