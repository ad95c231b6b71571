//! ILI9488 MIPI-DSI Panel Driver
//!
//! A bring-up driver for ILI9488-based panels attached over MIPI-DSI, taking the
//! panel from unpowered to displaying and reporting its video timing to the
//! display pipeline.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support for the reset line and delays
//! - Data-driven init sequences, one table per panel variant
//! - Hard/soft failure classification per command
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ili9488_dsi::{Builder, DsiLink, LinkConfig, ModeFlags, NoSupply, Panel};
//!
//! # struct MockLink(ModeFlags);
//! # impl DsiLink for MockLink {
//! #     type Error = Infallible;
//! #     fn configure(&mut self, config: LinkConfig) { self.0 = config.mode_flags; }
//! #     fn mode_flags(&self) -> ModeFlags { self.0 }
//! #     fn set_mode_flags(&mut self, flags: ModeFlags) { self.0 = flags; }
//! #     fn attach(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn dcs_write(&mut self, _cmd: u8, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut link = MockLink(ModeFlags::empty());
//! # let reset = MockPin;
//! # let mut delay = MockDelay;
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut panel: Panel<_, NoSupply> = Panel::new(reset, None, config);
//! let timing = panel.get_timing();
//! let _ = panel.enable_display(&mut link, &mut delay);
//! # let _ = timing;
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Board resource lookup
pub mod board;
/// ILI9488 and DCS command definitions
pub mod command;
/// Panel configuration types and builder
pub mod config;
/// Host registration surface
pub mod driver;
/// Command transmission over the link
pub mod encoder;
/// Error types for the driver
pub mod error;
/// DSI link abstraction
pub mod link;
/// Panel bring-up state machine
pub mod panel;
/// Power and reset sequencing
pub mod power;
/// Init sequence tables
pub mod sequence;
/// Video timing descriptor
pub mod timing;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use board::{BoardDescriptor, NoSupply, PowerSupply};
pub use config::{Builder, Config, DEFAULT_BRIGHTNESS, DEFAULT_MODE_FLAGS, MAX_LANES};
pub use driver::{COMPATIBLE, DRIVER, ILI9488_FRD350H, PanelOps, PanelVariant};
pub use error::{BuilderError, DiscoveryError, Error, ErrorKind, Step};
pub use link::{DsiLink, LinkConfig, ModeFlags, PixelFormat};
pub use panel::{BringupState, Panel};
pub use sequence::{CommandEntry, FailurePolicy, TransmitMode};
pub use timing::{ILI9488_TIMING, TimingDescriptor};
