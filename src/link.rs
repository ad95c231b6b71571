//! DSI link abstraction
//!
//! This module provides the [`DsiLink`] trait the bring-up sequence drives,
//! together with the link configuration types the panel fills in before
//! attaching.
//!
//! The packet layer itself (short/long writes, lane control, switching between
//! low-power and high-speed transmission) belongs to the host's DSI controller
//! driver. A link only has to honor [`ModeFlags::LPM`] for each write and report
//! success or failure synchronously.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use ili9488_dsi::{DsiLink, LinkConfig, ModeFlags, PixelFormat};
//!
//! struct Host {
//!     config: LinkConfig,
//! }
//!
//! impl DsiLink for Host {
//!     type Error = Infallible;
//!
//!     fn configure(&mut self, config: LinkConfig) {
//!         self.config = config;
//!     }
//!     fn mode_flags(&self) -> ModeFlags {
//!         self.config.mode_flags
//!     }
//!     fn set_mode_flags(&mut self, flags: ModeFlags) {
//!         self.config.mode_flags = flags;
//!     }
//!     fn attach(&mut self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!     fn dcs_write(&mut self, _command: u8, _payload: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut host = Host { config: LinkConfig::new(1, PixelFormat::Rgb888, ModeFlags::empty()) };
//! let _ = host.set_display_on();
//! ```

use core::fmt::Debug;

use crate::command::{
    ENTER_SLEEP_MODE, EXIT_SLEEP_MODE, NOP, SET_COLUMN_ADDRESS, SET_DISPLAY_OFF, SET_DISPLAY_ON,
    SET_PAGE_ADDRESS, SET_PIXEL_FORMAT,
};

type LinkResult<E> = core::result::Result<(), E>;

/// DSI device mode flags
///
/// A small bit set mirroring the flags a DSI host reads from its attached
/// peripheral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags(u32);

impl ModeFlags {
    /// Video mode (as opposed to command mode)
    pub const VIDEO: Self = Self(1 << 0);
    /// Video burst mode
    pub const VIDEO_BURST: Self = Self(1 << 1);
    /// Send an end-of-transmission packet
    pub const EOT_PACKET: Self = Self(1 << 9);
    /// Transmit commands in low-power mode
    pub const LPM: Self = Self(1 << 11);

    /// No flags set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Union of two flag sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// This set with every flag of `other` cleared
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every flag of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for ModeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Pixel format carried on the video stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24 bits per pixel
    #[default]
    Rgb888,
    /// 18 bits per pixel, loosely packed
    Rgb666,
    /// 16 bits per pixel
    Rgb565,
}

impl PixelFormat {
    /// Bits per pixel on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb888 => 24,
            Self::Rgb666 => 18,
            Self::Rgb565 => 16,
        }
    }

    /// DCS `set_pixel_format` parameter
    ///
    /// The same 3-bit code goes in both the DPI (bits 6:4) and DBI (bits 2:0) fields.
    pub const fn dcs_value(self) -> u8 {
        let code = match self {
            Self::Rgb888 => 0x7,
            Self::Rgb666 => 0x6,
            Self::Rgb565 => 0x5,
        };
        (code << 4) | code
    }
}

/// Characteristics of the DSI data link, filled in by the panel before attach
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// Number of data lanes
    pub lanes: u8,
    /// Video stream pixel format
    pub format: PixelFormat,
    /// Device mode flags
    pub mode_flags: ModeFlags,
}

impl LinkConfig {
    /// Create a new link configuration
    pub const fn new(lanes: u8, format: PixelFormat, mode_flags: ModeFlags) -> Self {
        Self {
            lanes,
            format,
            mode_flags,
        }
    }
}

/// Trait for the DSI link a panel is driven over
///
/// The link is owned by the host and lent to the panel for each call. The
/// `&mut` borrow is what keeps a forced high-speed write from interleaving
/// with any other transmission.
///
/// ## Implementing
///
/// Only the configuration accessors, [`attach`](DsiLink::attach) and
/// [`dcs_write`](DsiLink::dcs_write) are required. The protocol-level calls
/// have default implementations encoding the standard DCS packets; override
/// them if the host controller has dedicated helpers.
pub trait DsiLink {
    /// Error type for link operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Store the link characteristics for the next attach
    fn configure(&mut self, config: LinkConfig);

    /// Current device mode flags
    fn mode_flags(&self) -> ModeFlags;

    /// Replace the device mode flags
    fn set_mode_flags(&mut self, flags: ModeFlags);

    /// Attach the peripheral to the DSI host
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the configuration.
    fn attach(&mut self) -> LinkResult<Self::Error>;

    /// Write one DCS command with its parameters
    ///
    /// Transmitted in low-power mode if [`ModeFlags::LPM`] is currently set,
    /// high-speed otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer fails.
    fn dcs_write(&mut self, command: u8, payload: &[u8]) -> LinkResult<Self::Error>;

    /// Send a DCS no-operation
    fn nop(&mut self) -> LinkResult<Self::Error> {
        self.dcs_write(NOP, &[])
    }

    /// Request the panel to leave sleep mode
    fn exit_sleep_mode(&mut self) -> LinkResult<Self::Error> {
        self.dcs_write(EXIT_SLEEP_MODE, &[])
    }

    /// Request the panel to enter sleep mode
    fn enter_sleep_mode(&mut self) -> LinkResult<Self::Error> {
        self.dcs_write(ENTER_SLEEP_MODE, &[])
    }

    /// Set the first and last addressable column
    fn set_column_address(&mut self, start: u16, end: u16) -> LinkResult<Self::Error> {
        self.dcs_write(SET_COLUMN_ADDRESS, &address_range(start, end))
    }

    /// Set the first and last addressable page (row)
    fn set_page_address(&mut self, start: u16, end: u16) -> LinkResult<Self::Error> {
        self.dcs_write(SET_PAGE_ADDRESS, &address_range(start, end))
    }

    /// Set the interface pixel format
    fn set_pixel_format(&mut self, format: PixelFormat) -> LinkResult<Self::Error> {
        self.dcs_write(SET_PIXEL_FORMAT, &[format.dcs_value()])
    }

    /// Turn the display output on
    fn set_display_on(&mut self) -> LinkResult<Self::Error> {
        self.dcs_write(SET_DISPLAY_ON, &[])
    }

    /// Turn the display output off
    fn set_display_off(&mut self) -> LinkResult<Self::Error> {
        self.dcs_write(SET_DISPLAY_OFF, &[])
    }
}

/// Encode an address range as DCS parameters (big-endian start, end)
pub(crate) fn address_range(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
