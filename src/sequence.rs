//! Init sequence tables
//!
//! A panel's register configuration burst is described as data: an ordered
//! slice of [`CommandEntry`] values sent one after the other once the link is
//! attached. Order matters. The sleep-out request must come first, and the
//! pixel format must be set before the controller is told to expect pixel data.
//!
//! A new panel of the same family supplies its own table and reuses the rest
//! of the bring-up unchanged.
//!
//! ## Example
//!
//! ```
//! use ili9488_dsi::sequence::{CommandEntry, FailurePolicy, TransmitMode, ILI9488_INIT_SEQUENCE};
//!
//! let first = &ILI9488_INIT_SEQUENCE[0];
//! assert_eq!(first.command, 0x11);
//! assert_eq!(first.delay_after_ms, 100);
//!
//! const BACKLIGHT: CommandEntry<'static> = CommandEntry::new(0x53, &[]).high_speed();
//! assert_eq!(BACKLIGHT.mode, TransmitMode::HighSpeed);
//! assert_eq!(BACKLIGHT.policy, FailurePolicy::Soft);
//! ```

use crate::command::{
    ADJUST_CONTROL_3, DISPLAY_FUNCTION_CTRL, DISPLAY_INVERSION_CTRL, EXIT_SLEEP_MODE,
    FRAME_RATE_CTRL, INTERFACE_MODE_CTRL, NEGATIVE_GAMMA, POSITIVE_GAMMA, POWER_CONTROL_1,
    POWER_CONTROL_2, SET_ADDRESS_MODE, SET_IMAGE_FUNCTION, SET_PIXEL_FORMAT, VCOM_CONTROL,
};
use crate::link::PixelFormat;

/// How a command is put on the link
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransmitMode {
    /// Whatever mode the link is currently configured for (low-power after attach)
    #[default]
    Default,
    /// High-speed for this one transmission, then restore the previous mode
    HighSpeed,
}

/// What a failed transmission means for the rest of bring-up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Logged and ignored
    #[default]
    Soft,
    /// Aborts bring-up
    Hard,
}

/// One command of an init sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandEntry<'a> {
    /// DCS or manufacturer command byte
    pub command: u8,
    /// Parameter bytes
    pub payload: &'a [u8],
    /// Transmission mode
    pub mode: TransmitMode,
    /// Whether a failure aborts bring-up
    pub policy: FailurePolicy,
    /// Blocking wait after the command is sent, in milliseconds
    pub delay_after_ms: u32,
}

impl<'a> CommandEntry<'a> {
    /// Soft-failing entry sent in the link's default mode, no delay
    pub const fn new(command: u8, payload: &'a [u8]) -> Self {
        Self {
            command,
            payload,
            mode: TransmitMode::Default,
            policy: FailurePolicy::Soft,
            delay_after_ms: 0,
        }
    }

    /// Mark the entry as aborting bring-up on failure
    pub const fn hard(mut self) -> Self {
        self.policy = FailurePolicy::Hard;
        self
    }

    /// Force the entry onto the link in high-speed mode
    pub const fn high_speed(mut self) -> Self {
        self.mode = TransmitMode::HighSpeed;
        self
    }

    /// Wait `ms` milliseconds after the entry is sent
    pub const fn delay_ms(mut self, ms: u32) -> Self {
        self.delay_after_ms = ms;
        self
    }

    /// True if a failure sending this entry aborts bring-up
    pub const fn is_hard(&self) -> bool {
        matches!(self.policy, FailurePolicy::Hard)
    }
}

/// Settle time after the initial sleep-out request
pub const SLEEP_OUT_SETTLE_MS: u32 = 100;

const PIXEL_FORMAT_RGB888: u8 = PixelFormat::Rgb888.dcs_value();

/// Register configuration for the ILI9488 on the FRD350H 320x480 module
///
/// Address mode and pixel format are hard-failing: rendering is structurally
/// wrong without them. The pixel format matches [`PixelFormat::Rgb888`] so that
/// the raw register agrees with the protocol-level call made later.
pub const ILI9488_INIT_SEQUENCE: &[CommandEntry<'static>] = &[
    CommandEntry::new(EXIT_SLEEP_MODE, &[]).delay_ms(SLEEP_OUT_SETTLE_MS),
    CommandEntry::new(
        POSITIVE_GAMMA,
        &[
            0x00, 0x13, 0x18, 0x04, 0x0F, 0x06, 0x3A, 0x56, 0x4D, 0x03, 0x0A, 0x06, 0x30, 0x3E,
            0x0F,
        ],
    ),
    CommandEntry::new(
        NEGATIVE_GAMMA,
        &[
            0x00, 0x13, 0x18, 0x01, 0x11, 0x06, 0x38, 0x34, 0x4D, 0x06, 0x0D, 0x0B, 0x31, 0x37,
            0x0F,
        ],
    ),
    CommandEntry::new(POWER_CONTROL_1, &[0x18, 0x17]),
    CommandEntry::new(POWER_CONTROL_2, &[0x41]),
    CommandEntry::new(VCOM_CONTROL, &[0x00, 0x1A, 0x80]),
    CommandEntry::new(SET_ADDRESS_MODE, &[0x48]).hard(),
    CommandEntry::new(SET_PIXEL_FORMAT, &[PIXEL_FORMAT_RGB888]).hard(),
    CommandEntry::new(INTERFACE_MODE_CTRL, &[0x00]),
    CommandEntry::new(FRAME_RATE_CTRL, &[0xA0]),
    CommandEntry::new(DISPLAY_INVERSION_CTRL, &[0x02]),
    CommandEntry::new(DISPLAY_FUNCTION_CTRL, &[0x20, 0x02]),
    CommandEntry::new(SET_IMAGE_FUNCTION, &[0x00]),
    CommandEntry::new(ADJUST_CONTROL_3, &[0xA9, 0x51, 0x2C, 0x82]),
];
