//! ILI9488 command definitions
//!
//! This module defines the command bytes used to bring up an ILI9488 panel.
//! They fall into two groups: the standard MIPI Display Command Set (DCS)
//! shared by every DSI panel controller, and the manufacturer command set
//! (MCS) specific to the ILI9488 family.
//!
//! ## Command Structure
//!
//! Every command is a single DCS packet:
//! 1. Command byte
//! 2. Parameter bytes (zero or more)
//!
//! The link decides between a short and a long packet from the payload length.
//!
//! ## Example
//!
//! ```rust
//! use ili9488_dsi::command;
//!
//! // Sleep out is a short write with no parameters
//! let packet = [command::EXIT_SLEEP_MODE];
//! assert_eq!(packet, [0x11]);
//! ```

// Standard DCS commands

/// No operation (0x00)
///
/// Used as a cheap link probe: the panel acknowledges it without changing state.
pub const NOP: u8 = 0x00;

/// Enter sleep mode (0x10)
///
/// Requires 120ms before the supply may be removed.
pub const ENTER_SLEEP_MODE: u8 = 0x10;

/// Exit sleep mode (0x11)
///
/// The controller needs at least 5ms before the next command and
/// 120ms before a subsequent sleep-in.
pub const EXIT_SLEEP_MODE: u8 = 0x11;

/// Enter display inversion mode (0x21)
pub const ENTER_INVERT_MODE: u8 = 0x21;

/// Set display off (0x28)
pub const SET_DISPLAY_OFF: u8 = 0x28;

/// Set display on (0x29)
pub const SET_DISPLAY_ON: u8 = 0x29;

/// Set column address (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const SET_COLUMN_ADDRESS: u8 = 0x2A;

/// Set page (row) address (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const SET_PAGE_ADDRESS: u8 = 0x2B;

/// Write memory start (0x2C)
///
/// Tells the controller that pixel data follows. Sent without parameters
/// at the end of bring-up.
pub const WRITE_MEMORY_START: u8 = 0x2C;

/// Set address mode (0x36)
///
/// Memory access control: row/column order, exchange and RGB/BGR order.
/// Requires 1 byte.
pub const SET_ADDRESS_MODE: u8 = 0x36;

/// Set pixel format (0x3A)
///
/// Requires 1 byte: DPI format in bits 6:4, DBI format in bits 2:0.
pub const SET_PIXEL_FORMAT: u8 = 0x3A;

/// Set display brightness (0x51)
///
/// The ILI9488 takes a single 8-bit parameter.
pub const SET_DISPLAY_BRIGHTNESS: u8 = 0x51;

/// Write control display (0x53)
///
/// Bit flags:
/// - 0x20: Brightness control block on
/// - 0x08: Display dimming
/// - 0x04: Backlight on
pub const WRITE_CONTROL_DISPLAY: u8 = 0x53;

/// Write power save (0x55)
///
/// Content adaptive brightness control (CABC). 0x00 disables it.
pub const WRITE_POWER_SAVE: u8 = 0x55;

// ILI9488 manufacturer command set

/// Interface mode control (0xB0)
pub const INTERFACE_MODE_CTRL: u8 = 0xB0;

/// Frame rate control, normal mode (0xB1)
pub const FRAME_RATE_CTRL: u8 = 0xB1;

/// Display inversion control (0xB4)
pub const DISPLAY_INVERSION_CTRL: u8 = 0xB4;

/// Display function control (0xB6)
pub const DISPLAY_FUNCTION_CTRL: u8 = 0xB6;

/// Power control 1 (0xC0)
///
/// Requires 2 bytes: VREG1OUT, VREG2OUT.
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 (0xC1)
///
/// Requires 1 byte: step-up factor.
pub const POWER_CONTROL_2: u8 = 0xC1;

/// VCOM control (0xC5)
///
/// Requires 3 bytes.
pub const VCOM_CONTROL: u8 = 0xC5;

/// Positive gamma correction (0xE0)
///
/// Requires 15 bytes.
pub const POSITIVE_GAMMA: u8 = 0xE0;

/// Negative gamma correction (0xE1)
///
/// Requires 15 bytes.
pub const NEGATIVE_GAMMA: u8 = 0xE1;

/// Set image function (0xE9)
pub const SET_IMAGE_FUNCTION: u8 = 0xE9;

/// Adjust control 3 (0xF7)
///
/// Requires 4 bytes.
pub const ADJUST_CONTROL_3: u8 = 0xF7;

// Parameter values

/// Write control display value: brightness control block and backlight on
pub const CTRL_DISPLAY_BCTRL_BL: u8 = 0x24;

/// Write power save value: CABC off
pub const POWER_SAVE_OFF: u8 = 0x00;
