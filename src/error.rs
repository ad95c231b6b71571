//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! board resource discovery ([`DiscoveryError`]) and panel bring-up ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid configuration values
//! - [`DiscoveryError`] - Missing or unresolvable board resources at setup time
//! - [`Error`] - Hard failure during bring-up, tagged with the failing [`Step`]
//!
//! Soft failures never surface as errors. They are logged where they happen and
//! bring-up carries on.
//!
//! ## Example
//!
//! ```
//! use ili9488_dsi::{Builder, BuilderError};
//!
//! let result = Builder::new().lanes(0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidLanes { lanes: 0 })));
//! ```

/// Maximum number of DSI data lanes
pub const MAX_LANES: u8 = 4;

/// A step of the bring-up sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Switching the power supply on
    EnablePower,
    /// Attaching to the DSI host
    Attach,
    /// Register configuration burst
    InitSequence,
    /// NOP probe after the burst
    Probe,
    /// Explicit sleep-exit request
    ExitSleep,
    /// Address mode after sleep-exit
    AddressMode,
    /// Column/page address window
    AddressWindow,
    /// Protocol-level pixel format
    PixelFormat,
    /// Disabling content adaptive brightness
    PowerSave,
    /// Turning the display on
    DisplayOn,
    /// NOP probe after display-on
    DisplayOnProbe,
    /// Memory write start
    MemoryWrite,
    /// Brightness and backlight control
    Backlight,
    /// Turning the display off
    DisplayOff,
    /// Entering sleep mode
    SleepIn,
    /// Switching the power supply off
    DisablePower,
}

impl core::fmt::Display for Step {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::EnablePower => "enable power",
            Self::Attach => "attach",
            Self::InitSequence => "init sequence",
            Self::Probe => "probe",
            Self::ExitSleep => "exit sleep",
            Self::AddressMode => "address mode",
            Self::AddressWindow => "address window",
            Self::PixelFormat => "pixel format",
            Self::PowerSave => "power save",
            Self::DisplayOn => "display on",
            Self::DisplayOnProbe => "display-on probe",
            Self::MemoryWrite => "memory write",
            Self::Backlight => "backlight",
            Self::DisplayOff => "display off",
            Self::SleepIn => "sleep in",
            Self::DisablePower => "disable power",
        };
        f.write_str(name)
    }
}

/// Classification of a failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A mandatory board resource is missing or could not be resolved
    Configuration,
    /// The power supply could not be switched
    Power,
    /// The DSI host rejected the attach
    Attach,
    /// A raw command write failed
    Transport,
    /// A protocol-level call failed
    Protocol,
}

/// Hard failure during bring-up
///
/// Generic over the link and power supply error types so that callers can
/// match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<LinkErr, SupplyErr> {
    /// Power supply switch failed
    Power {
        /// Step that failed
        step: Step,
        /// Underlying supply error
        source: SupplyErr,
    },
    /// DSI attach failed
    Attach(LinkErr),
    /// A hard-failing command write failed
    Transport {
        /// Step that failed
        step: Step,
        /// Command byte that could not be written
        command: u8,
        /// Underlying link error
        source: LinkErr,
    },
    /// A protocol-level call failed
    Protocol {
        /// Step that failed
        step: Step,
        /// Underlying link error
        source: LinkErr,
    },
}

impl<LinkErr, SupplyErr> Error<LinkErr, SupplyErr> {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Power { .. } => ErrorKind::Power,
            Self::Attach(_) => ErrorKind::Attach,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Protocol { .. } => ErrorKind::Protocol,
        }
    }

    /// Bring-up step that failed
    pub fn step(&self) -> Step {
        match self {
            Self::Attach(_) => Step::Attach,
            Self::Power { step, .. } | Self::Transport { step, .. } | Self::Protocol { step, .. } => {
                *step
            }
        }
    }
}

impl<LinkErr: core::fmt::Debug, SupplyErr: core::fmt::Debug> core::fmt::Display
    for Error<LinkErr, SupplyErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Power { step, source } => write!(f, "Power supply error during {step}: {source:?}"),
            Self::Attach(e) => write!(f, "DSI attach failed: {e:?}"),
            Self::Transport {
                step,
                command,
                source,
            } => write!(
                f,
                "Write of command {command:#04x} failed during {step}: {source:?}"
            ),
            Self::Protocol { step, source } => write!(f, "DCS call failed during {step}: {source:?}"),
        }
    }
}

impl<LinkErr: core::fmt::Debug, SupplyErr: core::fmt::Debug> core::error::Error
    for Error<LinkErr, SupplyErr>
{
}

/// Errors that can occur when resolving board resources
#[derive(Debug)]
pub enum DiscoveryError<BoardErr> {
    /// The board describes no reset line
    MissingReset,
    /// The reset line exists but could not be requested
    Reset(BoardErr),
    /// The power supply exists but could not be requested
    Supply(BoardErr),
}

impl<BoardErr> DiscoveryError<BoardErr> {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

impl<BoardErr: core::fmt::Debug> core::fmt::Display for DiscoveryError<BoardErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingReset => write!(f, "No reset line described for the panel"),
            Self::Reset(e) => write!(f, "Cannot get reset line: {e:?}"),
            Self::Supply(e) => write!(f, "Cannot get power supply: {e:?}"),
        }
    }
}

impl<BoardErr: core::fmt::Debug> core::error::Error for DiscoveryError<BoardErr> {}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// Lane count outside 1..=MAX_LANES
    InvalidLanes {
        /// Lane count requested
        lanes: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLanes { lanes } => {
                write!(f, "Invalid lane count {lanes} (must be 1..={MAX_LANES})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
