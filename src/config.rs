//! Panel configuration types and builder

pub use crate::error::{BuilderError, MAX_LANES};
use crate::command::CTRL_DISPLAY_BCTRL_BL;
use crate::link::ModeFlags;
use crate::sequence::FailurePolicy;

/// Default backlight brightness (of 255)
pub const DEFAULT_BRIGHTNESS: u8 = 240;

/// Default DSI mode flags: burst video, EoT packets, commands in low-power mode
pub const DEFAULT_MODE_FLAGS: ModeFlags = ModeFlags::VIDEO
    .union(ModeFlags::VIDEO_BURST)
    .union(ModeFlags::EOT_PACKET)
    .union(ModeFlags::LPM);

/// Panel configuration
///
/// This struct holds the board-tunable parameters of bring-up.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of DSI data lanes
    pub lanes: u8,
    /// Device mode flags set before attach
    pub mode_flags: ModeFlags,
    /// Brightness written once the display is on
    pub brightness: u8,
    /// Write control display value
    pub control_display: u8,
    /// Reset line polarity (true = asserted when high)
    pub reset_active_high: bool,
    /// Whether a failed color inversion aborts bring-up
    pub invert_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lanes: 1,
            mode_flags: DEFAULT_MODE_FLAGS,
            brightness: DEFAULT_BRIGHTNESS,
            control_display: CTRL_DISPLAY_BCTRL_BL,
            reset_active_high: false,
            invert_policy: FailurePolicy::Soft,
        }
    }
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```rust
/// use ili9488_dsi::Builder;
/// use ili9488_dsi::sequence::FailurePolicy;
///
/// let config = match Builder::new().brightness(128).invert_policy(FailurePolicy::Hard).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.brightness, 128);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of DSI data lanes
    pub fn lanes(mut self, lanes: u8) -> Self {
        self.config.lanes = lanes;
        self
    }

    /// Set the device mode flags
    pub fn mode_flags(mut self, flags: ModeFlags) -> Self {
        self.config.mode_flags = flags;
        self
    }

    /// Set the backlight brightness written at the end of bring-up
    pub fn brightness(mut self, value: u8) -> Self {
        self.config.brightness = value;
        self
    }

    /// Set the write control display value
    pub fn control_display(mut self, value: u8) -> Self {
        self.config.control_display = value;
        self
    }

    /// Set reset line polarity
    ///
    /// Default is active-low. Set to true for boards that invert the line.
    pub fn reset_active_high(mut self, value: bool) -> Self {
        self.config.reset_active_high = value;
        self
    }

    /// Set whether a failed color inversion aborts bring-up
    pub fn invert_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.invert_policy = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidLanes` if the lane count is 0 or above `MAX_LANES`
    pub fn build(self) -> Result<Config, BuilderError> {
        let lanes = self.config.lanes;
        if lanes == 0 || lanes > MAX_LANES {
            return Err(BuilderError::InvalidLanes { lanes });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.lanes, 1);
        assert_eq!(config.brightness, 240);
        assert_eq!(config.control_display, 0x24);
        assert!(!config.reset_active_high);
        assert_eq!(config.invert_policy, FailurePolicy::Soft);
        assert!(config.mode_flags.contains(ModeFlags::LPM));
        assert!(config.mode_flags.contains(ModeFlags::VIDEO_BURST));
    }

    #[test]
    fn test_too_many_lanes_rejected() {
        let result = Builder::new().lanes(5).build();
        assert!(matches!(result, Err(BuilderError::InvalidLanes { lanes: 5 })));
    }

    #[test]
    fn test_four_lanes_accepted() {
        let config = Builder::new().lanes(4).build().unwrap();
        assert_eq!(config.lanes, 4);
    }
}
