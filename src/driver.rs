//! Host registration surface
//!
//! The host's driver model binds hardware nodes to drivers by compatible
//! string and then calls a fixed set of panel operations. This module exposes
//! both: [`DRIVER`] for matching and [`PanelOps`] for dispatch.
//!
//! ## Example
//!
//! ```
//! use ili9488_dsi::driver::{DRIVER, variant_for};
//!
//! assert!(DRIVER.matches("FRD350HXXX,ili9488"));
//! let variant = match variant_for("FRD350HXXX,ili9488") {
//!     Some(variant) => variant,
//!     None => return,
//! };
//! assert_eq!(variant.timing.hactive, 320);
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::board::PowerSupply;
use crate::command::SET_ADDRESS_MODE;
use crate::error::Error;
use crate::link::{DsiLink, PixelFormat};
use crate::panel::Panel;
use crate::sequence::{CommandEntry, ILI9488_INIT_SEQUENCE};
use crate::timing::{ILI9488_TIMING, TimingDescriptor};

/// Compatible string of the FRD350H ILI9488 module
pub const COMPATIBLE: &str = "FRD350HXXX,ili9488";

/// Everything that distinguishes one panel of the family from another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVariant {
    /// Compatible string the host matches against
    pub compatible: &'static str,
    /// Register burst sent right after attach
    pub init_sequence: &'static [CommandEntry<'static>],
    /// Commands sent once the panel has left sleep mode
    pub post_sleep_sequence: &'static [CommandEntry<'static>],
    /// Video timing
    pub timing: TimingDescriptor,
    /// Native pixel format, used for the link and the DCS pixel format
    pub format: PixelFormat,
}

/// FRD350H 320x480 module with an ILI9488 controller
pub const ILI9488_FRD350H: PanelVariant = PanelVariant {
    compatible: COMPATIBLE,
    init_sequence: ILI9488_INIT_SEQUENCE,
    // Portrait, RGB order
    post_sleep_sequence: &[CommandEntry::new(SET_ADDRESS_MODE, &[0x00]).hard()],
    timing: ILI9488_TIMING,
    format: PixelFormat::Rgb888,
};

/// Every variant this driver can bind to
pub const VARIANTS: &[PanelVariant] = &[ILI9488_FRD350H];

/// Driver identity as seen by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverEntry {
    /// Driver name
    pub name: &'static str,
    /// Compatible strings handled by this driver
    pub of_match: &'static [&'static str],
}

impl DriverEntry {
    /// True if this driver handles `compatible`
    pub fn matches(&self, compatible: &str) -> bool {
        self.of_match.iter().any(|name| *name == compatible)
    }
}

/// Driver entry for host registration
pub const DRIVER: DriverEntry = DriverEntry {
    name: "ili9488_panel",
    of_match: &[COMPATIBLE],
};

/// Look up the variant bound to `compatible`
pub fn variant_for(compatible: &str) -> Option<&'static PanelVariant> {
    VARIANTS
        .iter()
        .find(|variant| variant.compatible == compatible)
}

/// Panel operations the host dispatches to
pub trait PanelOps<L: DsiLink, D: DelayNs> {
    /// Hard failure of [`enable_display`](PanelOps::enable_display)
    type Error;

    /// Bring the panel from unpowered to displaying with backlight on
    fn enable_display(&mut self, link: &mut L, delay: &mut D) -> Result<(), Self::Error>;

    /// Video timing of the panel
    fn get_timing(&self) -> TimingDescriptor;
}

impl<RST, PS, L, D> PanelOps<L, D> for Panel<RST, PS>
where
    RST: OutputPin,
    PS: PowerSupply,
    L: DsiLink,
    D: DelayNs,
{
    type Error = Error<L::Error, PS::Error>;

    fn enable_display(&mut self, link: &mut L, delay: &mut D) -> Result<(), Self::Error> {
        Panel::enable_display(self, link, delay)
    }

    fn get_timing(&self) -> TimingDescriptor {
        Panel::get_timing(self)
    }
}
