//! Graphics support via embedded-graphics
//!
//! Exposes the panel's active area through
//! [`OriginDimensions`](embedded_graphics_core::geometry::OriginDimensions), so
//! that framebuffers and draw targets upstream can be sized from the timing the
//! panel reports rather than from a second copy of the resolution.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics_core::geometry::{OriginDimensions, Size};
//! use ili9488_dsi::ILI9488_TIMING;
//!
//! assert_eq!(ILI9488_TIMING.size(), Size::new(320, 480));
//! ```

use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_hal::digital::OutputPin;

use crate::board::PowerSupply;
use crate::panel::Panel;
use crate::timing::TimingDescriptor;

impl OriginDimensions for TimingDescriptor {
    fn size(&self) -> Size {
        Size::new(u32::from(self.hactive), u32::from(self.vactive))
    }
}

impl<RST, PS> OriginDimensions for Panel<RST, PS>
where
    RST: OutputPin,
    PS: PowerSupply,
{
    fn size(&self) -> Size {
        self.get_timing().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoSupply;
    use crate::config::Builder;
    use crate::timing::ILI9488_TIMING;
    use core::convert::Infallible;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;

    struct MockPin;

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_bounding_box_is_active_area() {
        assert_eq!(
            ILI9488_TIMING.bounding_box(),
            Rectangle::new(Point::zero(), Size::new(320, 480))
        );
    }

    #[test]
    fn test_panel_size_follows_timing() {
        let panel: Panel<MockPin, NoSupply> =
            Panel::new(MockPin, None, Builder::new().build().unwrap());
        assert_eq!(panel.size(), Size::new(320, 480));
    }
}
