//! Video timing descriptor
//!
//! The display pipeline configures its own video generator from these values.
//! Only typical values are modeled.

/// Fixed video timing of a panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingDescriptor {
    /// Pixel clock in Hz
    pub pixel_clock_hz: u32,
    /// Active width in pixels
    pub hactive: u16,
    /// Horizontal front porch in pixel clocks
    pub hfront_porch: u16,
    /// Horizontal back porch in pixel clocks
    pub hback_porch: u16,
    /// Horizontal sync width in pixel clocks
    pub hsync_len: u16,
    /// Active height in lines
    pub vactive: u16,
    /// Vertical front porch in lines
    pub vfront_porch: u16,
    /// Vertical back porch in lines
    pub vback_porch: u16,
    /// Vertical sync width in lines
    pub vsync_len: u16,
}

impl TimingDescriptor {
    /// Total pixel clocks per line, blanking included
    pub const fn htotal(&self) -> u32 {
        self.hactive as u32 + self.hfront_porch as u32 + self.hback_porch as u32
            + self.hsync_len as u32
    }

    /// Total lines per frame, blanking included
    pub const fn vtotal(&self) -> u32 {
        self.vactive as u32 + self.vfront_porch as u32 + self.vback_porch as u32
            + self.vsync_len as u32
    }

    /// Frame rate in millihertz, rounded down
    pub const fn refresh_rate_mhz(&self) -> u32 {
        let frame = self.htotal() as u64 * self.vtotal() as u64;
        if frame == 0 {
            return 0;
        }
        (self.pixel_clock_hz as u64 * 1000 / frame) as u32
    }
}

/// Timing of the FRD350H 320x480 ILI9488 module
pub const ILI9488_TIMING: TimingDescriptor = TimingDescriptor {
    pixel_clock_hz: 17_000_000,
    hactive: 320,
    hfront_porch: 3,
    hback_porch: 3,
    hsync_len: 3,
    vactive: 480,
    vfront_porch: 3,
    vback_porch: 3,
    vsync_len: 1,
};
