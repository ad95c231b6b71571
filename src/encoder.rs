//! Command transmission
//!
//! Puts [`CommandEntry`] values on a [`DsiLink`], either in the link's current
//! mode or forced to high-speed for a single write.

use crate::link::{DsiLink, ModeFlags};
use crate::sequence::{CommandEntry, TransmitMode};

/// Transmit one entry in the mode it asks for
///
/// # Errors
///
/// Returns the link error if the write fails. Whether that aborts bring-up is
/// up to the caller.
pub fn send<L: DsiLink>(link: &mut L, entry: &CommandEntry<'_>) -> Result<(), L::Error> {
    match entry.mode {
        TransmitMode::Default => link.dcs_write(entry.command, entry.payload),
        TransmitMode::HighSpeed => send_forced_high_speed(link, entry),
    }
}

/// Transmit one entry in high-speed mode, whatever the link's current mode
///
/// The previous mode flags are restored when this returns, whether the write
/// succeeded or not.
///
/// # Errors
///
/// Returns the link error if the write fails.
pub fn send_forced_high_speed<L: DsiLink>(
    link: &mut L,
    entry: &CommandEntry<'_>,
) -> Result<(), L::Error> {
    let previous = link.mode_flags();
    let mut link = scopeguard::guard(link, move |link: &mut L| {
        link.set_mode_flags(previous);
    });
    let link: &mut L = &mut **link;

    link.set_mode_flags(previous.without(ModeFlags::LPM));
    link.dcs_write(entry.command, entry.payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkConfig;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    struct WriteFailed;

    struct FlakyLink {
        flags: ModeFlags,
        fail: bool,
        writes: Vec<(u8, bool)>,
    }

    impl FlakyLink {
        fn new(fail: bool) -> Self {
            Self {
                flags: ModeFlags::VIDEO | ModeFlags::LPM,
                fail,
                writes: Vec::new(),
            }
        }
    }

    impl DsiLink for FlakyLink {
        type Error = WriteFailed;

        fn configure(&mut self, config: LinkConfig) {
            self.flags = config.mode_flags;
        }

        fn mode_flags(&self) -> ModeFlags {
            self.flags
        }

        fn set_mode_flags(&mut self, flags: ModeFlags) {
            self.flags = flags;
        }

        fn attach(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn dcs_write(&mut self, command: u8, _payload: &[u8]) -> Result<(), Self::Error> {
            self.writes
                .push((command, self.flags.contains(ModeFlags::LPM)));
            if self.fail { Err(WriteFailed) } else { Ok(()) }
        }
    }

    #[test]
    fn test_default_mode_keeps_low_power() {
        let mut link = FlakyLink::new(false);
        send(&mut link, &CommandEntry::new(0x53, &[0x24])).unwrap();
        assert_eq!(link.writes, [(0x53, true)]);
    }

    #[test]
    fn test_forced_high_speed_clears_lpm_for_one_write() {
        let mut link = FlakyLink::new(false);
        send(&mut link, &CommandEntry::new(0x53, &[]).high_speed()).unwrap();
        send(&mut link, &CommandEntry::new(0x00, &[])).unwrap();

        assert_eq!(link.writes, [(0x53, false), (0x00, true)]);
        assert_eq!(link.flags, ModeFlags::VIDEO | ModeFlags::LPM);
    }

    #[test]
    fn test_forced_high_speed_restores_mode_on_failure() {
        let mut link = FlakyLink::new(true);
        let result = send_forced_high_speed(&mut link, &CommandEntry::new(0x53, &[]));

        assert_eq!(result, Err(WriteFailed));
        assert_eq!(link.writes, [(0x53, false)]);
        assert_eq!(link.flags, ModeFlags::VIDEO | ModeFlags::LPM);
    }

    #[test]
    fn test_forced_high_speed_restores_exact_previous_flags() {
        let mut link = FlakyLink::new(false);
        link.flags = ModeFlags::VIDEO_BURST;
        send_forced_high_speed(&mut link, &CommandEntry::new(0x53, &[])).unwrap();
        assert_eq!(link.flags, ModeFlags::VIDEO_BURST);
    }
}
