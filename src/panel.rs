//! Panel bring-up

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::board::{BoardDescriptor, PowerSupply, RESET_NAME, SUPPLY_NAME};
use crate::command::{
    ENTER_INVERT_MODE, POWER_SAVE_OFF, SET_DISPLAY_BRIGHTNESS, WRITE_CONTROL_DISPLAY,
    WRITE_MEMORY_START, WRITE_POWER_SAVE,
};
use crate::config::Config;
use crate::driver::{ILI9488_FRD350H, PanelVariant};
use crate::encoder;
use crate::error::{DiscoveryError, Error, ErrorKind, Step};
use crate::link::{DsiLink, LinkConfig};
use crate::power::PowerSequencer;
use crate::sequence::{CommandEntry, FailurePolicy};
use crate::timing::TimingDescriptor;

type BringupResult<L, PS> =
    core::result::Result<(), Error<<L as DsiLink>::Error, <PS as PowerSupply>::Error>>;

/// Wait after the explicit sleep-exit before configuring the address window
pub const SLEEP_EXIT_SETTLE_MS: u32 = 120;

/// Wait after enabling the backlight before the first frame
pub const FIRST_FRAME_SETTLE_MS: u32 = 10;

/// Wait after sleep-in before the supply may be removed
pub const SLEEP_IN_SETTLE_MS: u32 = 120;

/// Progress of a bring-up attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BringupState {
    /// Nothing done yet
    #[default]
    Idle,
    /// Supply switched on
    PowerEnabled,
    /// Reset line asserted
    ResetAsserted,
    /// Reset line released and hold time elapsed
    ResetReleased,
    /// Attached to the DSI host
    LinkAttached,
    /// Register burst sent and link probed
    SequenceSent,
    /// Sleep mode left
    SleepExited,
    /// Column/page window set
    AddressWindowSet,
    /// Display on and memory write started
    DisplayOn,
    /// Backlight on, ready for frames
    BacklightOn,
    /// Aborted by a hard failure
    Failed {
        /// Step that failed
        step: Step,
        /// Kind of failure
        kind: ErrorKind,
    },
}

impl BringupState {
    /// True once bring-up has completed
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::BacklightOn)
    }
}

/// One ILI9488 panel
///
/// Owns the reset line and the optional supply. The DSI link belongs to the
/// host and is lent for each operation.
pub struct Panel<RST, PS> {
    /// Reset line and supply
    power: PowerSequencer<RST, PS>,
    /// Panel configuration
    config: Config,
    /// Command tables and timing
    variant: &'static PanelVariant,
    /// Last state reached by bring-up
    state: BringupState,
}

impl<RST, PS> Panel<RST, PS>
where
    RST: OutputPin,
    PS: PowerSupply,
{
    /// Create a new Panel for the FRD350H module
    pub fn new(reset: RST, supply: Option<PS>, config: Config) -> Self {
        Self::with_variant(reset, supply, config, &ILI9488_FRD350H)
    }

    /// Create a new Panel for another member of the family
    pub fn with_variant(
        reset: RST,
        supply: Option<PS>,
        config: Config,
        variant: &'static PanelVariant,
    ) -> Self {
        let mut power = PowerSequencer::new(reset, supply);
        power.set_reset_active_high(config.reset_active_high);
        Self {
            power,
            config,
            variant,
            state: BringupState::Idle,
        }
    }

    /// Resolve the reset line and supply from the board description
    ///
    /// A missing supply is fine. A missing reset line is not.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the reset line is missing or either
    /// resource cannot be requested.
    pub fn discover<B>(
        board: &mut B,
        config: Config,
        variant: &'static PanelVariant,
    ) -> Result<Self, DiscoveryError<B::Error>>
    where
        B: BoardDescriptor<Line = RST, Supply = PS>,
    {
        let supply = board.supply(SUPPLY_NAME).map_err(|e| {
            log::error!("cannot get power supply: {e:?}");
            DiscoveryError::Supply(e)
        })?;

        let reset = match board.output_line(RESET_NAME) {
            Ok(Some(line)) => line,
            Ok(None) => {
                log::error!("no reset line described");
                return Err(DiscoveryError::MissingReset);
            }
            Err(e) => {
                log::error!("cannot get reset line: {e:?}");
                return Err(DiscoveryError::Reset(e));
            }
        };

        Ok(Self::with_variant(reset, supply, config, variant))
    }

    /// Bring the panel from unpowered to displaying with backlight on
    ///
    /// Each call is a fresh attempt starting from [`BringupState::Idle`]. The
    /// first hard failure stops the sequence and is returned; soft failures are
    /// logged and skipped.
    pub fn enable_display<L, D>(&mut self, link: &mut L, delay: &mut D) -> BringupResult<L, PS>
    where
        L: DsiLink,
        D: DelayNs,
    {
        self.state = BringupState::Idle;
        let result = self.bring_up(link, delay);
        if let Err(e) = &result {
            log::error!("panel bring-up aborted: {e}");
            self.state = BringupState::Failed {
                step: e.step(),
                kind: e.kind(),
            };
        }
        result
    }

    fn bring_up<L, D>(&mut self, link: &mut L, delay: &mut D) -> BringupResult<L, PS>
    where
        L: DsiLink,
        D: DelayNs,
    {
        if self.power.has_supply() {
            if let Err(source) = self.power.enable_power() {
                return Err(Error::Power {
                    step: Step::EnablePower,
                    source,
                });
            }
            self.advance(BringupState::PowerEnabled);
        } else {
            log::debug!("no switchable supply, skipping power enable");
        }

        self.advance(BringupState::ResetAsserted);
        self.power.pulse_reset(delay);
        self.advance(BringupState::ResetReleased);

        link.configure(LinkConfig::new(
            self.config.lanes,
            self.variant.format,
            self.config.mode_flags,
        ));
        if let Err(e) = link.attach() {
            return Err(Error::Attach(e));
        }
        self.advance(BringupState::LinkAttached);

        self.init_sequence(link, delay)?;

        self.set_address_window(link)?;

        link.set_pixel_format(self.variant.format)
            .map_err(Self::protocol(Step::PixelFormat))?;

        Self::write(
            link,
            &CommandEntry::new(WRITE_POWER_SAVE, &[POWER_SAVE_OFF]),
            Step::PowerSave,
        )?;

        link.set_display_on().map_err(Self::protocol(Step::DisplayOn))?;
        link.nop().map_err(Self::protocol(Step::DisplayOnProbe))?;

        // Last command before pixel data
        Self::write(
            link,
            &CommandEntry::new(WRITE_MEMORY_START, &[]).hard(),
            Step::MemoryWrite,
        )?;
        self.advance(BringupState::DisplayOn);

        self.enable_backlight(link)?;
        delay.delay_ms(FIRST_FRAME_SETTLE_MS);
        self.advance(BringupState::BacklightOn);

        Ok(())
    }

    fn init_sequence<L, D>(&mut self, link: &mut L, delay: &mut D) -> BringupResult<L, PS>
    where
        L: DsiLink,
        D: DelayNs,
    {
        for entry in self.variant.init_sequence {
            Self::write(link, entry, Step::InitSequence)?;
            if entry.delay_after_ms > 0 {
                delay.delay_ms(entry.delay_after_ms);
            }
        }

        let invert = CommandEntry {
            policy: self.config.invert_policy,
            ..CommandEntry::new(ENTER_INVERT_MODE, &[])
        };
        Self::write(link, &invert, Step::InitSequence)?;

        link.nop().map_err(Self::protocol(Step::Probe))?;
        self.advance(BringupState::SequenceSent);

        link.exit_sleep_mode().map_err(Self::protocol(Step::ExitSleep))?;
        delay.delay_ms(SLEEP_EXIT_SETTLE_MS);
        self.advance(BringupState::SleepExited);

        for entry in self.variant.post_sleep_sequence {
            Self::write(link, entry, Step::AddressMode)?;
            if entry.delay_after_ms > 0 {
                delay.delay_ms(entry.delay_after_ms);
            }
        }

        Ok(())
    }

    fn set_address_window<L: DsiLink>(&mut self, link: &mut L) -> BringupResult<L, PS> {
        let timing = &self.variant.timing;
        link.set_column_address(0, timing.hactive.saturating_sub(1))
            .map_err(Self::protocol(Step::AddressWindow))?;
        link.set_page_address(0, timing.vactive.saturating_sub(1))
            .map_err(Self::protocol(Step::AddressWindow))?;
        self.advance(BringupState::AddressWindowSet);
        Ok(())
    }

    fn enable_backlight<L: DsiLink>(&self, link: &mut L) -> BringupResult<L, PS> {
        // 8-bit brightness only, not the 16-bit DCS form
        let brightness = [self.config.brightness];
        let control = [self.config.control_display];
        let backlight = [
            CommandEntry::new(SET_DISPLAY_BRIGHTNESS, &brightness),
            CommandEntry::new(WRITE_CONTROL_DISPLAY, &control),
            CommandEntry::new(WRITE_CONTROL_DISPLAY, &[]).high_speed(),
        ];
        for entry in &backlight {
            Self::write(link, entry, Step::Backlight)?;
        }
        Ok(())
    }

    /// Turn the display off and power the panel down
    ///
    /// Display-off and sleep-in are best effort. The reset line is left
    /// asserted so that the next [`enable_display`](Self::enable_display)
    /// starts from a clean controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Power`] if the supply cannot be switched off. The
    /// state is then [`BringupState::Failed`].
    pub fn disable_display<L, D>(&mut self, link: &mut L, delay: &mut D) -> BringupResult<L, PS>
    where
        L: DsiLink,
        D: DelayNs,
    {
        if let Err(e) = link.set_display_off() {
            log::warn!("{}: {e:?}", Step::DisplayOff);
        }
        if let Err(e) = link.enter_sleep_mode() {
            log::warn!("{}: {e:?}", Step::SleepIn);
        }
        delay.delay_ms(SLEEP_IN_SETTLE_MS);

        self.power.assert_reset();
        if let Err(source) = self.power.disable_power() {
            let err = Error::Power {
                step: Step::DisablePower,
                source,
            };
            log::error!("panel power-down failed: {err}");
            self.state = BringupState::Failed {
                step: err.step(),
                kind: err.kind(),
            };
            return Err(err);
        }
        self.advance(BringupState::Idle);
        Ok(())
    }

    /// Video timing of the panel
    ///
    /// Independent of bring-up; valid at any time.
    pub fn get_timing(&self) -> TimingDescriptor {
        self.variant.timing
    }

    /// Last state reached by bring-up
    pub fn state(&self) -> BringupState {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Command tables and timing in use
    pub fn variant(&self) -> &'static PanelVariant {
        self.variant
    }

    /// Give back the reset line and supply
    pub fn release(self) -> (RST, Option<PS>) {
        self.power.release()
    }

    /// Send one entry, turning a failure into an error only if the entry is hard
    fn write<L: DsiLink>(
        link: &mut L,
        entry: &CommandEntry<'_>,
        step: Step,
    ) -> BringupResult<L, PS> {
        match encoder::send(link, entry) {
            Ok(()) => Ok(()),
            Err(source) if entry.policy == FailurePolicy::Hard => Err(Error::Transport {
                step,
                command: entry.command,
                source,
            }),
            Err(source) => {
                log::warn!(
                    "{step}: write of command {:#04x} failed: {source:?}",
                    entry.command
                );
                Ok(())
            }
        }
    }

    fn protocol<E>(step: Step) -> impl FnOnce(E) -> Error<E, PS::Error> {
        move |source| Error::Protocol { step, source }
    }

    fn advance(&mut self, state: BringupState) {
        log::debug!("panel state {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}
