//! One iteration of the main loop, independent of the hardware.

use crate::brightness::{LedDuties, map_brightness};
use crate::config::Config;
use crate::position::square_position;
use crate::state::SharedState;

/// A pair of joystick axis readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    /// X axis (ADC channel 1).
    pub x: u16,

    /// Y axis (ADC channel 0).
    pub y: u16,
}

impl JoystickSample {
    /// Creates a sample from raw readings.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// What the caller has to do after a loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// Duties to write to the red and blue channels.
    pub duties: LedDuties,

    /// The display must be redrawn.
    pub redraw: bool,

    /// The joystick reading is due for the periodic log line.
    pub report: bool,
}

/// Main loop logic: brightness, square tracking and redraw decisions.
pub struct Controller<'a> {
    config: Config,
    state: &'a SharedState,
    iteration: u32,
}

impl<'a> Controller<'a> {
    /// Creates a controller working on `state`.
    pub fn new(config: Config, state: &'a SharedState) -> Self {
        Self {
            config,
            state,
            iteration: 0,
        }
    }

    /// Processes one joystick sample.
    ///
    /// While the square is visible its position follows the joystick and the
    /// display is redrawn every iteration. Otherwise the display is only
    /// redrawn when the button interrupt asked for it.
    pub fn step(&mut self, sample: JoystickSample) -> StepOutcome {
        let duties = map_brightness(sample.x, sample.y, self.state.pwm_enabled(), &self.config);

        // Clear the request first so a press during this iteration is covered
        // by the scene captured afterwards.
        let requested = self.state.take_refresh_request();

        let redraw = if self.state.shape_visible() {
            let (x, y) = square_position(sample.x, sample.y, &self.config);
            self.state.set_square_position(x, y);
            true
        } else {
            requested
        };

        let report = self.config.report_every != 0 && self.iteration % self.config.report_every == 0;
        self.iteration = self.iteration.wrapping_add(1);

        StepOutcome {
            duties,
            redraw,
            report,
        }
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared state this controller reads and writes.
    #[inline]
    pub fn state(&self) -> &'a SharedState {
        self.state
    }
}
