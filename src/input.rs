//! Debounced button handling.
//!
//! Provides [`InputHandler`], called from the GPIO interrupt on every falling
//! edge. Accepted presses toggle the flags in [`SharedState`] and request a
//! redraw; presses inside the debounce window are dropped silently.

use crate::debounce::Debouncer;
use crate::render::BorderStyle;
use crate::state::SharedState;
use crate::time::TimeInstant;

/// The two push buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Stand-alone button. Toggles PWM brightness and the square.
    A,

    /// Button under the joystick. Toggles the green LED and the border style.
    Joystick,
}

/// Result of an accepted button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button A was pressed.
    DisplayToggled {
        /// New PWM enable state.
        pwm_enabled: bool,
        /// New square visibility.
        shape_visible: bool,
    },

    /// The joystick button was pressed.
    GreenToggled {
        /// New green LED state; the caller drives the pin accordingly.
        green_on: bool,
        /// New border style.
        border: BorderStyle,
    },
}

/// Per-button debouncers plus the toggle logic.
pub struct InputHandler<I: TimeInstant> {
    button_a: Debouncer<I>,
    joystick: Debouncer<I>,
}

impl<I: TimeInstant> InputHandler<I> {
    /// Creates a handler with the same debounce window for both buttons.
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            button_a: Debouncer::from_millis(debounce_ms as u64),
            joystick: Debouncer::from_millis(debounce_ms as u64),
        }
    }

    /// Handles a falling edge on `button` at `now`.
    ///
    /// Returns `None` when the edge falls inside the debounce window, in
    /// which case `state` is left untouched.
    pub fn on_press(&mut self, button: Button, now: I, state: &SharedState) -> Option<ButtonEvent> {
        if !self.debouncer_mut(button).accept(now) {
            return None;
        }

        let event = match button {
            Button::A => ButtonEvent::DisplayToggled {
                pwm_enabled: state.toggle_pwm_enabled(),
                shape_visible: state.toggle_shape_visible(),
            },
            Button::Joystick => ButtonEvent::GreenToggled {
                green_on: state.toggle_green(),
                border: state.toggle_border(),
            },
        };

        state.request_refresh();
        Some(event)
    }

    /// Debouncer for `button`.
    pub fn debouncer(&self, button: Button) -> &Debouncer<I> {
        match button {
            Button::A => &self.button_a,
            Button::Joystick => &self.joystick,
        }
    }

    fn debouncer_mut(&mut self, button: Button) -> &mut Debouncer<I> {
        match button {
            Button::A => &mut self.button_a,
            Button::Joystick => &mut self.joystick,
        }
    }
}
