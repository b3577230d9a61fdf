//! State shared between the button interrupt and the main loop.
//!
//! Every field has a single writer:
//!
//! | Field | Written by |
//! |-------|------------|
//! | `pwm_enabled`, `shape_visible`, `green_on`, `dashed_border` | button interrupt |
//! | `refresh_requested` | set by the button interrupt, cleared by the main loop |
//! | `square_x`, `square_y` | main loop |
//!
//! Only atomic `load` and `store` are used so the structure works on cores
//! without compare-and-swap (Cortex-M0+). A toggle is a load followed by a
//! store, which is race-free as long as the single-writer rule holds.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::render::BorderStyle;

/// Flags and coordinates read and written from both execution contexts.
#[derive(Debug)]
pub struct SharedState {
    pwm_enabled: AtomicBool,
    shape_visible: AtomicBool,
    green_on: AtomicBool,
    dashed_border: AtomicBool,
    refresh_requested: AtomicBool,
    square_x: AtomicU16,
    square_y: AtomicU16,
}

impl SharedState {
    /// Creates the power-on state: PWM and square enabled, green LED off,
    /// solid border, square in the top-left corner, one refresh pending.
    pub const fn new() -> Self {
        Self {
            pwm_enabled: AtomicBool::new(true),
            shape_visible: AtomicBool::new(true),
            green_on: AtomicBool::new(false),
            dashed_border: AtomicBool::new(false),
            refresh_requested: AtomicBool::new(true),
            square_x: AtomicU16::new(0),
            square_y: AtomicU16::new(0),
        }
    }

    /// Whether joystick deflection drives the red and blue LEDs.
    #[inline]
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    /// Whether the square is drawn.
    #[inline]
    pub fn shape_visible(&self) -> bool {
        self.shape_visible.load(Ordering::Acquire)
    }

    /// Whether the green LED is lit.
    #[inline]
    pub fn green_on(&self) -> bool {
        self.green_on.load(Ordering::Acquire)
    }

    /// Current border style.
    #[inline]
    pub fn border(&self) -> BorderStyle {
        if self.dashed_border.load(Ordering::Acquire) {
            BorderStyle::Dashed
        } else {
            BorderStyle::Solid
        }
    }

    /// Flips PWM enable and returns the new value. Interrupt context only.
    pub fn toggle_pwm_enabled(&self) -> bool {
        toggle(&self.pwm_enabled)
    }

    /// Flips square visibility and returns the new value. Interrupt context only.
    pub fn toggle_shape_visible(&self) -> bool {
        toggle(&self.shape_visible)
    }

    /// Flips the green LED and returns the new value. Interrupt context only.
    pub fn toggle_green(&self) -> bool {
        toggle(&self.green_on)
    }

    /// Switches between solid and dashed border and returns the new style.
    /// Interrupt context only.
    pub fn toggle_border(&self) -> BorderStyle {
        if toggle(&self.dashed_border) {
            BorderStyle::Dashed
        } else {
            BorderStyle::Solid
        }
    }

    /// Asks the main loop to redraw the display.
    pub fn request_refresh(&self) {
        self.refresh_requested.store(true, Ordering::Release);
    }

    /// Returns whether a refresh was requested and clears the request.
    ///
    /// The flag is cleared before the caller snapshots the scene, so a
    /// request landing in between is covered by the redraw that follows.
    pub fn take_refresh_request(&self) -> bool {
        if self.refresh_requested.load(Ordering::Acquire) {
            self.refresh_requested.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Top-left corner of the square.
    #[inline]
    pub fn square_position(&self) -> (u16, u16) {
        (
            self.square_x.load(Ordering::Acquire),
            self.square_y.load(Ordering::Acquire),
        )
    }

    /// Moves the square. Main loop only.
    pub fn set_square_position(&self, x: u16, y: u16) {
        self.square_x.store(x, Ordering::Release);
        self.square_y.store(y, Ordering::Release);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(flag: &AtomicBool) -> bool {
    let value = !flag.load(Ordering::Acquire);
    flag.store(value, Ordering::Release);
    value
}
