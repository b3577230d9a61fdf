//! Joystick deflection to LED brightness.

use crate::config::Config;

/// Trait for abstracting the PWM-driven LED channels.
///
/// Implement this for your PWM hardware. Duty values are in the range
/// `0..=Config::max_duty`; handle any hardware errors internally.
pub trait DutyLed {
    /// Applies the red and blue duty values.
    fn set_duties(&mut self, duties: LedDuties);
}

/// Duty values for the two PWM-driven LED channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedDuties {
    /// Red channel, driven by the X axis.
    pub red: u16,

    /// Blue channel, driven by the Y axis.
    pub blue: u16,
}

impl LedDuties {
    /// Both channels off.
    pub const OFF: Self = Self { red: 0, blue: 0 };
}

/// Maps a joystick reading to LED duties.
///
/// When `enabled` is false both channels are zero. Otherwise each channel is
/// the axis deflection from center times the gain, clamped to `max_duty`.
pub fn map_brightness(x: u16, y: u16, enabled: bool, config: &Config) -> LedDuties {
    if !enabled {
        return LedDuties::OFF;
    }

    LedDuties {
        red: axis_duty(x, config),
        blue: axis_duty(y, config),
    }
}

fn axis_duty(reading: u16, config: &Config) -> u16 {
    let deflection = reading.abs_diff(config.adc_center) as u32;
    let duty = deflection * config.brightness_gain as u32;
    duty.min(config.max_duty as u32) as u16
}
