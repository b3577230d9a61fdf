//! Board-independent tuning constants.

/// Runtime configuration shared by the input, brightness, positioning and
/// rendering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Minimum time between two accepted presses on the same button.
    pub debounce_ms: u32,

    /// Main loop sleep between iterations.
    pub loop_period_ms: u32,

    /// Largest value the ADC can report.
    pub adc_max: u16,

    /// Reading of a joystick axis at rest.
    pub adc_center: u16,

    /// Multiplier applied to the deflection from center.
    pub brightness_gain: u16,

    /// Upper bound for a PWM duty value (also the PWM top).
    pub max_duty: u16,

    /// Display width in pixels.
    pub display_width: u16,

    /// Display height in pixels.
    pub display_height: u16,

    /// Side length of the square.
    pub square_size: u16,

    /// Length of a dash (and of the gap after it) in the dashed border.
    pub dash_length: u16,

    /// Log the joystick reading every this many loop iterations. Zero disables it.
    pub report_every: u32,
}

impl Config {
    /// Values for the 128x64 OLED, 12-bit ADC board.
    pub const DEFAULT: Self = Self {
        debounce_ms: 200,
        loop_period_ms: 50,
        adc_max: 4095,
        adc_center: 2048,
        brightness_gain: 2,
        max_duty: 4096,
        display_width: 128,
        display_height: 64,
        square_size: 8,
        dash_length: 4,
        report_every: 20,
    };

    /// Highest x coordinate the square's top-left corner may take.
    #[inline]
    pub fn max_square_x(&self) -> u16 {
        self.display_width.saturating_sub(self.square_size)
    }

    /// Highest y coordinate the square's top-left corner may take.
    #[inline]
    pub fn max_square_y(&self) -> u16 {
        self.display_height.saturating_sub(self.square_size)
    }

    /// Checks that the values are consistent with each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc_max == 0 {
            return Err(ConfigError::ZeroAdcRange);
        }
        if self.adc_center > self.adc_max {
            return Err(ConfigError::CenterOutOfRange {
                center: self.adc_center,
                adc_max: self.adc_max,
            });
        }
        if self.square_size == 0
            || self.square_size > self.display_width
            || self.square_size > self.display_height
        {
            return Err(ConfigError::SquareDoesNotFit {
                size: self.square_size,
                width: self.display_width,
                height: self.display_height,
            });
        }
        if self.dash_length == 0 {
            return Err(ConfigError::ZeroDashLength);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// ADC maximum is zero.
    ZeroAdcRange,

    /// Joystick center lies above the ADC maximum.
    CenterOutOfRange {
        /// Configured center.
        center: u16,
        /// Configured ADC maximum.
        adc_max: u16,
    },

    /// Square is empty or larger than the display.
    SquareDoesNotFit {
        /// Configured square size.
        size: u16,
        /// Display width.
        width: u16,
        /// Display height.
        height: u16,
    },

    /// Dashed border with zero-length dashes.
    ZeroDashLength,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroAdcRange => write!(f, "ADC maximum must be non-zero"),
            ConfigError::CenterOutOfRange { center, adc_max } => {
                write!(f, "joystick center {} exceeds ADC maximum {}", center, adc_max)
            }
            ConfigError::SquareDoesNotFit {
                size,
                width,
                height,
            } => {
                write!(
                    f,
                    "square of size {} does not fit a {}x{} display",
                    size, width, height
                )
            }
            ConfigError::ZeroDashLength => write!(f, "dash length must be non-zero"),
        }
    }
}
