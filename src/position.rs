//! Joystick reading to square position.

use crate::config::Config;

/// Maps a joystick reading to the square's top-left corner.
///
/// The ADC range is scaled linearly onto the drawable area. X maps directly;
/// Y is inverted so pushing the stick up moves the square towards the top of
/// the display. Readings above `adc_max` are treated as `adc_max`.
pub fn square_position(x: u16, y: u16, config: &Config) -> (u16, u16) {
    let x = x.min(config.adc_max);
    let y = config.adc_max - y.min(config.adc_max);

    (
        scale(x, config.adc_max, config.max_square_x()),
        scale(y, config.adc_max, config.max_square_y()),
    )
}

fn scale(value: u16, from_max: u16, to_max: u16) -> u16 {
    if from_max == 0 {
        return 0;
    }
    (value as u32 * to_max as u32 / from_max as u32) as u16
}
