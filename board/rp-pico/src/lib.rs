//! RP2040 board support for the joystick-oled firmware.

#![no_std]

pub mod oled;
pub mod pwm_led;
pub mod time;
