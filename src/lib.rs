#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SharedState`**: Atomic flags and square position shared by the button interrupt and the main loop
//! - **`Debouncer`**: Accepts an event only if enough time passed since the last accepted one
//! - **`InputHandler`**: Debounces both buttons and toggles the flags they control
//! - **`map_brightness`**: Turns joystick deflection into red/blue PWM duties
//! - **`square_position`**: Maps a joystick reading onto the drawable area
//! - **`Renderer`**: Draws the border and square onto any monochrome `DrawTarget`
//! - **`Controller`**: One hardware-independent iteration of the main loop
//! - **`DutyLed`** / **`Flush`**: Traits to implement for your LED and display hardware
//! - **`TimeSource`**: Trait to implement for your timing system

pub mod brightness;
pub mod config;
pub mod control;
pub mod debounce;
pub mod input;
pub mod position;
pub mod render;
pub mod state;
pub mod time;

pub use brightness::{DutyLed, LedDuties, map_brightness};
pub use config::{Config, ConfigError};
pub use control::{Controller, JoystickSample, StepOutcome};
pub use debounce::Debouncer;
pub use input::{Button, ButtonEvent, InputHandler};
pub use position::square_position;
pub use render::{BorderStyle, Flush, Renderer, Scene};
pub use state::SharedState;
pub use time::{TimeDuration, TimeInstant, TimeSource};
