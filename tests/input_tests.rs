//! Integration tests for InputHandler and SharedState toggling

mod common;
use common::*;

use joystick_oled::{BorderStyle, Button, ButtonEvent, InputHandler, SharedState};

#[test]
fn power_on_state() {
    let state = SharedState::new();

    assert!(state.pwm_enabled());
    assert!(state.shape_visible());
    assert!(!state.green_on());
    assert_eq!(state.border(), BorderStyle::Solid);
    assert_eq!(state.square_position(), (0, 0));
    // The first frame is drawn without waiting for a button
    assert!(state.take_refresh_request());
    assert!(!state.take_refresh_request());
}

#[test]
fn button_a_toggles_pwm_and_shape() {
    let state = SharedState::new();
    let mut handler = InputHandler::<TestInstant>::new(200);
    state.take_refresh_request();

    let event = handler.on_press(Button::A, TestInstant(1000), &state);

    assert_eq!(
        event,
        Some(ButtonEvent::DisplayToggled {
            pwm_enabled: false,
            shape_visible: false,
        })
    );
    assert!(!state.pwm_enabled());
    assert!(!state.shape_visible());
    // Joystick button state untouched
    assert!(!state.green_on());
    assert_eq!(state.border(), BorderStyle::Solid);
    assert!(state.take_refresh_request());
}

#[test]
fn joystick_button_toggles_green_and_border() {
    let state = SharedState::new();
    let mut handler = InputHandler::<TestInstant>::new(200);
    state.take_refresh_request();

    let event = handler.on_press(Button::Joystick, TestInstant(1000), &state);

    assert_eq!(
        event,
        Some(ButtonEvent::GreenToggled {
            green_on: true,
            border: BorderStyle::Dashed,
        })
    );
    assert!(state.green_on());
    assert_eq!(state.border(), BorderStyle::Dashed);
    assert!(state.pwm_enabled());
    assert!(state.shape_visible());
    assert!(state.take_refresh_request());
}

#[test]
fn bounce_is_ignored_without_side_effects() {
    let state = SharedState::new();
    let mut handler = InputHandler::<TestInstant>::new(200);

    handler.on_press(Button::Joystick, TestInstant(1000), &state).unwrap();
    state.take_refresh_request();

    let event = handler.on_press(Button::Joystick, TestInstant(1050), &state);

    assert_eq!(event, None);
    assert!(state.green_on());
    assert_eq!(state.border(), BorderStyle::Dashed);
    assert!(!state.take_refresh_request());
    assert_eq!(
        handler.debouncer(Button::Joystick).last_accepted(),
        Some(TestInstant(1000))
    );
}

#[test]
fn buttons_are_debounced_independently() {
    let state = SharedState::new();
    let mut handler = InputHandler::<TestInstant>::new(200);

    assert!(handler.on_press(Button::A, TestInstant(1000), &state).is_some());
    assert!(handler.on_press(Button::Joystick, TestInstant(1010), &state).is_some());
    assert!(handler.on_press(Button::A, TestInstant(1020), &state).is_none());
    assert!(handler.on_press(Button::Joystick, TestInstant(1210), &state).is_some());
}

#[test]
fn two_accepted_presses_restore_original_flags() {
    let state = SharedState::new();
    let mut handler = InputHandler::<TestInstant>::new(200);

    for button in [Button::A, Button::Joystick] {
        handler.on_press(button, TestInstant(0), &state).unwrap();
        handler.on_press(button, TestInstant(300), &state).unwrap();
    }

    assert!(state.pwm_enabled());
    assert!(state.shape_visible());
    assert!(!state.green_on());
    assert_eq!(state.border(), BorderStyle::Solid);
}

#[test]
fn direct_toggles_are_involutions() {
    let state = SharedState::new();

    assert!(!state.toggle_pwm_enabled());
    assert!(state.toggle_pwm_enabled());
    assert!(!state.toggle_shape_visible());
    assert!(state.toggle_shape_visible());
    assert!(state.toggle_green());
    assert!(!state.toggle_green());
    assert_eq!(state.toggle_border(), BorderStyle::Dashed);
    assert_eq!(state.toggle_border(), BorderStyle::Solid);
}
