use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::{OutputPin, PinState};
use rp_pico::hal::gpio::Interrupt::EdgeLow;
use rtt_target::rprintln;

use joystick_oled::{Button, ButtonEvent, Config, InputHandler, SharedState, TimeSource};
use rp_pico_joystick::time::Instant;

use crate::hardware_setup::ButtonContext;

/// Everything the GPIO interrupt needs, moved in once during start-up
pub struct ButtonIrq {
    hw: ButtonContext,
    handler: InputHandler<Instant>,
}

static BUTTON_IRQ: Mutex<RefCell<Option<ButtonIrq>>> = Mutex::new(RefCell::new(None));

/// Hands the button peripherals over to the interrupt handler
pub fn install(hw: ButtonContext, config: &Config) {
    let irq = ButtonIrq {
        hw,
        handler: InputHandler::new(config.debounce_ms),
    };
    critical_section::with(|cs| BUTTON_IRQ.borrow(cs).replace(Some(irq)));
}

/// Services pending button edges. Called from the IO_IRQ_BANK0 handler.
pub fn service(state: &SharedState) {
    critical_section::with(|cs| {
        let mut irq = BUTTON_IRQ.borrow(cs).borrow_mut();
        if let Some(irq) = irq.as_mut() {
            irq.service(state);
        }
    });
}

impl ButtonIrq {
    fn service(&mut self, state: &SharedState) {
        let now = self.hw.timer.now();

        if self.hw.button_a.interrupt_status(EdgeLow) {
            self.hw.button_a.clear_interrupt(EdgeLow);
            self.press(Button::A, now, state);
        }

        if self.hw.joystick_button.interrupt_status(EdgeLow) {
            self.hw.joystick_button.clear_interrupt(EdgeLow);
            self.press(Button::Joystick, now, state);
        }
    }

    fn press(&mut self, button: Button, now: Instant, state: &SharedState) {
        let Some(event) = self.handler.on_press(button, now, state) else {
            return;
        };

        match event {
            ButtonEvent::DisplayToggled {
                pwm_enabled,
                shape_visible,
            } => {
                rprintln!(
                    "[{} ms] Button A pressed: PWM {}, square {}",
                    now.as_millis(),
                    on_off(pwm_enabled),
                    if shape_visible { "shown" } else { "hidden" }
                );
            }
            ButtonEvent::GreenToggled { green_on, border } => {
                let _ = self.hw.green.set_state(PinState::from(green_on));
                rprintln!(
                    "[{} ms] Joystick button pressed: green LED {}, border {:?}",
                    now.as_millis(),
                    on_off(green_on),
                    border
                );
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
