#![no_std]
#![no_main]

use embedded_hal_0_2::adc::OneShot;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::pac::{self, interrupt};
use rtt_target::{rprintln, rtt_init_print};

use joystick_oled::{Config, Controller, DutyLed, JoystickSample, Renderer, Scene, SharedState};

mod button_irq;
mod hardware_setup;

/// Flags and square position shared by the button interrupt and the main loop
static STATE: SharedState = SharedState::new();

const CONFIG: Config = Config::DEFAULT;

/// GPIO bank 0 interrupt - fires on a falling edge of either button
#[interrupt]
fn IO_IRQ_BANK0() {
    button_irq::service(&STATE);
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Joystick Display ===");
    rprintln!("Starting initialization...");

    if let Err(e) = CONFIG.validate() {
        rprintln!("Invalid configuration: {}", e);
    }

    let (mut hw, buttons) = hardware_setup::init_hardware(&CONFIG);
    button_irq::install(buttons, &CONFIG);

    // SAFETY: the handler's resources are installed above
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    rprintln!("=== Hardware Ready ===");
    rprintln!("Button A: toggle LED brightness and square");
    rprintln!("Joystick button: toggle green LED and border style");

    let mut controller = Controller::new(CONFIG, &STATE);
    let renderer = Renderer::new(&CONFIG);

    loop {
        // OneShot::read selects the channel of the pin it is given
        let x: u16 = hw.adc.read(&mut hw.axis_x).unwrap_or(CONFIG.adc_center);
        let y: u16 = hw.adc.read(&mut hw.axis_y).unwrap_or(CONFIG.adc_center);
        let sample = JoystickSample::new(x, y);

        let outcome = controller.step(sample);
        hw.led.set_duties(outcome.duties);

        if outcome.redraw {
            renderer.render(&mut hw.display, &Scene::capture(&STATE)).ok();
        }

        if outcome.report {
            rprintln!(
                "Joystick X: {} Y: {} -> red {} blue {}",
                sample.x,
                sample.y,
                outcome.duties.red,
                outcome.duties.blue
            );
        }

        hw.delay.delay_ms(CONFIG.loop_period_ms);
    }
}
