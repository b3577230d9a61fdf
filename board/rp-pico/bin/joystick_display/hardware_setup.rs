use cortex_m::delay::Delay;
use fugit::RateExtU32;
use rp_pico::hal::{
    Adc, Clock, I2C, Sio, Timer,
    adc::AdcPin,
    clocks::init_clocks_and_plls,
    gpio::{
        FunctionI2C, FunctionSioInput, FunctionSioOutput, Interrupt, Pin, PullDown,
        PullNone, PullUp,
        bank0::{Gpio5, Gpio11, Gpio14, Gpio15, Gpio22, Gpio26, Gpio27},
    },
    pac,
    pwm::{A, B, Channel, FreeRunning, Pwm6, Slice},
    watchdog::Watchdog,
};
use rtt_target::rprintln;
use ssd1306::{I2CDisplayInterface, prelude::I2CInterface};

use joystick_oled::Config;
use rp_pico_joystick::oled::Oled;
use rp_pico_joystick::pwm_led::PwmLed;
use rp_pico_joystick::time::HardwareTimer;

/// Red (GPIO13) on PWM6 B, blue (GPIO12) on PWM6 A
pub type Led = PwmLed<Channel<Slice<Pwm6, FreeRunning>, B>, Channel<Slice<Pwm6, FreeRunning>, A>>;

/// Green LED on GPIO11, plain digital output
pub type GreenLed = Pin<Gpio11, FunctionSioOutput, PullDown>;

/// Button A on GPIO5, active-low
pub type ButtonA = Pin<Gpio5, FunctionSioInput, PullUp>;

/// Joystick push button on GPIO22, active-low
pub type JoystickButton = Pin<Gpio22, FunctionSioInput, PullUp>;

/// Joystick X axis on GPIO27 (ADC channel 1)
pub type AxisX = AdcPin<Pin<Gpio27, FunctionSioInput, PullNone>>;

/// Joystick Y axis on GPIO26 (ADC channel 0)
pub type AxisY = AdcPin<Pin<Gpio26, FunctionSioInput, PullNone>>;

type I2cBus = I2C<
    pac::I2C1,
    (
        Pin<Gpio14, FunctionI2C, PullUp>,
        Pin<Gpio15, FunctionI2C, PullUp>,
    ),
>;

/// SSD1306 at 0x3C on I2C1
pub type Display = Oled<I2CInterface<I2cBus>>;

/// Peripherals owned by the main loop
pub struct HardwareContext {
    pub led: Led,
    pub display: Display,
    pub adc: Adc,
    pub axis_x: AxisX,
    pub axis_y: AxisY,
    pub delay: Delay,
}

/// Peripherals owned by the button interrupt
pub struct ButtonContext {
    pub button_a: ButtonA,
    pub joystick_button: JoystickButton,
    pub green: GreenLed,
    pub timer: HardwareTimer,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - System clock configuration (125 MHz)
/// - GPIO for the LEDs and buttons, with falling-edge interrupts enabled
/// - PWM slice 6 for the red and blue LEDs
/// - ADC for the joystick axes
/// - I2C1 and the OLED display
///
/// Setup failures of optional parts are ignored; the program proceeds
/// unconditionally.
pub fn init_hardware(config: &Config) -> (HardwareContext, ButtonContext) {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Buttons: pulled high, interrupt on the falling edge of a press
    let button_a = pins.gpio5.into_pull_up_input();
    button_a.set_interrupt_enabled(Interrupt::EdgeLow, true);
    let joystick_button = pins.gpio22.into_pull_up_input();
    joystick_button.set_interrupt_enabled(Interrupt::EdgeLow, true);

    let green = pins.gpio11.into_push_pull_output();

    // PWM6 carries both brightness-controlled LEDs; top doubles as max duty
    let mut pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    pwm_slices.pwm6.set_top(config.max_duty);
    pwm_slices.pwm6.enable();

    let mut blue_channel = pwm_slices.pwm6.channel_a;
    let mut red_channel = pwm_slices.pwm6.channel_b;
    blue_channel.output_to(pins.gpio12);
    red_channel.output_to(pins.gpio13);

    rprintln!("LEDs configured on GPIO13 (R, PWM), GPIO11 (G), GPIO12 (B, PWM)");

    let led = PwmLed::new(red_channel, blue_channel);

    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let axis_x = AdcPin::new(pins.gpio27.into_floating_input()).unwrap();
    let axis_y = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();

    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let display = Oled::new(I2CDisplayInterface::new(i2c));

    rprintln!("Display configured on I2C1 (SDA GPIO14, SCL GPIO15) at 0x3C");

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    (
        HardwareContext {
            led,
            display,
            adc,
            axis_x,
            axis_y,
            delay,
        },
        ButtonContext {
            button_a,
            joystick_button,
            green,
            timer: HardwareTimer::new(timer),
        },
    )
}
