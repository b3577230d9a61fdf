use embedded_hal::pwm::SetDutyCycle;
use joystick_oled::{DutyLed, LedDuties};

/// Red and blue LED channels driven by PWM
///
/// This wrapper implements the DutyLed trait required by the main loop,
/// clamping duty values to what the PWM slice can output.
pub struct PwmLed<R, B>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    blue: B,
    max_duty: u16,
}

impl<R, B> PwmLed<R, B>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `blue` - PWM channel for blue LED
    pub fn new(red: R, blue: B) -> Self {
        let max_duty = red.max_duty_cycle().min(blue.max_duty_cycle());

        Self {
            red,
            blue,
            max_duty,
        }
    }
}

impl<R, B> DutyLed for PwmLed<R, B>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_duties(&mut self, duties: LedDuties) {
        let _ = self.red.set_duty_cycle(duties.red.min(self.max_duty));
        let _ = self.blue.set_duty_cycle(duties.blue.min(self.max_duty));
    }
}
