//! SSD1306 128x64 display adapter.
//!
//! Wraps the buffered-mode driver so it can be handed to the renderer as a
//! [`Flush`] target.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use joystick_oled::Flush;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, Ssd1306};

type Driver<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered SSD1306 display.
pub struct Oled<DI> {
    driver: Driver<DI>,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    /// Creates the driver in buffered graphics mode and sends the init sequence.
    ///
    /// Init errors are ignored; a missing display only means nothing is shown.
    pub fn new(interface: DI) -> Self {
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().ok();

        Self { driver }
    }
}

impl<DI: WriteOnlyDataCommand> OriginDimensions for Oled<DI> {
    fn size(&self) -> Size {
        OriginDimensions::size(&self.driver)
    }
}

impl<DI: WriteOnlyDataCommand> DrawTarget for Oled<DI> {
    type Color = BinaryColor;
    type Error = <Driver<DI> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.driver.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.driver, color)
    }
}

impl<DI: WriteOnlyDataCommand> Flush for Oled<DI> {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.driver.flush()
    }
}
