//! Full-frame rendering of the border and square.
//!
//! Provides [`Renderer`], which redraws the whole frame on every call (there
//! is no dirty-region tracking), and the [`Flush`] trait used to push the
//! finished frame to the panel.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::config::Config;
use crate::state::SharedState;

/// A buffered monochrome display that can transmit its frame.
///
/// Implement this for your display driver: drawing goes to the frame buffer,
/// `flush` sends the buffer to the panel.
pub trait Flush: DrawTarget<Color = BinaryColor> {
    /// Transmits the frame buffer.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// How the display border is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Continuous one-pixel frame.
    Solid,

    /// Runs of lit pixels alternating with equally long gaps.
    Dashed,
}

/// Everything that ends up on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    /// Border style.
    pub border: BorderStyle,

    /// Top-left corner of the square, or `None` when it is hidden.
    pub square: Option<(u16, u16)>,
}

impl Scene {
    /// Snapshots the visual flags and square position.
    pub fn capture(state: &SharedState) -> Self {
        Self {
            border: state.border(),
            square: state.shape_visible().then(|| state.square_position()),
        }
    }
}

/// Draws a [`Scene`] onto a monochrome draw target.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: u16,
    height: u16,
    square_size: u16,
    dash_length: u16,
}

impl Renderer {
    /// Creates a renderer for the display geometry in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.display_width,
            height: config.display_height,
            square_size: config.square_size,
            dash_length: config.dash_length.max(1),
        }
    }

    /// Draws `scene` into the frame buffer without transmitting it.
    pub fn draw<D>(&self, target: &mut D, scene: &Scene) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        match scene.border {
            BorderStyle::Solid => self.draw_solid_border(target)?,
            BorderStyle::Dashed => self.draw_dashed_border(target)?,
        }

        if let Some((x, y)) = scene.square {
            let size = self.square_size as u32;
            Rectangle::new(Point::new(x as i32, y as i32), Size::new(size, size))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target)?;
        }

        Ok(())
    }

    /// Draws `scene` and transmits the frame.
    pub fn render<D: Flush>(&self, display: &mut D, scene: &Scene) -> Result<(), D::Error> {
        self.draw(display, scene)?;
        display.flush()
    }

    fn draw_solid_border<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(
            Point::zero(),
            Size::new(self.width as u32, self.height as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
    }

    fn draw_dashed_border<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let right = self.width as i32 - 1;
        let bottom = self.height as i32 - 1;
        let dash = self.dash_length as i32;
        let lit = move |i: &i32| (i / dash) % 2 == 0;

        let horizontal = (0..self.width as i32)
            .filter(lit)
            .flat_map(move |x| [Point::new(x, 0), Point::new(x, bottom)]);
        let vertical = (0..self.height as i32)
            .filter(lit)
            .flat_map(move |y| [Point::new(0, y), Point::new(right, y)]);

        target.draw_iter(
            horizontal
                .chain(vertical)
                .map(|point| Pixel(point, BinaryColor::On)),
        )
    }
}
