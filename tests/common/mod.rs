//! Shared test infrastructure for joystick-oled integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use joystick_oled::{DutyLed, Flush, LedDuties, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// 32-bit millisecond counter that wraps, like a SysTick-driven clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingInstant(pub u32);

impl TimeInstant for WrappingInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all duty changes for testing
pub struct MockLed {
    current: LedDuties,
    history: heapless::Vec<LedDuties, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current: LedDuties::OFF,
            history: heapless::Vec::new(),
        }
    }

    pub fn current(&self) -> LedDuties {
        self.current
    }

    pub fn history(&self) -> &[LedDuties] {
        &self.history
    }
}

impl DutyLed for MockLed {
    fn set_duties(&mut self, duties: LedDuties) {
        self.current = duties;
        let _ = self.history.push(duties);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

/// In-memory 128x64 frame buffer that counts flushes
pub struct MockDisplay {
    buffer: [[bool; WIDTH]; HEIGHT],
    flushed: [[bool; WIDTH]; HEIGHT],
    flush_count: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            buffer: [[false; WIDTH]; HEIGHT],
            flushed: [[false; WIDTH]; HEIGHT],
            flush_count: 0,
        }
    }

    /// Pixel in the frame buffer (drawn, maybe not yet flushed)
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.buffer[y][x]
    }

    /// Pixel as last transmitted to the panel
    pub fn shown(&self, x: usize, y: usize) -> bool {
        self.flushed[y][x]
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Number of lit pixels inside the rectangle (exclusive bounds)
    pub fn lit_in(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| self.buffer[y][x])
            .count()
    }

    pub fn lit_count(&self) -> usize {
        self.lit_in(0, 0, WIDTH, HEIGHT)
    }

    /// Sets a pixel directly, bypassing the draw target
    pub fn poke(&mut self, x: usize, y: usize) {
        self.buffer[y][x] = true;
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for MockDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as usize) < WIDTH && (point.y as usize) < HEIGHT
            {
                self.buffer[point.y as usize][point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Flush for MockDisplay {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushed = self.buffer;
        self.flush_count += 1;
        Ok(())
    }
}
