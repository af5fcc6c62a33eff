//! Background colour entity.

use std::fmt;

use rand::Rng;

/// RGB colour painted behind the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl BackgroundColor {
    /// Colour held before the screen is mounted (`#161616`).
    pub const INITIAL: Self = Self::new(0x16, 0x16, 0x16);

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Draws each channel independently and uniformly from `0..=255`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.r#gen(), rng.r#gen(), rng.r#gen())
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Returns the channels as a tuple.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
