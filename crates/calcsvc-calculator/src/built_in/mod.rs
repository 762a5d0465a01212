//! Built-in calculators wrapping the four services.

// Integer calculators
pub mod arithmetic;

// Text calculators
pub mod strings;

// Conversion calculators
pub mod temperature;
pub mod volume;
