//! Reusable widgets shared across panels.

pub mod slider;

pub use slider::Slider;
