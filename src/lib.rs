//! Procedural house icon generator.
//!
//! Draws a white house glyph on a blue background and writes the Android
//! launcher icons, the store icon and the store feature graphic as PNG files.

pub mod geometry;
pub mod icon_gen;

pub use icon_gen::{generate_all, render_feature_graphic, render_icon, Shape};
