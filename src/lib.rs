//! Escape-time renderer for Julia and Mandelbrot sets.
//!
//! Pixels are mapped into the complex plane, iterated under a selectable
//! formula, colored by escape time or distance estimation, and passed
//! through a grayscale or logistic-curve palette. Rows of the output image
//! are rendered in parallel by a per-call worker pool.

pub mod cli;
pub mod core;
pub mod fractals;
