pub mod coloring;
pub mod common;
pub mod dynamics;
pub mod iteration_formula;
pub mod julia;
pub mod mandelbrot;
pub mod renderer;
pub mod variant;
