//! Conic Lab geometry: conic curves, sampling, foci, and the cone/plane surfaces.

pub mod conic;
pub mod curve;
pub mod equation;
pub mod foci;
pub mod sample;
pub mod surface;

pub use conic::{ConicShape, ConicType, ShapeParams};
pub use curve::Curve;
pub use equation::equation_string;
pub use foci::{focus_points, vertex_points};
pub use sample::{
    generate_curve, sample_conic, ConicSample, DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS,
};
pub use surface::Surface;
