pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{ConicError, Result};
pub use tolerance::Tolerance;
