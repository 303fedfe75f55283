/// Floating-point tolerance for comparing sampled curve coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute floor, used when both values are close to zero
    pub absolute: f64,
    /// Relative tolerance, scaled by the larger magnitude
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-12;
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    /// Check if two values are equal within tolerance.
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.absolute.max(self.relative * scale)
    }

    /// Check if a value is zero within the absolute tolerance.
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.absolute
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
