use core::fmt::Display;

/// Coefficients of a 2D affine transform, using the same layout as cairo's `cairo_matrix_t`:
///
/// ```text
/// x' = xx * x + xy * y + x0
/// y' = yx * x + yy * y + y0
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Affine2d {
    pub xx : f64,
    pub yx : f64,
    pub xy : f64,
    pub yy : f64,
    pub x0 : f64,
    pub y0 : f64,
}

impl Affine2d {
    pub const IDENTITY : Affine2d = Affine2d { xx: 1f64, yx: 0f64, xy: 0f64, yy: 1f64, x0: 0f64, y0: 0f64 };

    /// Transform a 2D point
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.xx * x + self.xy * y + self.x0,
         self.yx * x + self.yy * y + self.y0)
    }

    /// Transform a 2D direction, ignoring the translation
    #[must_use]
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.xx * dx + self.xy * dy,
         self.yx * dx + self.yy * dy)
    }
}

impl Default for Affine2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for Affine2d {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("[{}, {}, {}, {}, {}, {}]", self.xx, self.yx, self.xy, self.yy, self.x0, self.y0))
    }
}
