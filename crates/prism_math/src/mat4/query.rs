use prism_simd::{Lane, LaneBackend};

use crate::{Affine2d, Matrix4};

impl<B: LaneBackend> Matrix4<B> {
    /// Check if the matrix is exactly the identity matrix
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Check if the matrix is equivalent to a 2D affine transform: no perspective and no transform on or by the z-axis
    #[must_use]
    pub fn is_2d(&self) -> bool {
        let [row0, row1, row2, row3] = self.rows();
        row0.zero_zw().cmp_eq(row0)
            && row1.zero_zw().cmp_eq(row1)
            && row2 == Lane::new(0f32, 0f32, 1f32, 0f32)
            && row3.z() == 0f32
            && row3.w() == 1f32
    }

    /// Decompose the matrix into 2D affine coefficients, returns `None` if the matrix is not 2D
    #[must_use]
    pub fn to_2d(&self) -> Option<Affine2d> {
        if !self.is_2d() {
            return None;
        }

        let [row0, row1, _, row3] = self.rows();
        Some(Affine2d {
            xx: row0.x() as f64,
            yx: row0.y() as f64,
            xy: row1.x() as f64,
            yy: row1.y() as f64,
            x0: row3.x() as f64,
            y0: row3.y() as f64,
        })
    }

    /// Create a matrix from 2D affine coefficients
    #[must_use]
    pub fn from_2d(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self::from_rows(
            Lane::new(xx as f32, yx as f32, 0f32, 0f32),
            Lane::new(xy as f32, yy as f32, 0f32, 0f32),
            Lane::new(0f32     , 0f32     , 1f32, 0f32),
            Lane::new(x0 as f32, y0 as f32, 0f32, 1f32),
        )
    }

    #[inline] #[must_use] pub fn x_translation(&self) -> f32 { self.value(3, 0) }
    #[inline] #[must_use] pub fn y_translation(&self) -> f32 { self.value(3, 1) }
    #[inline] #[must_use] pub fn z_translation(&self) -> f32 { self.value(3, 2) }

    // Scale factors are the diagonal, so they are only meaningful for matrices without rotation or skew
    #[inline] #[must_use] pub fn x_scale(&self) -> f32 { self.value(0, 0) }
    #[inline] #[must_use] pub fn y_scale(&self) -> f32 { self.value(1, 1) }
    #[inline] #[must_use] pub fn z_scale(&self) -> f32 { self.value(2, 2) }
}

impl<B: LaneBackend> From<Affine2d> for Matrix4<B> {
    fn from(affine: Affine2d) -> Self {
        Self::from_2d(affine.xx, affine.yx, affine.xy, affine.yy, affine.x0, affine.y0)
    }
}
