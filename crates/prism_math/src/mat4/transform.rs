use prism_simd::{Lane, LaneBackend};

use crate::{Matrix4, Radians};

impl<B: LaneBackend> Matrix4<B> {
    /// Create a translation matrix
    #[must_use]
    pub fn init_translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(
            Lane::new(1f32, 0f32, 0f32, 0f32),
            Lane::new(0f32, 1f32, 0f32, 0f32),
            Lane::new(0f32, 0f32, 1f32, 0f32),
            Lane::new(   x,    y,    z, 1f32),
        )
    }

    /// Create a scale matrix
    #[must_use]
    pub fn init_scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(
            Lane::new(   x, 0f32, 0f32, 0f32),
            Lane::new(0f32,    y, 0f32, 0f32),
            Lane::new(0f32, 0f32,    z, 0f32),
            Lane::new(0f32, 0f32, 0f32, 1f32),
        )
    }

    /// Create a rotation matrix of `angle` around `axis`.
    ///
    /// Only the first 3 elements of `axis` are used, the axis does not need to be normalized.
    /// A positive angle rotates counter-clockwise when looking down the axis towards the origin.
    #[must_use]
    pub fn init_rotation(angle: impl Into<Radians>, axis: Lane<B>) -> Self {
        // Row-vector convention, so this is the transpose of the column-vector rotation
        let (sin, cos) = (-angle.into()).sin_cos();
        let axis = axis.normalize3();
        let [x, y, z, _] = axis.to_array();

        let one_min_cos = 1f32 - cos;
        let ab = x * y * one_min_cos;
        let bc = y * z * one_min_cos;
        let ca = z * x * one_min_cos;

        let tx = x * x;
        let ty = y * y;
        let tz = z * z;

        Self::from_rows(
            Lane::new(tx + cos * (1f32 - tx), ab - z * sin           , ca + y * sin           , 0f32),
            Lane::new(ab + z * sin           , ty + cos * (1f32 - ty), bc - x * sin           , 0f32),
            Lane::new(ca - y * sin           , bc + x * sin           , tz + cos * (1f32 - tz), 0f32),
            Lane::new(0f32, 0f32, 0f32, 1f32),
        )
    }

    /// Create a 2D skew matrix, `x_skew` and `y_skew` are the angles of the skew along each axis
    #[must_use]
    pub fn init_skew(x_skew: impl Into<Radians>, y_skew: impl Into<Radians>) -> Self {
        let tan_x = x_skew.into().tan();
        let tan_y = y_skew.into().tan();

        Self::from_rows(
            Lane::new( 1f32, tan_y, 0f32, 0f32),
            Lane::new(tan_x,  1f32, 0f32, 0f32),
            Lane::new( 0f32,  0f32, 1f32, 0f32),
            Lane::new( 0f32,  0f32, 0f32, 1f32),
        )
    }

    /// Prepend a translation to the current transform (`T * self`), so the translation is applied to a vector first
    #[must_use]
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Self {
        self.matrix_mul(&Self::init_translation(x, y, z))
    }

    /// Prepend a rotation of `angle` around `axis` to the current transform (`R * self`)
    #[must_use]
    pub fn rotate(&self, angle: impl Into<Radians>, axis: Lane<B>) -> Self {
        self.matrix_mul(&Self::init_rotation(angle, axis))
    }

    /// Prepend a rotation around the x-axis to the current transform
    #[must_use]
    pub fn rotate_x(&self, angle: impl Into<Radians>) -> Self {
        self.rotate(angle, Lane::new(1f32, 0f32, 0f32, 0f32))
    }

    /// Prepend a rotation around the y-axis to the current transform
    #[must_use]
    pub fn rotate_y(&self, angle: impl Into<Radians>) -> Self {
        self.rotate(angle, Lane::new(0f32, 1f32, 0f32, 0f32))
    }

    /// Prepend a rotation around the z-axis to the current transform
    #[must_use]
    pub fn rotate_z(&self, angle: impl Into<Radians>) -> Self {
        self.rotate(angle, Lane::new(0f32, 0f32, 1f32, 0f32))
    }

    /// Prepend a scale to the current transform (`S * self`)
    #[must_use]
    pub fn scale(&self, x: f32, y: f32, z: f32) -> Self {
        self.matrix_mul(&Self::init_scale(x, y, z))
    }

    /// Skew the y-axis by the x-axis: `row1 = row0 * factor + row1`
    #[must_use]
    pub fn skew_xy(&self, factor: f32) -> Self {
        let [row0, row1, row2, row3] = self.rows();
        Self::from_rows(row0, row0.madd(Lane::splat(factor), row1), row2, row3)
    }

    /// Skew the z-axis by the x-axis: `row2 = row0 * factor + row2`
    #[must_use]
    pub fn skew_xz(&self, factor: f32) -> Self {
        let [row0, row1, row2, row3] = self.rows();
        Self::from_rows(row0, row1, row0.madd(Lane::splat(factor), row2), row3)
    }

    /// Skew the z-axis by the y-axis: `row2 = row1 * factor + row2`
    #[must_use]
    pub fn skew_yz(&self, factor: f32) -> Self {
        let [row0, row1, row2, row3] = self.rows();
        Self::from_rows(row0, row1, row1.madd(Lane::splat(factor), row2), row3)
    }

    /// Append a perspective with the given `depth` to the current transform: every row gets `-z / depth` added to its w-coord
    #[must_use]
    pub fn perspective(&self, depth: f32) -> Self {
        debug_assert!(depth != 0f32);
        let factor = -1f32 / depth;
        let rows = self.rows().map(|row| {
            let [x, y, z, w] = row.to_array();
            Lane::new(x, y, z, w + factor * z)
        });
        Self::from_rows(rows[0], rows[1], rows[2], rows[3])
    }

    /// Divide every value by the bottom-right value of the matrix.
    ///
    /// The matrix is returned unchanged when that value is approximately 0.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let ww = self.value(3, 3);
        if ww.abs() <= f32::EPSILON {
            return *self;
        }

        let factor = Lane::splat(1f32 / ww);
        let rows = self.rows().map(|row| row * factor);
        Self::from_rows(rows[0], rows[1], rows[2], rows[3])
    }
}

#[cfg(test)]
mod tests {
    use prism_simd::{Lane, Scalar};
    use crate::{ApproxEq, Degrees, Matrix4};

    type M = Matrix4<Scalar>;

    #[test]
    fn translation() {
        let m = M::init_translation(1f32, 2f32, 3f32);
        assert_eq!(m.transform_point3(Lane::new(1f32, 1f32, 1f32, 0f32)), Lane::new(2f32, 3f32, 4f32, 1f32));
        assert_eq!(m.transform_vec3(Lane::new(1f32, 1f32, 1f32, 0f32)), Lane::new(1f32, 1f32, 1f32, 0f32));
    }

    #[test]
    fn rotation_around_z() {
        let m = M::init_rotation(Degrees(90f32), Lane::new(0f32, 0f32, 2f32, 0f32));
        let res = m.transform_vec3(Lane::new(1f32, 0f32, 0f32, 0f32));
        assert!(res.is_close_to(Lane::new(0f32, 1f32, 0f32, 0f32), 1e-6));
        assert_eq!(m.row(3), Lane::new(0f32, 0f32, 0f32, 1f32));
    }

    #[test]
    fn skew() {
        let m = M::init_skew(Degrees(45f32), Degrees(0f32));
        let res = m.transform_point3(Lane::new(0f32, 1f32, 0f32, 0f32));
        assert!(res.is_close_to(Lane::new(1f32, 1f32, 0f32, 1f32), 1e-6));

        let seq = M::from_array(core::array::from_fn(|i| i as f32));
        assert_eq!(seq.skew_xy(2f32).row(1), Lane::new(4f32, 7f32, 10f32, 13f32));
        assert_eq!(seq.skew_xz(1f32).row(2), Lane::new(8f32, 10f32, 12f32, 14f32));
        assert_eq!(seq.skew_yz(1f32).row(2), Lane::new(12f32, 14f32, 16f32, 18f32));
    }

    #[test]
    fn translate_applies_first() {
        let m = M::init_scale(2f32, 2f32, 2f32).translate(1f32, 0f32, 0f32);
        let res = m.transform_point3(Lane::new(1f32, 1f32, 1f32, 0f32));
        assert_eq!(res, Lane::new(4f32, 2f32, 2f32, 1f32));
    }

    #[test]
    fn perspective() {
        let m = M::identity().perspective(2f32);
        assert_eq!(m.row(2), Lane::new(0f32, 0f32, 1f32, -0.5f32));
        assert_eq!(m.row(0), Lane::new(1f32, 0f32, 0f32, 0f32));
        assert_eq!(m.row(3), Lane::new(0f32, 0f32, 0f32, 1f32));
    }

    #[test]
    fn normalize() {
        let m = M::init_scale(2f32, 4f32, 8f32).component_mul(&M::from_array([2f32; 16]));
        let norm = m.normalize();
        assert_eq!(norm.value(3, 3), 1f32);
        assert_eq!(norm.value(1, 1), 4f32);

        let projected = M::init_perspective(Degrees(60f32), 1f32, 1f32, 10f32);
        assert_eq!(projected.normalize(), projected);
    }
}
