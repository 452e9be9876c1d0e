use prism_simd::{Lane, LaneBackend};

use crate::Matrix4;

// 2x2 sub-determinants of the upper (rows 0 and 1) and lower (rows 2 and 3) halves of a matrix
struct SubDeterminants {
    upper : [f32; 6],
    lower : [f32; 6],
}

impl SubDeterminants {
    fn new(m: &[f32; 16]) -> Self {
        let [a00, a01, a02, a03,
             a10, a11, a12, a13,
             a20, a21, a22, a23,
             a30, a31, a32, a33] = *m;

        Self {
            upper: [
                a00 * a11 - a10 * a01,
                a00 * a12 - a10 * a02,
                a00 * a13 - a10 * a03,
                a01 * a12 - a11 * a02,
                a01 * a13 - a11 * a03,
                a02 * a13 - a12 * a03,
            ],
            lower: [
                a20 * a31 - a30 * a21,
                a20 * a32 - a30 * a22,
                a20 * a33 - a30 * a23,
                a21 * a32 - a31 * a22,
                a21 * a33 - a31 * a23,
                a22 * a33 - a32 * a23,
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let [s0, s1, s2, s3, s4, s5] = self.upper;
        let [c0, c1, c2, c3, c4, c5] = self.lower;
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    // (lower[idx], lower[idx], upper[idx], upper[idx])
    fn pair<B: LaneBackend>(&self, idx: usize) -> Lane<B> {
        let c = self.lower[idx];
        let s = self.upper[idx];
        Lane::new(c, c, s, s)
    }
}

impl<B: LaneBackend> Matrix4<B> {
    /// Calculate the determinant of the matrix
    #[must_use]
    pub fn determinant(&self) -> f32 {
        SubDeterminants::new(&self.to_array()).determinant()
    }

    /// Calculate the adjugate matrix, i.e. the transpose of the cofactor matrix
    #[must_use]
    pub fn adjugate(&self) -> Self {
        let m = self.to_array();
        let sub = SubDeterminants::new(&m);

        // Column `k`, with the elements of each half swapped: (m[1][k], m[0][k], m[3][k], m[2][k])
        let col = |k: usize| Lane::<B>::new(m[4 + k], m[k], m[12 + k], m[8 + k]);
        let [col0, col1, col2, col3] = [col(0), col(1), col(2), col(3)];

        let row0 = col1 * sub.pair(5) - col2 * sub.pair(4) + col3 * sub.pair(3);
        let row1 = col0 * sub.pair(5) - col2 * sub.pair(2) + col3 * sub.pair(1);
        let row2 = col0 * sub.pair(4) - col1 * sub.pair(2) + col3 * sub.pair(0);
        let row3 = col0 * sub.pair(3) - col1 * sub.pair(1) + col2 * sub.pair(0);

        Self::from_rows(
            row0.flip_sign_0101(),
            row1.flip_sign_1010(),
            row2.flip_sign_0101(),
            row3.flip_sign_1010(),
        )
    }

    /// Calculate the inverse of the matrix, returns `None` if the matrix is singular
    ///
    /// #Note
    ///
    /// Singularity is an absolute test, `|det| <= f32::EPSILON`, the same one [`Matrix4::is_singular`] uses.
    /// It does not scale with the magnitude of the elements, so a uniform scale below roughly `0.005` already counts as singular,
    /// even though such a matrix is well-conditioned.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }

        let rcp_det = Lane::splat(1f32 / det);
        let rows = self.adjugate().rows().map(|row| row * rcp_det);
        Some(Self::from_rows(rows[0], rows[1], rows[2], rows[3]))
    }

    /// Check if the matrix is singular, i.e. it has no inverse
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() <= f32::EPSILON
    }

    /// Check if the back face of a plane transformed by the matrix is visible, a singular matrix never shows its back face
    #[must_use]
    pub fn is_backface_visible(&self) -> bool {
        match self.inverse() {
            Some(inv) => inv.value(2, 2) < 0f32,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use prism_simd::{Lane, Scalar};
    use crate::{ApproxEq, Degrees, Matrix4};

    type M = Matrix4<Scalar>;

    #[test]
    fn determinant() {
        assert_eq!(M::identity().determinant(), 1f32);
        assert_eq!(M::init_scale(2f32, 3f32, 4f32).determinant(), 24f32);
        assert_eq!(M::init_translation(5f32, 6f32, 7f32).determinant(), 1f32);
        assert_eq!(M::from_array(core::array::from_fn(|i| i as f32)).determinant(), 0f32);

        // Swapping 2 rows flips the sign
        let m = M::from_rows(
            Lane::new(0f32, 1f32, 0f32, 0f32),
            Lane::new(1f32, 0f32, 0f32, 0f32),
            Lane::new(0f32, 0f32, 1f32, 0f32),
            Lane::new(0f32, 0f32, 0f32, 1f32),
        );
        assert_eq!(m.determinant(), -1f32);
    }

    #[test]
    fn adjugate() {
        let m = M::from_array([
            1f32, 2f32, 0f32, 0f32,
            3f32, 4f32, 0f32, 0f32,
            0f32, 0f32, 1f32, 0f32,
            0f32, 0f32, 0f32, 2f32,
        ]);
        let expected = M::from_array([
             8f32, -4f32,  0f32,  0f32,
            -6f32,  2f32,  0f32,  0f32,
             0f32,  0f32, -4f32,  0f32,
             0f32,  0f32,  0f32, -2f32,
        ]);
        assert_eq!(m.adjugate(), expected);

        // m * adj(m) = det(m) * I
        let det = M::identity().component_mul(&M::from_array([m.determinant(); 16]));
        assert_eq!(m.matrix_mul(&m.adjugate()), det);
    }

    #[test]
    fn inverse() {
        let m = M::init_scale(2f32, 4f32, 8f32).translate(1f32, 2f32, 3f32).rotate_y(Degrees(30f32));
        let inv = m.inverse().unwrap();
        assert!(m.matrix_mul(&inv).is_close_to(M::identity(), 1e-4));
        assert!(inv.matrix_mul(&m).is_close_to(M::identity(), 1e-4));

        assert_eq!(M::zero().inverse(), None);
        assert!(M::zero().is_singular());
        assert!(!M::identity().is_singular());
    }

    #[test]
    fn small_uniform_scale_is_singular() {
        // det = 0.004^3 = 6.4e-8
        let tiny = M::init_scale(0.004f32, 0.004f32, 0.004f32);
        assert!(tiny.is_singular());
        assert_eq!(tiny.inverse(), None);

        // det = 1e-6
        let small = M::init_scale(0.01f32, 0.01f32, 0.01f32);
        assert!(!small.is_singular());
        let inv = small.inverse().unwrap();
        assert!(inv.is_close_to(M::init_scale(100f32, 100f32, 100f32), 1e-3));
    }

    #[test]
    fn backface() {
        assert!(!M::identity().is_backface_visible());
        assert!(M::identity().rotate_x(Degrees(180f32)).is_backface_visible());
        assert!(M::init_scale(1f32, 1f32, -1f32).is_backface_visible());
        assert!(!M::zero().is_backface_visible());
    }
}
