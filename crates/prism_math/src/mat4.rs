use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
};

use prism_logging::log_info;
use prism_simd::{Lane, LaneBackend, DefaultBackend};

use crate::{ApproxEq, LOG_CAT};

mod projection;
mod transform;
mod inverse;
mod query;

/// 4x4 single precision matrix, stored as 4 row lanes.
///
/// Matrices use the row-vector convention: a vector is transformed as `v' = v * M`, so the translation is stored in the 4th row.
#[derive(Clone, Copy)]
pub struct Matrix4<B: LaneBackend = DefaultBackend> {
    rows : [Lane<B>; 4],
}

impl<B: LaneBackend> Matrix4<B> {
    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Lane<B>, row1: Lane<B>, row2: Lane<B>, row3: Lane<B>) -> Self {
        Self { rows: [row0, row1, row2, row3] }
    }

    /// Create a new matrix from 16 values in row-major order
    #[inline]
    #[must_use]
    pub fn from_array(vals: [f32; 16]) -> Self {
        Self::from_rows(
            Lane::new(vals[ 0], vals[ 1], vals[ 2], vals[ 3]),
            Lane::new(vals[ 4], vals[ 5], vals[ 6], vals[ 7]),
            Lane::new(vals[ 8], vals[ 9], vals[10], vals[11]),
            Lane::new(vals[12], vals[13], vals[14], vals[15]),
        )
    }

    /// Create a new matrix from the first 16 values of a slice in row-major order, returns `None` if less than 16 values are available
    #[must_use]
    pub fn from_slice(vals: &[f32]) -> Option<Self> {
        let arr : [f32; 16] = vals.get(..16)?.try_into().ok()?;
        Some(Self::from_array(arr))
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::from_rows(
            Lane::new(1f32, 0f32, 0f32, 0f32),
            Lane::new(0f32, 1f32, 0f32, 0f32),
            Lane::new(0f32, 0f32, 1f32, 0f32),
            Lane::new(0f32, 0f32, 0f32, 1f32),
        )
    }

    /// Get a matrix with all values set to 0
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self { rows: [Lane::zero(); 4] }
    }

    /// Get the row at the given index, or a zero lane if `index > 3`
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Lane<B> {
        self.rows.get(index).copied().unwrap_or_else(Lane::zero)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> [Lane<B>; 4] {
        self.rows
    }

    /// Get the value at the given `row` and `column`, or 0 if either index is out of range
    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> f32 {
        if row > 3 || column > 3 {
            return 0f32;
        }
        self.rows[row].to_array()[column]
    }

    /// Get the content of the matrix as an array in row-major order
    #[must_use]
    pub fn to_array(&self) -> [f32; 16] {
        let mut arr = [0f32; 16];
        for (chunk, row) in arr.chunks_exact_mut(4).zip(self.rows.iter()) {
            row.write_to_slice(chunk);
        }
        arr
    }

    /// Transform a 4D vector: `row0 * v.x + row1 * v.y + row2 * v.z + row3 * v.w`
    #[inline]
    #[must_use]
    pub fn transform_vec4(&self, vec: Lane<B>) -> Lane<B> {
        let [row0, row1, row2, row3] = self.rows;
        row0 * vec.splat_x() + row1 * vec.splat_y() + row2 * vec.splat_z() + row3 * vec.splat_w()
    }

    /// Transform a 3D direction, the 4th row (translation) is ignored
    #[inline]
    #[must_use]
    pub fn transform_vec3(&self, vec: Lane<B>) -> Lane<B> {
        let [row0, row1, row2, _] = self.rows;
        row0 * vec.splat_x() + row1 * vec.splat_y() + row2 * vec.splat_z()
    }

    /// Transform a 3D point, which has an implicit w-coord with a value of 1
    #[inline]
    #[must_use]
    pub fn transform_point3(&self, point: Lane<B>) -> Lane<B> {
        self.transform_vec3(point) + self.rows[3]
    }

    /// Dot product of each row with `vec`, which transforms `vec` by the transposed matrix
    #[inline]
    #[must_use]
    pub fn transpose_transform_vec4(&self, vec: Lane<B>) -> Lane<B> {
        let [row0, row1, row2, row3] = self.rows;
        Lane::new(row0.dot4(vec).x(), row1.dot4(vec).x(), row2.dot4(vec).x(), row3.dot4(vec).x())
    }

    /// Transpose the matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        let [row0, row1, row2, row3] = self.rows;

        // (m00, m10, m01, m11), (m20, m30, m21, m31), (m02, m12, m03, m13), (m22, m32, m23, m33)
        let tmp0 = row0.interleave_low(row1);
        let tmp1 = row2.interleave_low(row3);
        let tmp2 = row0.interleave_high(row1);
        let tmp3 = row2.interleave_high(row3);

        Self::from_rows(
            tmp0.merge_low(tmp1),
            tmp0.merge_high(tmp1),
            tmp2.merge_low(tmp3),
            tmp2.merge_high(tmp3),
        )
    }

    /// Matrix product where each row of `rhs` is transformed by `self`: `res.row(i) = self.transform_vec4(rhs.row(i))`.
    ///
    /// Using the row-vector convention, the result applies `rhs` first and `self` second, so `a.matrix_mul(b)` is the product `b * a`.
    #[must_use]
    pub fn matrix_mul(&self, rhs: &Self) -> Self {
        let [row0, row1, row2, row3] = rhs.rows;
        Self::from_rows(
            self.transform_vec4(row0),
            self.transform_vec4(row1),
            self.transform_vec4(row2),
            self.transform_vec4(row3),
        )
    }

    /// `self = self.matrix_mul(rhs)`
    #[inline]
    pub fn matrix_mul_assign(&mut self, rhs: &Self) {
        *self = self.matrix_mul(rhs);
    }

    /// `self = lhs.matrix_mul(self)`
    #[inline]
    pub fn matrix_mul_assign_lhs(&mut self, lhs: &Self) {
        *self = lhs.matrix_mul(self);
    }

    // Inverse of the rotation part of an orthonormal matrix is its transpose
    fn inv_ortho_rotation(&self) -> Self {
        let [row0, row1, row2, _] = self.rows;
        Self::from_rows(row0, row1, row2, Lane::zero()).transpose()
    }

    /// Transform a 3D direction by the inverse of a matrix with orthonormal rows and a translation
    #[must_use]
    pub fn inv_ortho_transform_vec3(&self, vec: Lane<B>) -> Lane<B> {
        self.inv_ortho_rotation().transform_vec3(vec)
    }

    /// Transform a 3D point by the inverse of a matrix with orthonormal rows and a translation
    #[must_use]
    pub fn inv_ortho_transform_point3(&self, point: Lane<B>) -> Lane<B> {
        let translated = point - self.rows[3];
        self.inv_ortho_rotation().transform_point3(translated)
    }

    /// Per element multiplication
    #[must_use]
    pub fn component_mul(&self, rhs: &Self) -> Self {
        Self { rows: core::array::from_fn(|i| self.rows[i] * rhs.rows[i]) }
    }

    /// Per element division
    #[must_use]
    pub fn component_div(&self, rhs: &Self) -> Self {
        Self { rows: core::array::from_fn(|i| self.rows[i] / rhs.rows[i]) }
    }

    /// Linearly interpolate each of the 16 values, `factor` is not clamped
    #[must_use]
    pub fn interpolate(&self, other: &Self, factor: f64) -> Self {
        Self { rows: core::array::from_fn(|i| self.rows[i].interpolate(other.rows[i], factor)) }
    }

    /// Check if every value is within `epsilon` of the value in `other`
    #[inline]
    #[must_use]
    pub fn near(&self, other: &Self, epsilon: f32) -> bool {
        self.rows.iter().zip(other.rows.iter()).all(|(a, b)| a.is_close_to(*b, epsilon))
    }

    /// Check if both matrices are equal within a tolerance of `1e-5`
    #[inline]
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.near(other, 1e-5)
    }

    /// Log the matrix at info level, one line per row
    pub fn log_print(&self) {
        for row in self.rows {
            let [x, y, z, w] = row.to_array();
            log_info!(LOG_CAT, "| {:+.6} {:+.6} {:+.6} {:+.6} |", x, y, z, w);
        }
    }
}

impl<B: LaneBackend> Default for Matrix4<B> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<B: LaneBackend> From<[f32; 16]> for Matrix4<B> {
    fn from(vals: [f32; 16]) -> Self {
        Self::from_array(vals)
    }
}

impl<B: LaneBackend> Add for Matrix4<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { rows: core::array::from_fn(|i| self.rows[i] + rhs.rows[i]) }
    }
}

impl<B: LaneBackend> AddAssign for Matrix4<B> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<B: LaneBackend> Sub for Matrix4<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { rows: core::array::from_fn(|i| self.rows[i] - rhs.rows[i]) }
    }
}

impl<B: LaneBackend> SubAssign for Matrix4<B> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<B: LaneBackend> PartialEq for Matrix4<B> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<B: LaneBackend> ApproxEq for Matrix4<B> {
    type Epsilon = f32;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.near(&rhs, epsilon)
    }
}

impl<B: LaneBackend> Display for Matrix4<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vals = self.to_array();
        f.write_fmt(format_args!("[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
                    vals[ 0], vals[ 1], vals[ 2], vals[ 3],
                    vals[ 4], vals[ 5], vals[ 6], vals[ 7],
                    vals[ 8], vals[ 9], vals[10], vals[11],
                    vals[12], vals[13], vals[14], vals[15]))
    }
}

impl<B: LaneBackend> Debug for Matrix4<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix4")
            .field("row0", &self.rows[0])
            .field("row1", &self.rows[1])
            .field("row2", &self.rows[2])
            .field("row3", &self.rows[3])
            .finish()
    }
}
