use core::f32::consts::FRAC_PI_2;

use prism_simd::{Lane, LaneBackend};

use crate::{Matrix4, Radians};

impl<B: LaneBackend> Matrix4<B> {
    /// Create a right-handed perspective projection matrix, with a vertical field of view `fovy` and an `aspect` ratio defined as `width / height`.
    ///
    /// Depth is mapped to the range [-1; 1].
    #[must_use]
    pub fn init_perspective(fovy: impl Into<Radians>, aspect: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(aspect > 0f32);
        debug_assert!(z_near != z_far);

        let fovy = fovy.into();
        let delta_z = z_far - z_near;
        let cotangent = (FRAC_PI_2 - fovy.0 * 0.5f32).tan();

        let a = cotangent / aspect;
        let b = cotangent;
        let c = -(z_far + z_near) / delta_z;
        let d = -2f32 * z_near * z_far / delta_z;

        Self::from_rows(
            Lane::new(   a, 0f32, 0f32,  0f32),
            Lane::new(0f32,    b, 0f32,  0f32),
            Lane::new(0f32, 0f32,    c, -1f32),
            Lane::new(0f32, 0f32,    d,  0f32),
        )
    }

    /// Create a right-handed orthographic projection matrix.
    ///
    /// Depth is mapped to the range [-1; 1].
    #[must_use]
    pub fn init_ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(left != right);
        debug_assert!(bottom != top);
        debug_assert!(z_near != z_far);

        let delta_x = right - left;
        let delta_y = top - bottom;
        let delta_z = z_far - z_near;

        let a = 2f32 / delta_x;
        let b = -(right + left) / delta_x;
        let c = 2f32 / delta_y;
        let d = -(top + bottom) / delta_y;
        let e = -2f32 / delta_z;
        let f = -(z_far + z_near) / delta_z;

        Self::from_rows(
            Lane::new(   a, 0f32, 0f32, 0f32),
            Lane::new(0f32,    c, 0f32, 0f32),
            Lane::new(0f32, 0f32,    e, 0f32),
            Lane::new(   b,    d,    f, 1f32),
        )
    }

    /// Create a right-handed perspective projection matrix from the bounds of the frustum at the near plane.
    ///
    /// Depth is mapped to the range [-1; 1].
    #[must_use]
    pub fn init_frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(left != right);
        debug_assert!(bottom != top);
        debug_assert!(z_near != z_far);

        let two_near = 2f32 * z_near;
        let rcp_width = 1f32 / (right - left);
        let rcp_height = 1f32 / (top - bottom);
        let rcp_depth = 1f32 / (z_far - z_near);

        let a = two_near * rcp_width;
        let b = two_near * rcp_height;
        let c = (right + left) * rcp_width;
        let d = (top + bottom) * rcp_height;
        let e = -(z_far + z_near) * rcp_depth;
        let f = -two_near * z_far * rcp_depth;

        Self::from_rows(
            Lane::new(   a, 0f32, 0f32,  0f32),
            Lane::new(0f32,    b, 0f32,  0f32),
            Lane::new(   c,    d,    e, -1f32),
            Lane::new(0f32, 0f32,    f,  0f32),
        )
    }

    /// Create a right-handed view matrix, looking from `eye` towards `center` with the given `up` direction.
    ///
    /// The view looks down the negative z-axis. `eye`, `center` and `up` only use their first 3 elements.
    #[must_use]
    pub fn init_look_at(eye: Lane<B>, center: Lane<B>, up: Lane<B>) -> Self {
        let forward = (center - eye).normalize3();
        let right = forward.cross3(up).normalize3();
        let true_up = right.cross3(forward);
        let backward = Lane::zero() - forward;

        let x = -right.dot3(eye).x();
        let y = -true_up.dot3(eye).x();
        let z = -backward.dot3(eye).x();

        let rotation = Self::from_rows(right, true_up, backward, Lane::new(0f32, 0f32, 0f32, 1f32)).transpose();
        let [row0, row1, row2, _] = rotation.rows();
        Self::from_rows(row0, row1, row2, Lane::new(x, y, z, 1f32))
    }
}
