//! Orientation matrix → axis/angle conversion
//!
//! Used by the interactive exporter to aim the camera along a
//! [1 0 1̄]-type viewing direction. The rotation angle comes from the trace;
//! the axis is the unit null vector of R − I (the eigenvector for
//! eigenvalue 1), extracted with an SVD. Component signs follow the
//! skew-symmetric off-diagonal convention, which is ambiguous at angles of
//! 0 and π: the zero-angle case falls back to a fixed z axis, and at π the
//! eigenvector signs are kept wherever the skew entries vanish.

use nalgebra::Matrix3;

const ZERO_ATOL: f64 = 1.0e-300;

/// Convert a proper rotation matrix to `[axis_x, axis_y, axis_z, angle]`.
pub fn om_to_axis_angle(om: &Matrix3<f64>) -> [f64; 4] {
    let t = 0.5 * (om.trace() - 1.0);
    let angle = t.clamp(-1.0, 1.0).acos();

    if angle.abs() < ZERO_ATOL {
        return [0.0, 0.0, 1.0, 0.0];
    }

    // Null vector of R - I: right singular vector of the smallest singular
    // value (nalgebra sorts them in descending order).
    let svd = (om - Matrix3::identity()).svd(true, true);
    let v_t = svd.v_t.expect("SVD of a 3x3 matrix always yields V^T");
    let mut axis = [v_t[(2, 0)], v_t[(2, 1)], v_t[(2, 2)]];

    let skew = [
        om[(1, 2)] - om[(2, 1)],
        om[(2, 0)] - om[(0, 2)],
        om[(0, 1)] - om[(1, 0)],
    ];
    for (a, d) in axis.iter_mut().zip(skew) {
        if d.abs() >= ZERO_ATOL {
            *a = a.abs() * d.signum();
        }
    }

    [axis[0], axis[1], axis[2], angle]
}
