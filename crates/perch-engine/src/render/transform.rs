use glam::Mat4;

/// Orthographic projection spanning `[-aspect, aspect] x [-1, 1]`.
///
/// Near and far are `1` and `-1`, so geometry at `z = 0` sits mid-range.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::orthographic_rh(-aspect, aspect, -1.0, 1.0, 1.0, -1.0)
}

/// Rotation about the view axis by `angle` radians.
pub fn rotation(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}

/// Combined per-frame transform: projection * rotation.
///
/// `elapsed` is the seconds since the clock started and doubles as the
/// rotation angle, so the spin speed does not depend on frame rate.
pub fn frame_transform(elapsed: f32, aspect: f32) -> Mat4 {
    projection(aspect) * rotation(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn transform_is_deterministic() {
        assert_eq!(frame_transform(1.25, 1.5), frame_transform(1.25, 1.5));
    }

    #[test]
    fn transform_is_projection_after_rotation() {
        let t = 0.75;
        let aspect = 1.6;
        let expected = projection(aspect) * Mat4::from_rotation_z(t);
        assert!(frame_transform(t, aspect).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn zero_time_is_plain_projection() {
        assert!(frame_transform(0.0, 2.0).abs_diff_eq(projection(2.0), EPS));
    }

    #[test]
    fn angle_equals_elapsed_seconds() {
        // A quarter turn maps +X onto +Y.
        let p = frame_transform(FRAC_PI_2, 1.0) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 0.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn aspect_scales_x_only() {
        let p = frame_transform(0.0, 2.0) * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert!((p.x - 0.5).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
        assert!((p.w - 1.0).abs() < EPS);
    }

    #[test]
    fn geometry_plane_stays_inside_depth_range() {
        let p = projection(1.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((0.0..=1.0).contains(&p.z));
    }
}
