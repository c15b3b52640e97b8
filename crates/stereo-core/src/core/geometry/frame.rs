use super::vector::Vector3;

/// A right-handed orthonormal frame whose third axis follows a given direction.
///
/// The first axis is the deterministic perpendicular of the direction
/// ([`Vector3::perpendicular_vector`]), so the same input always yields the same frame.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    pub u: Vector3,
    pub v: Vector3,
    pub w: Vector3,
}

impl LocalFrame {
    /// Builds a frame with `w` along `direction`.
    ///
    /// Returns `None` if `direction` has zero length.
    pub fn from_axis(direction: &Vector3) -> Option<Self> {
        let w = direction.normalized()?;
        let u = w.perpendicular_vector();
        let v = w.cross(&u);
        Some(Self { u, v, w })
    }

    /// Expresses a global vector in this frame's `(u, v, w)` coordinates.
    pub fn to_local(&self, global: &Vector3) -> Vector3 {
        Vector3::new(global.dot(&self.u), global.dot(&self.v), global.dot(&self.w))
    }

    /// Maps `(u, v, w)` coordinates back to the global frame.
    pub fn to_global(&self, local: &Vector3) -> Vector3 {
        self.u.multiply_by(local.x()) + self.v.multiply_by(local.y()) + self.w.multiply_by(local.z())
    }

    /// `u · (v × w)`; `1.0` for any frame built by [`LocalFrame::from_axis`].
    pub fn handedness(&self) -> f64 {
        self.u.scalar_triple_product(&self.v, &self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn frame_axes_are_orthonormal_and_right_handed() {
        for direction in [
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(1.0, -2.0, 0.5),
        ] {
            let frame = LocalFrame::from_axis(&direction).unwrap();
            for axis in [frame.u, frame.v, frame.w] {
                assert!(f64_approx_equal(axis.length(), 1.0));
            }
            assert!(f64_approx_equal(frame.u.dot(&frame.v), 0.0));
            assert!(f64_approx_equal(frame.v.dot(&frame.w), 0.0));
            assert!(f64_approx_equal(frame.u.dot(&frame.w), 0.0));
            assert!(f64_approx_equal(frame.handedness(), 1.0));
        }
    }

    #[test]
    fn third_axis_follows_direction() {
        let frame = LocalFrame::from_axis(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert!(frame.w.equals_with_tolerance(&Vector3::new(0.0, 0.6, 0.8), TOLERANCE));
    }

    #[test]
    fn zero_direction_has_no_frame() {
        assert!(LocalFrame::from_axis(&Vector3::zero()).is_none());
    }

    #[test]
    fn local_and_global_coordinates_round_trip() {
        let frame = LocalFrame::from_axis(&Vector3::new(1.0, 1.0, 1.0)).unwrap();
        let global = Vector3::new(0.3, -2.0, 4.5);
        let back = frame.to_global(&frame.to_local(&global));
        assert!(back.equals_with_tolerance(&global, TOLERANCE));
    }

    #[test]
    fn direction_maps_to_local_w_axis() {
        let direction = Vector3::new(2.0, -1.0, 0.5);
        let frame = LocalFrame::from_axis(&direction).unwrap();
        let local = frame.to_local(&direction);
        assert!(f64_approx_equal(local.x(), 0.0));
        assert!(f64_approx_equal(local.y(), 0.0));
        assert!(f64_approx_equal(local.z(), direction.length()));
    }
}
