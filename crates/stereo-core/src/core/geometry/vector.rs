use nalgebra::{Point3, Rotation3, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Default absolute tolerance shared by every tolerance-based comparison in the kernel.
///
/// Used for zero-length detection, colinearity and component-wise equality unless a
/// caller passes an explicit tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorError {
    #[error("Cannot normalize a zero-length vector")]
    ZeroVector,

    #[error("Component index {index} is out of range (expected 0..=2)")]
    IndexOutOfRange { index: usize },

    #[error("A 3-D vector needs exactly 3 components, found {found}")]
    WrongLength { found: usize },
}

/// An immutable three-component vector of real numbers.
///
/// Every algebraic operation returns a new value and leaves its operands untouched.
/// The only mutators are [`Vector3::set_element_at`] and [`Vector3::normalize`], which
/// change the receiver in place.
///
/// Equality is tolerance-based ([`Vector3::equals_with_tolerance`]); the type
/// deliberately does not implement `PartialEq` on exact floating-point components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    xyz: nalgebra::Vector3<f64>,
}

impl Vector3 {
    /// Creates a vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: nalgebra::Vector3::new(x, y, z),
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn from_array(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }

    /// Creates a vector from a slice that must hold exactly three components.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::WrongLength`] if the slice length is not 3.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match components {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(VectorError::WrongLength {
                found: components.len(),
            }),
        }
    }

    /// The vector from the coordinate origin to `point`.
    pub fn from_point(point: &Point3<f64>) -> Self {
        Self { xyz: point.coords }
    }

    /// The displacement vector `to - from` between two positions.
    pub fn between(from: &Point3<f64>, to: &Point3<f64>) -> Self {
        Self { xyz: to - from }
    }

    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.xyz.x, self.xyz.y, self.xyz.z]
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for any index outside `0..=2`.
    pub fn element_at(&self, index: usize) -> Result<f64, VectorError> {
        self.xyz
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index })
    }

    /// Overwrites the component at `index`. Mutates the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] for any index outside `0..=2`;
    /// the vector is left unchanged.
    pub fn set_element_at(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let slot = self
            .xyz
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Euclidean norm; `0.0` for the zero vector.
    pub fn length(&self) -> f64 {
        self.xyz.norm()
    }

    /// Whether the length is below `tolerance`.
    ///
    /// This is the gate for every operation that needs a direction.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.length() < tolerance
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    pub fn longer_than(&self, other: &Vector3) -> bool {
        self.length() > other.length()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.xyz.dot(&other.xyz)
    }

    /// Cross product. Colinear operands give the zero vector.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Self {
            xyz: self.xyz.cross(&other.xyz),
        }
    }

    /// `self · (b × c)`.
    ///
    /// Positive when `self`, `b`, `c` form a right-handed set, negative when they form
    /// a left-handed one, and zero when they are coplanar. Swapping any two operands
    /// flips the sign; a cyclic rotation of the three leaves it unchanged.
    pub fn scalar_triple_product(&self, b: &Vector3, c: &Vector3) -> f64 {
        self.dot(&b.cross(c))
    }

    pub fn plus(&self, other: &Vector3) -> Vector3 {
        Self {
            xyz: self.xyz + other.xyz,
        }
    }

    pub fn subtract(&self, other: &Vector3) -> Vector3 {
        Self {
            xyz: self.xyz - other.xyz,
        }
    }

    pub fn multiply_by(&self, factor: f64) -> Vector3 {
        Self {
            xyz: self.xyz * factor,
        }
    }

    pub fn negate(&self) -> Vector3 {
        Self { xyz: -self.xyz }
    }

    /// Scales the receiver to unit length in place.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] if the length is below [`DEFAULT_TOLERANCE`].
    /// The receiver is left unchanged in that case.
    pub fn normalize(&mut self) -> Result<(), VectorError> {
        if self.is_zero() {
            return Err(VectorError::ZeroVector);
        }
        let length = self.length();
        self.xyz /= length;
        Ok(())
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(&self) -> Option<Vector3> {
        let mut unit = *self;
        unit.normalize().ok().map(|_| unit)
    }

    /// Projection of `self` onto the direction of `other`.
    ///
    /// Returns `None` if either vector has zero length.
    pub fn project_onto(&self, other: &Vector3) -> Option<Vector3> {
        if self.is_zero() {
            return None;
        }
        let direction = other.normalized()?;
        Some(direction.multiply_by(self.dot(&direction)))
    }

    /// Unsigned angle in radians, in `[0, π]`.
    ///
    /// Returns `None` if either vector has zero length.
    pub fn angle_made_with(&self, other: &Vector3) -> Option<f64> {
        let a = self.normalized()?;
        let b = other.normalized()?;
        Some(a.dot(&b).clamp(-1.0, 1.0).acos())
    }

    /// Whether the cross product vanishes relative to the operands' lengths, so the
    /// answer does not depend on the scale of either vector. Vacuously true if either
    /// vector is zero.
    pub fn is_colinear_with(&self, other: &Vector3) -> bool {
        self.cross(other).length() <= DEFAULT_TOLERANCE * self.length() * other.length()
    }

    /// A fixed reference axis guaranteed not to be colinear with `self`.
    ///
    /// The X axis unless `self` is colinear with it, in which case the Y axis. A zero
    /// vector is colinear with everything, so it gets the Y axis.
    pub fn non_colinear_vector(&self) -> Vector3 {
        if self.is_colinear_with(&Vector3::x_axis()) {
            Vector3::y_axis()
        } else {
            Vector3::x_axis()
        }
    }

    /// A unit vector perpendicular to `self`, or the zero vector if `self` is zero.
    pub fn perpendicular_vector(&self) -> Vector3 {
        self.cross(&self.non_colinear_vector())
            .normalized()
            .unwrap_or_default()
    }

    /// Rotates the vector about `axis` by `angle_degrees` (right-hand rule).
    ///
    /// Returns `None` if the axis has zero length.
    pub fn rotated_about(&self, axis: &Vector3, angle_degrees: f64) -> Option<Vector3> {
        let axis = axis.normalized()?;
        let rotation = Rotation3::from_axis_angle(
            &Unit::new_unchecked(axis.xyz),
            angle_degrees.to_radians(),
        );
        Some(self.transform(&rotation))
    }

    pub fn transform(&self, rotation: &Rotation3<f64>) -> Vector3 {
        Self {
            xyz: rotation * self.xyz,
        }
    }

    /// True iff every component differs from `other`'s by at most `eps`.
    pub fn equals_with_tolerance(&self, other: &Vector3, eps: f64) -> bool {
        self.xyz
            .iter()
            .zip(other.xyz.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn is_equal_to(&self, other: &Vector3) -> bool {
        self.equals_with_tolerance(other, DEFAULT_TOLERANCE)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(xyz: [f64; 3]) -> Self {
        Self::from_array(xyz)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(xyz: nalgebra::Vector3<f64>) -> Self {
        Self { xyz }
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.xyz
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        self.plus(&rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        self.subtract(&rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.negate()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, factor: f64) -> Vector3 {
        self.multiply_by(factor)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.xyz.x, self.xyz.y, self.xyz.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn sample_vectors() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.5, 4.0, 1.5),
            Vector3::new(2.0, -1.0, 0.25),
            Vector3::new(0.0, 0.0, 7.0),
            Vector3::new(-3.0, -3.0, 1.0),
        ]
    }

    #[test]
    fn cross_of_x_and_y_is_z() {
        let z = Vector3::x_axis().cross(&Vector3::y_axis());
        assert!(z.is_equal_to(&Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn dot_of_orthogonal_axes_is_zero() {
        assert_eq!(Vector3::x_axis().dot(&Vector3::y_axis()), 0.0);
    }

    #[test]
    fn cross_of_colinear_vectors_is_zero_vector() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = v.multiply_by(-2.5);
        assert!(v.cross(&w).is_zero());
    }

    #[test]
    fn cross_product_is_orthogonal_to_both_operands() {
        for v in sample_vectors() {
            for w in sample_vectors() {
                if v.is_colinear_with(&w) {
                    continue;
                }
                let c = v.cross(&w);
                assert!(f64_approx_equal(c.dot(&v), 0.0));
                assert!(f64_approx_equal(c.dot(&w), 0.0));
            }
        }
    }

    #[test]
    fn length_of_zero_vector_is_zero() {
        assert_eq!(Vector3::zero().length(), 0.0);
        assert!(f64_approx_equal(Vector3::new(3.0, 4.0, 0.0).length(), 5.0));
    }

    #[test]
    fn is_zero_within_respects_custom_tolerance() {
        let tiny = Vector3::new(1e-4, 0.0, 0.0);
        assert!(!tiny.is_zero());
        assert!(tiny.is_zero_within(1e-3));
    }

    #[test]
    fn normalize_yields_unit_length() {
        for mut v in sample_vectors() {
            v.normalize().unwrap();
            assert!(f64_approx_equal(v.length(), 1.0));
        }
    }

    #[test]
    fn normalize_zero_vector_fails_and_leaves_vector_unchanged() {
        let mut v = Vector3::zero();
        assert_eq!(v.normalize(), Err(VectorError::ZeroVector));
        assert!(v.is_equal_to(&Vector3::zero()));
    }

    #[test]
    fn normalized_does_not_mutate_receiver() {
        let v = Vector3::new(0.0, 2.0, 0.0);
        let unit = v.normalized().unwrap();
        assert!(unit.is_equal_to(&Vector3::y_axis()));
        assert!(f64_approx_equal(v.length(), 2.0));
        assert!(Vector3::zero().normalized().is_none());
    }

    #[test]
    fn scalar_triple_product_of_right_handed_axes_is_one() {
        let stp = Vector3::x_axis().scalar_triple_product(&Vector3::y_axis(), &Vector3::z_axis());
        assert!(f64_approx_equal(stp, 1.0));
    }

    #[test]
    fn scalar_triple_product_flips_sign_under_any_swap() {
        let a = Vector3::new(1.0, 0.2, -0.3);
        let b = Vector3::new(0.1, 1.5, 0.4);
        let c = Vector3::new(-0.6, 0.3, 2.0);
        let reference = a.scalar_triple_product(&b, &c);
        assert!(reference.abs() > 0.1);

        assert!(f64_approx_equal(b.scalar_triple_product(&a, &c), -reference));
        assert!(f64_approx_equal(c.scalar_triple_product(&b, &a), -reference));
        assert!(f64_approx_equal(a.scalar_triple_product(&c, &b), -reference));
    }

    #[test]
    fn scalar_triple_product_is_invariant_under_cyclic_rotation() {
        let a = Vector3::new(1.0, 0.2, -0.3);
        let b = Vector3::new(0.1, 1.5, 0.4);
        let c = Vector3::new(-0.6, 0.3, 2.0);
        let reference = a.scalar_triple_product(&b, &c);

        assert!(f64_approx_equal(b.scalar_triple_product(&c, &a), reference));
        assert!(f64_approx_equal(c.scalar_triple_product(&a, &b), reference));
    }

    #[test]
    fn scalar_triple_product_of_coplanar_vectors_is_zero() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let c = Vector3::new(3.0, -2.0, 0.0);
        assert!(f64_approx_equal(a.scalar_triple_product(&b, &c), 0.0));
    }

    #[test]
    fn project_onto_uses_direction_of_target() {
        let v = Vector3::new(3.0, 4.0, 5.0);
        let p = v.project_onto(&Vector3::new(10.0, 0.0, 0.0)).unwrap();
        assert!(p.is_equal_to(&Vector3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn project_onto_zero_vector_has_no_answer() {
        let v = Vector3::new(3.0, 4.0, 5.0);
        assert!(v.project_onto(&Vector3::zero()).is_none());
        assert!(Vector3::zero().project_onto(&v).is_none());
    }

    #[test]
    fn angle_made_with_is_unsigned() {
        let x = Vector3::x_axis();
        assert!(f64_approx_equal(x.angle_made_with(&Vector3::y_axis()).unwrap(), FRAC_PI_2));
        assert!(f64_approx_equal(x.angle_made_with(&x.negate()).unwrap(), PI));
        assert!(f64_approx_equal(x.angle_made_with(&x.multiply_by(4.0)).unwrap(), 0.0));
    }

    #[test]
    fn angle_made_with_zero_vector_has_no_answer() {
        assert!(Vector3::x_axis().angle_made_with(&Vector3::zero()).is_none());
        assert!(Vector3::zero().angle_made_with(&Vector3::x_axis()).is_none());
    }

    #[test]
    fn colinearity_is_vacuous_for_zero_vectors() {
        let v = Vector3::new(1.0, 1.0, 0.0);
        assert!(v.is_colinear_with(&Vector3::zero()));
        assert!(Vector3::zero().is_colinear_with(&v));
        assert!(v.is_colinear_with(&v.multiply_by(-3.0)));
        assert!(!v.is_colinear_with(&Vector3::z_axis()));
    }

    #[test]
    fn colinearity_does_not_depend_on_scale() {
        let a = Vector3::new(1e-6, 0.0, 0.0);
        let b = Vector3::new(0.0, 1e-6, 0.0);
        assert!(!a.is_colinear_with(&b));
        assert!(a.is_colinear_with(&a.multiply_by(3.0)));

        let big = Vector3::new(1e8, 1e8, 0.0);
        assert!(big.is_colinear_with(&Vector3::new(1.0, 1.0, 0.0)));
        assert!(!big.is_colinear_with(&Vector3::new(1.0, 1.0 + 1e-6, 0.0)));
    }

    #[test]
    fn non_colinear_vector_prefers_x_axis() {
        let v = Vector3::new(0.0, 1.0, 1.0);
        assert!(v.non_colinear_vector().is_equal_to(&Vector3::x_axis()));
    }

    #[test]
    fn non_colinear_vector_falls_back_to_y_axis() {
        assert!(Vector3::new(-2.0, 0.0, 0.0)
            .non_colinear_vector()
            .is_equal_to(&Vector3::y_axis()));
        assert!(Vector3::zero()
            .non_colinear_vector()
            .is_equal_to(&Vector3::y_axis()));
    }

    #[test]
    fn perpendicular_vector_is_unit_and_orthogonal() {
        for v in sample_vectors() {
            let p = v.perpendicular_vector();
            assert!(f64_approx_equal(p.length(), 1.0));
            assert!(f64_approx_equal(p.dot(&v), 0.0));
        }
    }

    #[test]
    fn perpendicular_vector_is_deterministic() {
        let v = Vector3::new(0.3, -1.2, 0.7);
        assert!(v.perpendicular_vector().is_equal_to(&v.perpendicular_vector()));
    }

    #[test]
    fn perpendicular_of_zero_vector_is_zero() {
        assert!(Vector3::zero().perpendicular_vector().is_zero());
    }

    #[test]
    fn element_access_is_bounds_checked() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.element_at(0), Ok(1.0));
        assert_eq!(v.element_at(2), Ok(3.0));
        assert_eq!(v.element_at(3), Err(VectorError::IndexOutOfRange { index: 3 }));

        v.set_element_at(1, -5.0).unwrap();
        assert_eq!(v.y(), -5.0);
        assert_eq!(
            v.set_element_at(7, 0.0),
            Err(VectorError::IndexOutOfRange { index: 7 })
        );
        assert!(v.is_equal_to(&Vector3::new(1.0, -5.0, 3.0)));
    }

    #[test]
    fn equals_with_tolerance_compares_each_component() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.05, 2.0, 2.96);
        assert!(a.equals_with_tolerance(&b, 0.05 + 1e-12));
        assert!(!a.equals_with_tolerance(&b, 0.04));
        assert!(!a.is_equal_to(&b));
    }

    #[test]
    fn from_slice_requires_three_components() {
        assert!(Vector3::from_slice(&[1.0, 2.0, 3.0]).is_ok());
        assert_eq!(
            Vector3::from_slice(&[1.0, 2.0]).unwrap_err(),
            VectorError::WrongLength { found: 2 }
        );
    }

    #[test]
    fn between_points_is_difference_of_positions() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(2.0, 3.0, -1.0);
        assert!(Vector3::between(&p, &q).is_equal_to(&Vector3::new(1.0, 2.0, -2.0)));
        assert!(Vector3::from_point(&q).is_equal_to(&Vector3::new(2.0, 3.0, -1.0)));
    }

    #[test]
    fn arithmetic_does_not_mutate_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        let sum = a + b;
        let diff = a - b;
        let scaled = a * 2.0;
        assert!(sum.is_equal_to(&Vector3::new(1.5, 2.5, 3.5)));
        assert!(diff.is_equal_to(&Vector3::new(0.5, 1.5, 2.5)));
        assert!(scaled.is_equal_to(&Vector3::new(2.0, 4.0, 6.0)));
        assert!((-a).is_equal_to(&Vector3::new(-1.0, -2.0, -3.0)));
        assert!(a.is_equal_to(&Vector3::new(1.0, 2.0, 3.0)));
        assert!(a.longer_than(&b));
    }

    #[test]
    fn rotated_about_z_by_ninety_degrees_maps_x_to_y() {
        let rotated = Vector3::x_axis()
            .rotated_about(&Vector3::new(0.0, 0.0, 5.0), 90.0)
            .unwrap();
        assert!(rotated.equals_with_tolerance(&Vector3::y_axis(), TOLERANCE));
    }

    #[test]
    fn rotated_about_zero_axis_has_no_answer() {
        assert!(Vector3::x_axis().rotated_about(&Vector3::zero(), 45.0).is_none());
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
