use super::vector::Vector3;
use nalgebra::Point3;

/// Signed volume spanned by four points, `(b - a) · ((c - a) × (d - a))`.
///
/// Equal to the determinant of the 4x4 matrix whose rows are `[1, x, y, z]` for each
/// point in order. Its sign is the handedness of the arrangement: mirroring the
/// points, or swapping any two of them, negates it. Coplanar points give zero.
pub fn chiral_volume(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    let ab = Vector3::between(a, b);
    let ac = Vector3::between(a, c);
    let ad = Vector3::between(a, d);
    ab.scalar_triple_product(&ac, &ad)
}
