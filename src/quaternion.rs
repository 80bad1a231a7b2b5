use std::ops::{Add, Sub, Mul, Div};
use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::vector::Vector3f;

/// Scalar part `w` plus vector part `v`.
///
/// `x()`, `y()` and `z()` read straight out of `v`, so the scalar and vector
/// views of the imaginary part are always the same three numbers.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Quaternion {
    pub w: f32,
    pub v: Vector3f,
}
impl Quaternion {
    pub fn new(w: f32, xi: f32, yj: f32, zk: f32) -> Self {
        Self {
            w,
            v: Vector3f::new(xi, yj, zk),
        }
    }

    /// Builds `cos(rad) + axis * sin(rad)`.
    ///
    /// The angle is used as given, not halved. `axis` should be unit length,
    /// otherwise the result is not a unit quaternion.
    pub fn from_axis_angle(rad: f32, mut axis: Vector3f) -> Self {
        axis *= rad.sin();
        Self {
            w: rad.cos(),
            v: axis,
        }
    }

    pub fn x(&self) -> f32 {
        self.v.x
    }

    pub fn y(&self) -> f32 {
        self.v.y
    }

    pub fn z(&self) -> f32 {
        self.v.z
    }

    pub fn scalar_part(&self) -> f32 {
        self.w
    }

    pub fn vector_part(&self) -> Vector3f {
        self.v
    }

    /// Hamilton product `self * rhs`. Not commutative.
    pub fn hamilton(&self, rhs: Quaternion) -> Self {
        let (w, x, y, z) = (self.w, self.x(), self.y(), self.z());
        Self::new(
            w*rhs.w - x*rhs.x() - y*rhs.y() - z*rhs.z(),
            w*rhs.x() + x*rhs.w + y*rhs.z() - z*rhs.y(),
            w*rhs.y() - x*rhs.z() + y*rhs.w + z*rhs.x(),
            w*rhs.z() + x*rhs.y() - y*rhs.x() + z*rhs.w,
        )
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            w: self.w + other.w,
            v: self.v + other.v,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            w: self.w - other.w,
            v: self.v - other.v,
        }
    }
}

// Real scalars only touch the scalar part.
impl Add<f32> for Quaternion {
    type Output = Self;

    fn add(self, other: f32) -> Self::Output {
        Self { w: self.w + other, ..self }
    }
}

impl Sub<f32> for Quaternion {
    type Output = Self;

    fn sub(self, other: f32) -> Self::Output {
        Self { w: self.w - other, ..self }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Self {
            w: self.w * other,
            v: self.v * other,
        }
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.hamilton(other)
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Self {
            w: self.w / other,
            v: self.v / other,
        }
    }
}

/// `[w, x, y, z]`
impl From<[f32; 4]> for Quaternion {
    fn from(arr: [f32; 4]) -> Quaternion {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<cgmath::Quaternion<f32>> for Quaternion {
    fn from(q: cgmath::Quaternion<f32>) -> Quaternion {
        Quaternion {
            w: q.s,
            v: q.v.into(),
        }
    }
}

impl From<Quaternion> for cgmath::Quaternion<f32> {
    fn from(q: Quaternion) -> cgmath::Quaternion<f32> {
        cgmath::Quaternion::from_sv(q.w, q.v.into())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}; {}i; {}j; {}k ]", self.w, self.x(), self.y(), self.z())
    }
}


#[cfg(test)]
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[cfg(test)]
fn assert_quat_near(a: Quaternion, b: Quaternion, epsilon: f32) {
    assert_abs_diff_eq!(a.w, b.w, epsilon = epsilon);
    assert_abs_diff_eq!(a.x(), b.x(), epsilon = epsilon);
    assert_abs_diff_eq!(a.y(), b.y(), epsilon = epsilon);
    assert_abs_diff_eq!(a.z(), b.z(), epsilon = epsilon);
}

#[test]
fn accessors_share_vector_part() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.scalar_part(), 1.0);
    assert_eq!(q.vector_part(), Vector3f::new(2.0, 3.0, 4.0));

    q.v.y = -7.0;
    assert_eq!(q.y(), -7.0);
    assert_eq!((q.x(), q.z()), (2.0, 4.0));
}

#[test]
fn basis_products() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, k * -1.0);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(i * i, minus_one);
    assert_eq!(i * j * k, minus_one);
}

#[test]
fn hamilton_matches_operator() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(-2.0, 0.5, 1.0, 3.0);

    assert_eq!(p.hamilton(q), p * q);
    assert_ne!(p * q, q * p);
}

#[test]
fn hamilton_matches_cgmath() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(-2.0, 0.5, 1.0, 3.0);

    let expected = cgmath::Quaternion::<f32>::from(p) * cgmath::Quaternion::<f32>::from(q);
    assert_eq!(p * q, Quaternion::from(expected));
}

#[test]
fn hamilton_is_associative() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(-2.0, 0.5, 1.0, 3.0);
    let r = Quaternion::new(0.5, -1.0, 2.0, -3.0);
    assert_quat_near((p * q) * r, p * (q * r), 1e-4);

    let a = Quaternion::from_axis_angle(0.3, Vector3f::new(0.0, 1.0, 0.0));
    let b = Quaternion::from_axis_angle(-1.1, Vector3f::new(1.0, 1.0, 1.0).normalize());
    let c = Quaternion::new(0.0, 0.2, -0.9, 1.7);
    assert_quat_near((a * b) * c, a * (b * c), 1e-5);
}

#[test]
fn from_axis_angle_test() {
    let q = Quaternion::from_axis_angle(std::f32::consts::FRAC_PI_4, Vector3f::new(1.0, 0.0, 0.0));

    assert_relative_eq!(q.w, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    assert_relative_eq!(q.x(), std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    assert_eq!(q.y(), 0.0);
    assert_eq!(q.z(), 0.0);
}

#[test]
fn from_axis_angle_is_unit_for_unit_axis() {
    let axis = Vector3f::new(-1.0, 2.5, 0.7).normalize();
    let angle: f32 = 1.85;
    let q = Quaternion::from_axis_angle(angle, axis);

    assert_relative_eq!(q.w, angle.cos());
    assert_abs_diff_eq!(q.vector_part().length(), angle.sin().abs(), epsilon = 1e-6);

    let norm_sq = q.w*q.w + q.v.dot(q.v);
    assert_abs_diff_eq!(norm_sq, 1.0, epsilon = 1e-5);
}

#[test]
fn from_axis_angle_leaves_axis_untouched() {
    let axis = Vector3f::new(0.0, 0.0, 1.0);
    let _ = Quaternion::from_axis_angle(1.0, axis);
    assert_eq!(axis, Vector3f::new(0.0, 0.0, 1.0));
}

#[test]
fn from_axis_angle_non_unit_axis() {
    let q = Quaternion::from_axis_angle(std::f32::consts::FRAC_PI_2, Vector3f::new(0.0, 2.0, 0.0));
    assert_abs_diff_eq!(q.y(), 2.0, epsilon = 1e-6);
}

// Rotating (0, 1, 1) by 90 degrees about x with q1 * p * q2.
#[test]
fn conjugation_rotates_point() {
    let angle = crate::angle::deg_to_rad(45.0);
    let p  = Quaternion::new(0.0, 0.0, 1.0, 1.0);
    let q1 = Quaternion::from_axis_angle(angle, Vector3f::new(1.0, 0.0, 0.0).normalize());
    let q2 = Quaternion::from_axis_angle(-angle, Vector3f::new(1.0, 0.0, 0.0));

    let result = q1 * p * q2;
    assert!(!result.w.is_nan() && !result.v.x.is_nan());

    // Expanding both products by hand with c = cos(angle), s = sin(angle).
    let (c, s) = (angle.cos(), angle.sin());
    let expected = Quaternion::new(
        0.0,
        0.0,
        c*c - s*s - 2.0*c*s,
        c*c - s*s + 2.0*c*s,
    );
    assert_quat_near(result, expected, 1e-5);
    assert_quat_near(result, Quaternion::new(0.0, 0.0, -1.0, 1.0), 1e-5);
}

#[test]
fn add_sub_test() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(0.5, -1.0, 2.0, 8.0);

    assert_eq!(p + q, Quaternion::new(1.5, 1.0, 5.0, 12.0));
    assert_eq!(p - q, Quaternion::new(0.5, 3.0, 1.0, -4.0));
}

#[test]
fn scalar_add_sub_touch_w_only() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(p + 2.0, Quaternion::new(3.0, 2.0, 3.0, 4.0));
    assert_eq!(p - 2.0, Quaternion::new(-1.0, 2.0, 3.0, 4.0));
}

#[test]
fn scale_and_divide() {
    let p = Quaternion::new(1.0, -2.0, 3.0, 4.0);

    assert_eq!(p * 1.0, p);
    assert_eq!(p * 0.0, Quaternion::default());
    assert_eq!(p * 2.0, Quaternion::new(2.0, -4.0, 6.0, 8.0));
    assert_eq!(p / 2.0, Quaternion::new(0.5, -1.0, 1.5, 2.0));
}

#[test]
fn divide_by_zero_propagates() {
    let q = Quaternion::new(1.0, -1.0, 0.0, 2.0) / 0.0;
    assert_eq!(q.w, f32::INFINITY);
    assert_eq!(q.x(), f32::NEG_INFINITY);
    assert!(q.y().is_nan());
    assert_eq!(q.z(), f32::INFINITY);
}

#[test]
fn display_test() {
    let q = Quaternion::new(0.0, -1.0, 1.5, 1.0);
    assert_eq!(q.to_string(), "[ 0; -1i; 1.5j; 1k ]");
}

#[test]
fn pod_layout() {
    let q = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
    let arr: [f32; 4] = bytemuck::cast(q);
    assert_eq!(arr, [1.0, 2.0, 3.0, 4.0]);
}
