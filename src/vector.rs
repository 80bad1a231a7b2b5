use std::ops::{Neg, Add, AddAssign, Sub, Mul, MulAssign, Div};
use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A point or free vector in 3D space.
///
/// Nothing is checked: degenerate inputs (dividing by zero, normalizing the
/// zero vector) come back as `NaN`/`inf` components.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Vector3f {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn length(&self) -> f32 {
        (self.x*self.x + self.y*self.y + self.z*self.z).sqrt()
    }

    pub fn dot(&self, vec: Vector3f) -> f32 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, vec: Vector3f) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    /// Returns `self / self.length()`. The zero vector yields `NaN` components.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Angle between two vectors in radians.
    pub fn angle_between(&self, vec: Vector3f) -> f32 {
        ((self.dot(vec) / vec.length()) / self.length()).acos()
    }

    /// Accumulates `vec` the way the original `+=` did, adding `vec.x` into
    /// `z` instead of `vec.z`. Use `+=` for correct accumulation.
    pub fn add_assign_reference(&mut self, vec: Vector3f) {
        self.x += vec.x;
        self.y += vec.y;
        self.z += vec.x;
    }
}

impl Neg for Vector3f {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3f {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3f {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3f {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vector3f {
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl MulAssign<f32> for Vector3f {
    fn mul_assign(&mut self, other: f32) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}

impl Div<f32> for Vector3f {
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from(arr: [f32; 3]) -> Vector3f {
        Vector3f::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vector3f> for [f32; 3] {
    fn from(vec: Vector3f) -> [f32; 3] {
        [vec.x, vec.y, vec.z]
    }
}

impl From<cgmath::Vector3<f32>> for Vector3f {
    fn from(vec: cgmath::Vector3<f32>) -> Vector3f {
        Vector3f::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3f> for cgmath::Vector3<f32> {
    fn from(vec: Vector3f) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}; {}; {} ]", self.x, self.y, self.z)
    }
}


#[cfg(test)]
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn cross_test() {
    let v  = Vector3f::new(4.0, 3.0, 6.0);
    let v2 = Vector3f::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vector3f::new(-45.0, 0.0, 30.0));
}

#[test]
fn cross_anticommutes() {
    let v  = Vector3f::new(1.5, -2.0, 0.25);
    let v2 = Vector3f::new(-3.0, 0.5, 7.0);

    assert_eq!(v.cross(v2), -v2.cross(v));
}

#[test]
fn dot_test() {
    let v  = Vector3f::new(4.0, 3.0, 6.0);
    let v2 = Vector3f::new(2.0, 9.0, 3.0);

    assert!(v.dot(v2) == 53.0);
    assert!(v2.dot(v) == 53.0);
}

#[test]
fn normalize_test() {
    let v = Vector3f::new(4.0, 3.0, 6.0);
    assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);

    let v = Vector3f::new(-0.001, 250.0, 12.5);
    assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
}

#[test]
fn normalize_zero_is_nan() {
    let n = Vector3f::zero().normalize();
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn divide_by_zero_propagates() {
    let v = Vector3f::new(1.0, -1.0, 0.0) / 0.0;
    assert_eq!(v.x, f32::INFINITY);
    assert_eq!(v.y, f32::NEG_INFINITY);
    assert!(v.z.is_nan());
}

#[test]
fn scale_identity_and_zero() {
    let v = Vector3f::new(4.0, -3.0, 6.5);
    assert_eq!(v * 1.0, v);
    assert_eq!(v * 0.0, Vector3f::zero());
}

#[test]
fn add_sub_test() {
    let v  = Vector3f::new(1.0, 2.0, 3.0);
    let v2 = Vector3f::new(10.0, 20.0, 30.0);

    assert_eq!(v + v2, Vector3f::new(11.0, 22.0, 33.0));
    assert_eq!(v2 - v, Vector3f::new(9.0, 18.0, 27.0));
}

#[test]
fn add_assign_accumulates_componentwise() {
    let mut v = Vector3f::new(1.0, 2.0, 3.0);
    v += Vector3f::new(10.0, 20.0, 30.0);
    assert_eq!(v, Vector3f::new(11.0, 22.0, 33.0));
}

// Differs from `+=` on purpose: rhs.x lands in z.
#[test]
fn add_assign_reference_adds_x_into_z() {
    let mut v = Vector3f::new(1.0, 2.0, 3.0);
    v.add_assign_reference(Vector3f::new(10.0, 20.0, 30.0));
    assert_eq!(v, Vector3f::new(11.0, 22.0, 13.0));
}

#[test]
fn mul_assign_test() {
    let mut v = Vector3f::new(1.0, -2.0, 0.5);
    v *= 4.0;
    assert_eq!(v, Vector3f::new(4.0, -8.0, 2.0));
}

#[test]
fn angle_between_test() {
    let x = Vector3f::new(1.0, 0.0, 0.0);
    let y = Vector3f::new(0.0, 3.0, 0.0);

    assert_relative_eq!(x.angle_between(y), std::f32::consts::FRAC_PI_2);
    assert_eq!(x.angle_between(x * 2.0), 0.0);

    let diag = Vector3f::new(1.0, 1.0, 0.0);
    assert_relative_eq!(x.angle_between(diag), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
}

#[test]
fn display_test() {
    let v = Vector3f::new(1.0, -2.5, 0.0);
    assert_eq!(v.to_string(), "[ 1; -2.5; 0 ]");
}

#[test]
fn pod_layout() {
    let v = Vector3f::new(1.0, 2.0, 3.0);
    let arr: [f32; 3] = bytemuck::cast(v);
    assert_eq!(arr, [1.0, 2.0, 3.0]);
    assert_eq!(bytemuck::bytes_of(&v).len(), 12);
}

#[test]
fn cgmath_interop() {
    let v = Vector3f::new(4.0, 3.0, 6.0);
    let v2 = Vector3f::new(2.0, 9.0, 3.0);

    let expected = cgmath::Vector3::<f32>::from(v).cross(v2.into());
    assert_eq!(v.cross(v2), Vector3f::from(expected));
}
