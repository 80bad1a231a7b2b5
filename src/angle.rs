/// Degrees per radian.
pub const RAD_MULTIPLIER: f32 = 180.0 / std::f32::consts::PI;

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * RAD_MULTIPLIER
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg / RAD_MULTIPLIER
}


#[cfg(test)]
use approx::assert_relative_eq;

#[test]
fn deg_rad_test() {
    assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI, epsilon = 1e-6);
    assert_relative_eq!(deg_to_rad(45.0), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
    assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0, epsilon = 1e-4);
    assert_eq!(deg_to_rad(0.0), 0.0);
}

#[test]
fn negative_angles() {
    assert_relative_eq!(deg_to_rad(-45.0), -std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
    assert_relative_eq!(rad_to_deg(deg_to_rad(-270.0)), -270.0, epsilon = 1e-4);
}
