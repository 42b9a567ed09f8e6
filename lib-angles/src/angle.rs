/// Wrap an angle in degrees to the half-open interval [-180, 180).
///
/// `libm::fmodf` keeps the sign of the dividend, so a negative remainder is
/// shifted up one full turn before the interval is re-centered. The function
/// is total and idempotent; values already inside the interval come back
/// unchanged.
///
pub fn normalize_degrees(angle_deg: f32) -> f32 {
    let mut wrapped = libm::fmodf(angle_deg + 180.0, 360.0);
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    wrapped - 180.0
}
