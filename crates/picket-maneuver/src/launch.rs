//! Air-to-ground weapon release decision.

/// Decide whether a fighter should release an air-to-ground missile at a
/// radar site.
///
/// Fires only when the site is actively tracking, the fighter sits inside
/// the site's maximum effective range, and the fighter's own weapon range
/// is still *less than* the current distance — the release happens once the
/// geometry is definitively inside the engagement envelope rather than at
/// first opportunity.
pub fn should_launch_air_to_ground(
    distance_km: f64,
    site_max_effective_range_km: f64,
    site_is_tracking: bool,
    weapon_range_km: f64,
) -> bool {
    site_is_tracking
        && distance_km <= site_max_effective_range_km
        && weapon_range_km < distance_km
}
