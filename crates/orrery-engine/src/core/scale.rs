/// Scaling policy — pure constant mapping from raw physical units to scene
/// units.
///
/// Raw inputs are kilometres (orbital radii, body radii) and km/s (orbital
/// speeds). Uses f64 throughout: raw values are large (1.5e8 km for Earth's
/// orbit) and only become render-sized after scaling. Conversion to f32 is
/// the renderer's problem, outside this crate.

/// Default multiplier from raw orbital radii to scene units.
pub const DISTANCE_SCALE_FACTOR: f64 = 1e-7;
/// Default multiplier from raw body radii to scene units.
pub const SIZE_SCALE_FACTOR: f64 = 0.00015;

/// Immutable scale configuration, passed explicitly to the simulation engine
/// and the framing controller so tests can substitute alternate scales.
///
/// The angular-rate scale is deliberately absent: orbital speed is multiplied
/// by the hot-reloadable `sim_speed` on the engine, not by a fixed constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePolicy {
    /// Scene units per raw distance unit.
    pub distance_scale: f64,
    /// Scene units per raw size unit.
    pub size_scale: f64,
}

impl ScalePolicy {
    /// Orbital radius in scene units.
    pub fn scaled_orbital_radius(&self, raw: f64) -> f64 {
        raw * self.distance_scale
    }

    /// Body radius in scene units.
    pub fn scaled_radius(&self, raw: f64) -> f64 {
        raw * self.size_scale
    }
}

impl Default for ScalePolicy {
    fn default() -> Self {
        Self {
            distance_scale: DISTANCE_SCALE_FACTOR,
            size_scale: SIZE_SCALE_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_radius_scales_to_scene_units() {
        let scale = ScalePolicy::default();
        let scaled = scale.scaled_radius(6371.0);
        assert!((scaled - 0.95565).abs() < 1e-9, "scaled = {scaled}");
    }

    #[test]
    fn earth_orbit_scales_to_scene_units() {
        let scale = ScalePolicy::default();
        let scaled = scale.scaled_orbital_radius(149_600_000.0);
        assert!((scaled - 14.96).abs() < 1e-9, "scaled = {scaled}");
    }

    #[test]
    fn alternate_scales_substitute_cleanly() {
        let scale = ScalePolicy {
            distance_scale: 1.0,
            size_scale: 2.0,
        };
        assert_eq!(scale.scaled_orbital_radius(3.0), 3.0);
        assert_eq!(scale.scaled_radius(3.0), 6.0);
    }
}
