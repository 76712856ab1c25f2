/// Built-in solar-system data — real orbital radii (km), body radii (km) and
/// mean orbital speeds (km/s), with display colors.
///
/// At the default scale policy this puts Earth at 14.96 scene units from the
/// star with a rendered radius of ~0.956.

use super::manifest::{BodyCatalog, BodySpec};

/// Name of the star. The star is not a catalog body: it has a fixed,
/// externally configured position and no orbit.
pub const SUN_NAME: &str = "Sun";

/// Raw radius of the Sun in km, for embedders that render it.
pub const SUN_RADIUS_KM: f64 = 695_700.0;

fn body(
    name: &str,
    orbital_radius: f64,
    radius: f64,
    orbital_speed: f64,
    color: [f32; 3],
) -> BodySpec {
    BodySpec {
        name: name.to_owned(),
        orbital_radius,
        radius,
        orbital_speed,
        color,
        parent: None,
        initial_phase: 0.0,
        y_offset: 0.0,
    }
}

/// The eight planets plus the Moon, in declaration order (Earth before Moon
/// so the satellite finds its parent in the registry).
pub fn solar_catalog() -> BodyCatalog {
    let mut moon = body("Moon", 384_400.0, 1_737.4, 1.022, [0.70, 0.70, 0.70]);
    moon.parent = Some("Earth".to_owned());

    let specs = vec![
        body("Mercury", 57_900_000.0, 2_439.7, 47.87, [0.60, 0.55, 0.50]),
        body("Venus", 108_200_000.0, 6_051.8, 35.02, [0.90, 0.75, 0.40]),
        body("Earth", 149_600_000.0, 6_371.0, 29.78, [0.20, 0.40, 0.80]),
        moon,
        body("Mars", 227_900_000.0, 3_389.5, 24.08, [0.80, 0.30, 0.15]),
        body("Jupiter", 778_600_000.0, 69_911.0, 13.07, [0.80, 0.70, 0.50]),
        body("Saturn", 1_433_500_000.0, 58_232.0, 9.69, [0.85, 0.75, 0.50]),
        body("Uranus", 2_872_500_000.0, 25_362.0, 6.81, [0.50, 0.75, 0.85]),
        body("Neptune", 4_495_100_000.0, 24_622.0, 5.43, [0.25, 0.35, 0.80]),
    ];
    BodyCatalog::from_specs(specs).expect("built-in catalog is valid")
}
