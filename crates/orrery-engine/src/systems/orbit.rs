/// Orbital simulation engine — advances phase angles, derives positions.
///
/// Orbits are fixed circles; speed is configured per body, not derived from
/// gravity. The angular rate divides linear speed by orbital radius so that
/// larger orbits do not artificially speed up. All math is f64.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::api::types::SunSettings;
use crate::catalog::manifest::BodyCatalog;
use crate::core::registry::{PositionRegistry, PositionView};
use crate::core::scale::ScalePolicy;

/// Per-body mutable simulation state, resolved from a catalog record.
struct OrbitState {
    name: String,
    /// Orbital radius in scene units. Always > 0 (catalog invariant).
    orbital_radius: f64,
    /// Raw angular-rate input; multiplied by the engine's sim speed each tick.
    orbital_speed: f64,
    /// Index of the parent body, always earlier in the list, or `None` for a
    /// body orbiting the star.
    parent: Option<usize>,
    /// Fixed out-of-plane offset in scene units.
    y_offset: f64,
    /// Current phase angle, radians, kept in [0, 2π).
    phase: f64,
}

/// Owns all per-body orbital state, the position registry (sole writer) and
/// the hot-reloadable simulation-speed multiplier.
pub struct OrbitalEngine {
    bodies: Vec<OrbitState>,
    sim_speed: f64,
    sun: SunSettings,
    registry: PositionRegistry,
}

impl OrbitalEngine {
    /// Resolve a validated catalog into runtime state. The catalog guarantees
    /// positive orbital radii and parent-before-child ordering, so nothing
    /// here can fail.
    pub fn new(catalog: &BodyCatalog, scale: &ScalePolicy, sim_speed: f64, sun: SunSettings) -> Self {
        let mut bodies: Vec<OrbitState> = Vec::with_capacity(catalog.len());
        for spec in catalog.iter() {
            let parent = spec
                .parent
                .as_deref()
                .and_then(|p| bodies.iter().position(|b| b.name == p));
            bodies.push(OrbitState {
                name: spec.name.clone(),
                orbital_radius: scale.scaled_orbital_radius(spec.orbital_radius),
                orbital_speed: spec.orbital_speed,
                parent,
                y_offset: spec.y_offset,
                phase: spec.initial_phase.rem_euclid(TAU),
            });
        }
        Self {
            bodies,
            sim_speed,
            sun,
            registry: PositionRegistry::new(),
        }
    }

    /// Global simulation-speed multiplier. Zero freezes every orbit; a
    /// negative value runs them backwards.
    pub fn sim_speed(&self) -> f64 {
        self.sim_speed
    }

    pub fn set_sim_speed(&mut self, sim_speed: f64) {
        self.sim_speed = sim_speed;
    }

    pub fn sun(&self) -> &SunSettings {
        &self.sun
    }

    pub fn set_sun_position(&mut self, position: DVec3) {
        self.sun.position = position;
    }

    /// Read-only view of the latest published positions.
    pub fn positions(&self) -> PositionView<'_> {
        self.registry.view()
    }

    /// Current phase angle of a body, radians in [0, 2π).
    pub fn phase(&self, name: &str) -> Option<f64> {
        self.bodies.iter().find(|b| b.name == name).map(|b| b.phase)
    }

    /// Advance every body by `delta` simulated seconds and publish the new
    /// positions. The whole pass completes before the caller can take a
    /// registry view, which is what keeps the framing controller from ever
    /// reading a stale position for a just-selected body.
    pub fn tick(&mut self, delta: f64) {
        for i in 0..self.bodies.len() {
            let center = match self.bodies[i].parent {
                // Parent is earlier in the list, so its position for this
                // tick is already published.
                Some(p) => self
                    .registry
                    .get(&self.bodies[p].name)
                    .unwrap_or(self.sun.position),
                None => self.sun.position,
            };
            let body = &mut self.bodies[i];
            let step = (delta * body.orbital_speed * self.sim_speed) / body.orbital_radius;
            // Wrap after every update: equivalent under cos/sin, but keeps
            // the angle small so precision does not degrade over long runs.
            body.phase = (body.phase + step).rem_euclid(TAU);
            let position = DVec3::new(
                center.x + body.orbital_radius * body.phase.cos(),
                center.y + body.y_offset,
                center.z + body.orbital_radius * body.phase.sin(),
            );
            self.registry.publish(&body.name, position);
        }
    }
}
