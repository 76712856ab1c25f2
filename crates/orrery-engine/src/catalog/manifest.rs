use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One body configuration record: immutable input data for the simulation.
/// Loaded once, before the loop starts, from JSON or a built-in table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    /// Unique identifier.
    pub name: String,
    /// Orbital radius in raw physical units (km from the orbital center).
    pub orbital_radius: f64,
    /// Body radius in raw physical units (km).
    pub radius: f64,
    /// Orbital speed in raw physical units (km/s). Negative = retrograde.
    pub orbital_speed: f64,
    /// Display color (r, g, b in 0..1). Irrelevant to the simulation.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Body this one orbits; `None` means it orbits the star.
    /// Must name a body declared earlier in the catalog.
    #[serde(default)]
    pub parent: Option<String>,
    /// Starting phase angle in radians.
    #[serde(default)]
    pub initial_phase: f64,
    /// Fixed out-of-plane offset in scene units (0 = planar orbit).
    #[serde(default)]
    pub y_offset: f64,
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Everything that can be wrong with a catalog. All of it is rejected here,
/// at load time — the simulation loop itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The JSON manifest did not parse.
    #[error("failed to parse body catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A body has no name to key the position registry with.
    #[error("body at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two bodies share a name; registry entries would clobber each other.
    #[error("duplicate body {name:?}")]
    DuplicateBody { name: String },

    /// Zero or negative orbital radius would divide the phase-angle update
    /// by zero. A body at the orbital center belongs in the star slot, not
    /// the catalog.
    #[error("body {name:?} has a non-positive orbital radius")]
    DegenerateOrbit { name: String },

    /// Zero or negative body radius breaks the framing-distance formula.
    #[error("body {name:?} has a non-positive radius")]
    DegenerateRadius { name: String },

    #[error("body {name:?}: {field} is not finite")]
    NonFinite { name: String, field: &'static str },

    /// Satellites must orbit a body declared earlier, so the registry holds
    /// the parent's position before the satellite updates.
    #[error("body {name:?} orbits {parent:?}, which is not declared before it")]
    UnknownParent { name: String, parent: String },
}

/// Validated, ordered body catalog. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    bodies: Vec<BodySpec>,
}

impl BodyCatalog {
    /// Validate an ordered list of body records.
    pub fn from_specs(bodies: Vec<BodySpec>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(bodies.len());
        for (index, spec) in bodies.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !spec.orbital_radius.is_finite() || spec.orbital_radius <= 0.0 {
                return Err(CatalogError::DegenerateOrbit {
                    name: spec.name.clone(),
                });
            }
            if !spec.radius.is_finite() || spec.radius <= 0.0 {
                return Err(CatalogError::DegenerateRadius {
                    name: spec.name.clone(),
                });
            }
            if !spec.orbital_speed.is_finite() {
                return Err(CatalogError::NonFinite {
                    name: spec.name.clone(),
                    field: "orbital_speed",
                });
            }
            if !spec.initial_phase.is_finite() {
                return Err(CatalogError::NonFinite {
                    name: spec.name.clone(),
                    field: "initial_phase",
                });
            }
            if !spec.y_offset.is_finite() {
                return Err(CatalogError::NonFinite {
                    name: spec.name.clone(),
                    field: "y_offset",
                });
            }
            if let Some(parent) = &spec.parent {
                // Also rejects self-orbits and forward references.
                if !seen.contains(parent.as_str()) {
                    return Err(CatalogError::UnknownParent {
                        name: spec.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            if !seen.insert(&spec.name) {
                return Err(CatalogError::DuplicateBody {
                    name: spec.name.clone(),
                });
            }
        }
        log::info!("loaded body catalog: {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    /// Parse and validate a catalog from a JSON array of body records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let bodies: Vec<BodySpec> = serde_json::from_str(json)?;
        Self::from_specs(bodies)
    }

    pub fn get(&self, name: &str) -> Option<&BodySpec> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate in declaration order (parents before satellites).
    pub fn iter(&self) -> impl Iterator<Item = &BodySpec> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
