pub mod api;
pub mod camera;
pub mod catalog;
pub mod core;
pub mod extensions;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::orrery::{Orrery, OrreryConfig};
pub use api::types::{Selection, SunSettings};
pub use camera::driver::{CameraDriver, FrameRequest};
pub use camera::rig::SmoothRig;
pub use catalog::manifest::{BodyCatalog, BodySpec, CatalogError};
pub use catalog::solar::{solar_catalog, SUN_NAME, SUN_RADIUS_KM};
pub use core::clock::FixedTimestep;
pub use core::registry::{PositionRegistry, PositionView};
pub use core::scale::{ScalePolicy, DISTANCE_SCALE_FACTOR, SIZE_SCALE_FACTOR};
pub use extensions::easing::{ease, ease_dvec3, lerp, Easing};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::framing::{FramingConfig, FramingController};
pub use systems::orbit::OrbitalEngine;
