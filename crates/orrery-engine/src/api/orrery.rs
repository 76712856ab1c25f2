use glam::DVec3;

use crate::api::types::{Selection, SunSettings};
use crate::camera::driver::{CameraDriver, FrameRequest};
use crate::catalog::manifest::BodyCatalog;
use crate::core::registry::PositionView;
use crate::core::scale::ScalePolicy;
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::framing::{FramingConfig, FramingController};
use crate::systems::orbit::OrbitalEngine;

/// Configuration for the orrery, provided by the embedder.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Fixed simulation timestep in seconds (default: 1/60).
    pub fixed_dt: f64,
    /// Initial simulation-speed multiplier (default: 1.0, real-time rates).
    pub sim_speed: f64,
    /// Raw-unit to scene-unit mapping.
    pub scale: ScalePolicy,
    /// Camera framing tunables.
    pub framing: FramingConfig,
    /// The star's name and starting position.
    pub sun: SunSettings,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            sim_speed: 1.0,
            scale: ScalePolicy::default(),
            framing: FramingConfig::default(),
            sun: SunSettings::default(),
        }
    }
}

/// The assembled core: orbital engine, framing controller, selection state
/// and input queue. One `tick` runs one cooperative simulation step with the
/// ordering guarantee the framing logic relies on — every body is
/// repositioned before the controller reads the registry.
pub struct Orrery {
    catalog: BodyCatalog,
    scale: ScalePolicy,
    engine: OrbitalEngine,
    controller: FramingController,
    selection: Selection,
    input: InputQueue,
}

impl Orrery {
    /// Assemble from a validated catalog. Degenerate configurations were
    /// already rejected when the catalog was built, so this cannot fail.
    pub fn new(catalog: BodyCatalog, config: OrreryConfig) -> Self {
        let engine = OrbitalEngine::new(&catalog, &config.scale, config.sim_speed, config.sun);
        Self {
            catalog,
            scale: config.scale,
            engine,
            controller: FramingController::new(config.framing),
            selection: Selection::None,
            input: InputQueue::new(),
        }
    }

    /// Queue for the embedding UI to push selection / speed / star events.
    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Set the selection directly, bypassing the queue. `None` deselects;
    /// the star's name selects the star.
    pub fn select(&mut self, name: Option<&str>) {
        self.selection = Selection::from_name(name, &self.engine.sun().name);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sim_speed(&self) -> f64 {
        self.engine.sim_speed()
    }

    pub fn set_sim_speed(&mut self, sim_speed: f64) {
        self.engine.set_sim_speed(sim_speed);
    }

    pub fn sun(&self) -> &SunSettings {
        self.engine.sun()
    }

    pub fn set_sun_position(&mut self, position: DVec3) {
        self.engine.set_sun_position(position);
    }

    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Latest published positions. Reflects the most recent completed tick.
    pub fn positions(&self) -> PositionView<'_> {
        self.engine.positions()
    }

    /// Current phase angle of a body, radians in [0, 2π).
    pub fn phase(&self, name: &str) -> Option<f64> {
        self.engine.phase(name)
    }

    /// Run one simulation tick of `delta` simulated seconds:
    /// drain inputs → advance every body → re-evaluate camera framing
    /// against the freshly published positions.
    ///
    /// `driver` is the camera to command; pass `None` while the renderer has
    /// not attached one yet and the framing pass is deferred (nothing is
    /// recorded, so the first driven tick issues the pending framing).
    pub fn tick(
        &mut self,
        delta: f64,
        driver: Option<&mut dyn CameraDriver>,
    ) -> Option<FrameRequest> {
        for event in self.input.drain() {
            match event {
                InputEvent::Select(name) => {
                    self.selection = Selection::from_name(name.as_deref(), &self.engine.sun().name);
                }
                InputEvent::SetSimSpeed(sim_speed) => self.engine.set_sim_speed(sim_speed),
                InputEvent::SetSunPosition(position) => self.engine.set_sun_position(position),
            }
        }

        self.engine.tick(delta);

        match driver {
            Some(driver) => self.controller.reevaluate(
                &self.selection,
                self.engine.sun(),
                self.engine.positions(),
                &self.catalog,
                &self.scale,
                driver,
            ),
            None => {
                log::trace!("no camera driver attached; framing deferred");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::rig::SmoothRig;
    use crate::catalog::solar::solar_catalog;

    fn orrery() -> Orrery {
        Orrery::new(solar_catalog(), OrreryConfig::default())
    }

    #[test]
    fn selecting_before_the_first_tick_frames_on_that_tick() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();

        // The registry is still empty here; the engine pass must complete
        // before framing reads it, so this single tick both positions Earth
        // and frames it.
        orrery.select(Some("Earth"));
        let request = orrery.tick(1.0 / 60.0, Some(&mut rig)).unwrap();

        let earth = orrery.positions().get("Earth").unwrap();
        assert_eq!(request.target, earth);
        let optimal = request.distance.unwrap();
        assert!((optimal - 3.8226).abs() < 1e-4, "optimal = {optimal}");
    }

    #[test]
    fn input_queue_drives_selection_and_speed() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();

        orrery.input_mut().push(InputEvent::SetSimSpeed(600_000.0));
        orrery.input_mut().push(InputEvent::Select(Some("Sun".to_owned())));
        let request = orrery.tick(1.0 / 60.0, Some(&mut rig)).unwrap();

        assert_eq!(orrery.sim_speed(), 600_000.0);
        assert_eq!(*orrery.selection(), Selection::Star);
        assert_eq!(request.target, DVec3::ZERO);
        assert_eq!(request.distance, Some(8.0));
        assert_eq!(request.min_distance, 4.0);
    }

    #[test]
    fn missing_driver_defers_framing_until_one_attaches() {
        let mut orrery = orrery();
        orrery.select(Some("Earth"));
        assert!(orrery.tick(1.0 / 60.0, None).is_none());

        // Renderer comes up later; the pending framing goes out unchanged.
        let mut rig = SmoothRig::new();
        let request = orrery.tick(0.0, Some(&mut rig)).unwrap();
        assert_eq!(request.target, orrery.positions().get("Earth").unwrap());
    }

    #[test]
    fn deselection_returns_home() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();
        orrery.select(Some("Earth"));
        orrery.tick(1.0 / 60.0, Some(&mut rig));

        orrery.select(None);
        let request = orrery.tick(1.0 / 60.0, Some(&mut rig)).unwrap();
        let sun_pos = orrery.sun().position;
        assert_eq!(request.target, sun_pos);
        assert_eq!(request.position, Some(sun_pos + DVec3::new(30.0, 20.0, 40.0)));
        assert_eq!(request.min_distance, 5.0);
    }

    #[test]
    fn unknown_selection_is_a_noop_not_an_error() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();
        orrery.select(Some("Planet X"));
        assert!(orrery.tick(1.0 / 60.0, Some(&mut rig)).is_none());
    }

    #[test]
    fn frozen_simulation_issues_no_duplicate_commands() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();
        orrery.set_sim_speed(0.0);
        orrery.select(Some("Earth"));

        assert!(orrery.tick(1.0 / 60.0, Some(&mut rig)).is_some());
        // Nothing moves and the selection is unchanged — later ticks are
        // exact duplicates and are suppressed.
        assert!(orrery.tick(1.0 / 60.0, Some(&mut rig)).is_none());
        assert!(orrery.tick(1.0 / 60.0, Some(&mut rig)).is_none());
    }

    #[test]
    fn moon_stays_near_earth_through_the_full_stack() {
        let mut orrery = orrery();
        let mut rig = SmoothRig::new();
        orrery.set_sim_speed(600_000.0);
        for _ in 0..120 {
            orrery.tick(1.0 / 60.0, Some(&mut rig));
        }
        let view = orrery.positions();
        let earth = view.get("Earth").unwrap();
        let moon = view.get("Moon").unwrap();
        let scaled_moon_orbit = 384_400.0 * 1e-7;
        assert!(((moon - earth).length() - scaled_moon_orbit).abs() < 1e-9);
    }
}
