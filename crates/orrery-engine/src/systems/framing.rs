/// Camera framing controller — translates selection changes into camera
/// target/distance commands.
///
/// A three-state machine driven purely by the current selection value:
/// unselected (home framing on the star), star selected (fixed close-up),
/// body selected (distance derived from the body's scaled radius). Runs once
/// per tick, strictly after the orbital engine's pass, so it always reads
/// this tick's positions.

use glam::DVec3;

use crate::api::types::{Selection, SunSettings};
use crate::camera::driver::{CameraDriver, FrameRequest};
use crate::catalog::manifest::BodyCatalog;
use crate::core::registry::PositionView;
use crate::core::scale::ScalePolicy;

/// Tunables for the framing state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingConfig {
    /// Multiplier from a body's scaled radius to its framing distance, so a
    /// framed body occupies a consistent portion of the view.
    pub base_distance_factor: f64,
    /// Fixed dolly distance when the star is selected.
    pub star_distance: f64,
    /// Tighter min-distance bound while the star is selected.
    pub star_min_distance: f64,
    /// Min-distance reset when nothing is selected.
    pub default_min_distance: f64,
    /// Isometric camera offset from the star in the unselected state,
    /// applied additively so the viewing angle survives a moving star.
    pub reset_offset: DVec3,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            base_distance_factor: 4.0,
            star_distance: 8.0,
            star_min_distance: 4.0,
            default_min_distance: 5.0,
            reset_offset: DVec3::new(30.0, 20.0, 40.0),
        }
    }
}

/// Re-evaluates framing whenever invoked and issues the resulting commands.
/// Identical consecutive requests are suppressed; a selected body that keeps
/// moving still re-issues every tick because its target changed.
pub struct FramingController {
    config: FramingConfig,
    last_issued: Option<FrameRequest>,
}

impl FramingController {
    pub fn new(config: FramingConfig) -> Self {
        Self {
            config,
            last_issued: None,
        }
    }

    /// Compute the framing for the current selection and issue it to the
    /// driver. Returns the issued request, or `None` when nothing was issued
    /// (duplicate of the previous request, or the selected body has no
    /// published position yet — a benign race resolved on a later tick).
    pub fn reevaluate(
        &mut self,
        selection: &Selection,
        sun: &SunSettings,
        positions: PositionView<'_>,
        catalog: &BodyCatalog,
        scale: &ScalePolicy,
        driver: &mut dyn CameraDriver,
    ) -> Option<FrameRequest> {
        let request = match selection {
            Selection::None => FrameRequest {
                target: sun.position,
                position: Some(sun.position + self.config.reset_offset),
                distance: None,
                min_distance: self.config.default_min_distance,
            },
            Selection::Star => FrameRequest {
                target: DVec3::ZERO,
                position: None,
                distance: Some(self.config.star_distance),
                min_distance: self.config.star_min_distance,
            },
            Selection::Body(name) => {
                let Some(target) = positions.get(name) else {
                    log::trace!("framing: no published position for {name:?} yet");
                    return None;
                };
                let Some(spec) = catalog.get(name) else {
                    log::trace!("framing: {name:?} is not in the catalog");
                    return None;
                };
                let optimal = scale.scaled_radius(spec.radius) * self.config.base_distance_factor;
                FrameRequest {
                    target,
                    position: None,
                    distance: Some(optimal),
                    min_distance: optimal / 2.0,
                }
            }
        };

        if self.last_issued.as_ref() == Some(&request) {
            return None;
        }
        log::debug!(
            "framing: target {:?}, distance {:?}, min {}",
            request.target,
            request.distance,
            request.min_distance
        );
        request.issue(driver);
        self.last_issued = Some(request.clone());
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::manifest::BodySpec;
    use crate::core::registry::PositionRegistry;

    /// Records every driver call for assertions.
    #[derive(Debug, Default)]
    struct RecordingDriver {
        targets: Vec<(DVec3, bool)>,
        positions: Vec<(DVec3, bool)>,
        dollies: Vec<(f64, bool)>,
        min_distances: Vec<f64>,
    }

    impl RecordingDriver {
        fn command_count(&self) -> usize {
            self.targets.len() + self.positions.len() + self.dollies.len()
        }
    }

    impl CameraDriver for RecordingDriver {
        fn set_target(&mut self, target: DVec3, animated: bool) {
            self.targets.push((target, animated));
        }
        fn set_position(&mut self, position: DVec3, animated: bool) {
            self.positions.push((position, animated));
        }
        fn dolly_to(&mut self, distance: f64, animated: bool) {
            self.dollies.push((distance, animated));
        }
        fn set_min_distance(&mut self, distance: f64) {
            self.min_distances.push(distance);
        }
    }

    fn earth_catalog() -> BodyCatalog {
        BodyCatalog::from_specs(vec![BodySpec {
            name: "Earth".to_owned(),
            orbital_radius: 149_600_000.0,
            radius: 6371.0,
            orbital_speed: 29.78,
            color: [0.2, 0.4, 0.8],
            parent: None,
            initial_phase: 0.0,
            y_offset: 0.0,
        }])
        .unwrap()
    }

    fn controller() -> FramingController {
        FramingController::new(FramingConfig::default())
    }

    #[test]
    fn body_selection_frames_at_four_radii() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let mut registry = PositionRegistry::new();
        let earth_pos = DVec3::new(14.96, 0.0, 0.0);
        registry.publish("Earth", earth_pos);

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        let request = ctl
            .reevaluate(
                &Selection::Body("Earth".to_owned()),
                &SunSettings::default(),
                registry.view(),
                &catalog,
                &scale,
                &mut driver,
            )
            .unwrap();

        // scaled radius 0.95565 → optimal ≈ 3.8226, min ≈ 1.9113
        let optimal = request.distance.unwrap();
        assert!((optimal - 3.8226).abs() < 1e-4, "optimal = {optimal}");
        assert!((request.min_distance - 1.9113).abs() < 1e-4);
        assert_eq!(request.target, earth_pos);

        assert_eq!(driver.targets, vec![(earth_pos, true)]);
        assert_eq!(driver.dollies.len(), 1);
        assert!(driver.positions.is_empty());
    }

    #[test]
    fn optimal_distance_is_exactly_four_times_scaled_radius() {
        let catalog = BodyCatalog::from_specs(vec![BodySpec {
            name: "Ball".to_owned(),
            orbital_radius: 10.0,
            radius: 3.0,
            orbital_speed: 1.0,
            color: [1.0, 1.0, 1.0],
            parent: None,
            initial_phase: 0.0,
            y_offset: 0.0,
        }])
        .unwrap();
        let scale = ScalePolicy {
            distance_scale: 1.0,
            size_scale: 1.0,
        };
        let mut registry = PositionRegistry::new();
        registry.publish("Ball", DVec3::new(10.0, 0.0, 0.0));

        let mut driver = RecordingDriver::default();
        let request = controller()
            .reevaluate(
                &Selection::Body("Ball".to_owned()),
                &SunSettings::default(),
                registry.view(),
                &catalog,
                &scale,
                &mut driver,
            )
            .unwrap();
        assert_eq!(request.distance, Some(12.0));
        assert_eq!(request.min_distance, 6.0);
    }

    #[test]
    fn star_selection_is_fixed_regardless_of_prior_state() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let mut registry = PositionRegistry::new();
        registry.publish("Earth", DVec3::new(14.96, 0.0, 0.0));
        let sun = SunSettings {
            position: DVec3::new(7.0, 0.0, -2.0),
            ..SunSettings::default()
        };

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        ctl.reevaluate(
            &Selection::Body("Earth".to_owned()),
            &sun,
            registry.view(),
            &catalog,
            &scale,
            &mut driver,
        );
        let request = ctl
            .reevaluate(&Selection::Star, &sun, registry.view(), &catalog, &scale, &mut driver)
            .unwrap();

        // Always the origin and the fixed close-up, even with a moved star.
        assert_eq!(request.target, DVec3::ZERO);
        assert_eq!(request.distance, Some(8.0));
        assert_eq!(request.min_distance, 4.0);
    }

    #[test]
    fn deselection_resets_to_isometric_home() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let registry = PositionRegistry::new();
        let sun = SunSettings {
            position: DVec3::new(1.0, 2.0, 3.0),
            ..SunSettings::default()
        };

        let mut driver = RecordingDriver::default();
        let request = controller()
            .reevaluate(&Selection::None, &sun, registry.view(), &catalog, &scale, &mut driver)
            .unwrap();

        assert_eq!(request.target, sun.position);
        assert_eq!(request.position, Some(DVec3::new(31.0, 22.0, 43.0)));
        assert_eq!(request.distance, None);
        assert_eq!(request.min_distance, 5.0);
        assert_eq!(driver.positions, vec![(DVec3::new(31.0, 22.0, 43.0), true)]);
    }

    #[test]
    fn unselected_tracks_a_moving_star() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let registry = PositionRegistry::new();
        let mut sun = SunSettings::default();

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        assert!(ctl
            .reevaluate(&Selection::None, &sun, registry.view(), &catalog, &scale, &mut driver)
            .is_some());

        sun.position = DVec3::new(5.0, 0.0, 0.0);
        let request = ctl
            .reevaluate(&Selection::None, &sun, registry.view(), &catalog, &scale, &mut driver)
            .unwrap();
        assert_eq!(request.target, sun.position);
        assert_eq!(request.position, Some(DVec3::new(35.0, 20.0, 40.0)));
    }

    #[test]
    fn missing_position_defers_the_transition() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let registry = PositionRegistry::new(); // nothing published

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        let request = ctl.reevaluate(
            &Selection::Body("Earth".to_owned()),
            &SunSettings::default(),
            registry.view(),
            &catalog,
            &scale,
            &mut driver,
        );
        assert!(request.is_none());
        assert_eq!(driver.command_count(), 0);

        // Position appears on a later tick; the transition goes through.
        let mut registry = PositionRegistry::new();
        registry.publish("Earth", DVec3::new(14.96, 0.0, 0.0));
        assert!(ctl
            .reevaluate(
                &Selection::Body("Earth".to_owned()),
                &SunSettings::default(),
                registry.view(),
                &catalog,
                &scale,
                &mut driver,
            )
            .is_some());
    }

    #[test]
    fn repeated_selection_issues_no_additional_commands() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let mut registry = PositionRegistry::new();
        registry.publish("Earth", DVec3::new(14.96, 0.0, 0.0));

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        let selection = Selection::Body("Earth".to_owned());
        let sun = SunSettings::default();

        assert!(ctl
            .reevaluate(&selection, &sun, registry.view(), &catalog, &scale, &mut driver)
            .is_some());
        let after_first = driver.command_count();

        // Nothing changed — same selection, same position.
        assert!(ctl
            .reevaluate(&selection, &sun, registry.view(), &catalog, &scale, &mut driver)
            .is_none());
        assert_eq!(driver.command_count(), after_first);
    }

    #[test]
    fn moving_body_keeps_reissuing_target() {
        let catalog = earth_catalog();
        let scale = ScalePolicy::default();
        let mut registry = PositionRegistry::new();
        registry.publish("Earth", DVec3::new(14.96, 0.0, 0.0));

        let mut driver = RecordingDriver::default();
        let mut ctl = controller();
        let selection = Selection::Body("Earth".to_owned());
        let sun = SunSettings::default();

        ctl.reevaluate(&selection, &sun, registry.view(), &catalog, &scale, &mut driver);
        registry.publish("Earth", DVec3::new(0.0, 0.0, 14.96));
        let request = ctl
            .reevaluate(&selection, &sun, registry.view(), &catalog, &scale, &mut driver)
            .unwrap();
        assert_eq!(request.target, DVec3::new(0.0, 0.0, 14.96));
        assert_eq!(driver.targets.len(), 2);
    }
}
