use glam::DVec3;

/// Contract between the framing controller and whatever owns the real
/// camera. The controller decides *what* to request; the driver owns all
/// interpolation, easing and collision with scene bounds.
///
/// Commands are fire-and-forget. A new command replaces any in-flight motion
/// for the same channel — there is no cancellation concept.
pub trait CameraDriver {
    /// Aim the camera at a world-space point.
    fn set_target(&mut self, target: DVec3, animated: bool);
    /// Move the camera body to a world-space point.
    fn set_position(&mut self, position: DVec3, animated: bool);
    /// Change the camera-to-target distance along the current view axis.
    fn dolly_to(&mut self, distance: f64, animated: bool);
    /// Lower bound the driver must enforce on its distance to target.
    fn set_min_distance(&mut self, distance: f64);
}

/// One framing decision: where to look and how far to stand. Produced by the
/// framing controller, issued to the driver immediately, kept only for
/// duplicate suppression.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    pub target: DVec3,
    /// Explicit camera position (the unselected isometric reset). `None`
    /// leaves the position to the driver, subject to `distance`.
    pub position: Option<DVec3>,
    /// Dolly goal. `None` leaves the current distance untouched.
    pub distance: Option<f64>,
    pub min_distance: f64,
}

impl FrameRequest {
    /// Issue this request as driver commands, all animated. The min-distance
    /// bound goes out first so the dolly goal is not clamped against a stale
    /// bound.
    pub fn issue(&self, driver: &mut dyn CameraDriver) {
        driver.set_min_distance(self.min_distance);
        driver.set_target(self.target, true);
        if let Some(position) = self.position {
            driver.set_position(position, true);
        }
        if let Some(distance) = self.distance {
            driver.dolly_to(distance, true);
        }
    }
}
