// camera/rig.rs
//
// Smoothed camera rig — a reference CameraDriver that animates target,
// position and dolly distance with eased, duration-based transitions.
//
// Usage:
//   let mut rig = SmoothRig::new();
//   rig.dolly_to(8.0, true);   // from the framing controller
//   rig.advance(dt);           // once per render frame

use glam::DVec3;

use crate::extensions::easing::{ease, ease_dvec3, Easing};

use super::driver::CameraDriver;

/// Transition duration in seconds, matching the original control rig.
pub const DEFAULT_SMOOTH_TIME: f64 = 0.5;
/// Global distance ceiling. Applies uniformly; never scaled per body.
pub const DEFAULT_MAX_DISTANCE: f64 = 900.0;
/// Min-distance floor the rig starts with, until the controller overrides it.
pub const DEFAULT_MIN_DISTANCE: f64 = 5.0;

/// An in-flight eased vector transition.
#[derive(Debug, Clone, Copy)]
struct VecTransition {
    from: DVec3,
    to: DVec3,
    elapsed: f64,
    duration: f64,
}

impl VecTransition {
    fn sample(&self, easing: Easing) -> DVec3 {
        ease_dvec3(self.from, self.to, self.progress(), easing)
    }

    fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// An in-flight eased scalar transition (dolly distance).
#[derive(Debug, Clone, Copy)]
struct ScalarTransition {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
}

impl ScalarTransition {
    fn sample(&self, easing: Easing) -> f64 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        ease(self.from, self.to, t, easing)
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Reference camera driver with smoothed transitions. Each new command
/// replaces the in-flight transition on its channel; nothing is ever
/// cancelled explicitly.
pub struct SmoothRig {
    target: DVec3,
    position: DVec3,
    min_distance: f64,
    max_distance: f64,
    smooth_time: f64,
    easing: Easing,
    target_anim: Option<VecTransition>,
    position_anim: Option<VecTransition>,
    dolly_anim: Option<ScalarTransition>,
}

impl SmoothRig {
    pub fn new() -> Self {
        Self {
            target: DVec3::ZERO,
            position: DVec3::new(30.0, 20.0, 40.0),
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            smooth_time: DEFAULT_SMOOTH_TIME,
            easing: Easing::default(),
            target_anim: None,
            position_anim: None,
            dolly_anim: None,
        }
    }

    // -- Builder methods --

    pub fn with_smooth_time(mut self, smooth_time: f64) -> Self {
        self.smooth_time = smooth_time.max(0.0);
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    // -- Inspection --

    pub fn target(&self) -> DVec3 {
        self.target
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Current camera-to-target distance.
    pub fn distance(&self) -> f64 {
        (self.position - self.target).length()
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn is_animating(&self) -> bool {
        self.target_anim.is_some() || self.position_anim.is_some() || self.dolly_anim.is_some()
    }

    /// View axis from target to camera, with a fallback when the camera sits
    /// exactly on the target.
    fn view_axis(&self) -> DVec3 {
        (self.position - self.target)
            .try_normalize()
            .unwrap_or(DVec3::Z)
    }

    fn clamp_distance(&self, distance: f64) -> f64 {
        distance.max(self.min_distance).min(self.max_distance)
    }

    /// Advance in-flight transitions by `dt` seconds and enforce the
    /// distance bounds.
    pub fn advance(&mut self, dt: f64) {
        if let Some(anim) = &mut self.target_anim {
            anim.elapsed += dt;
            self.target = anim.sample(self.easing);
            if anim.done() {
                self.target = anim.to;
                self.target_anim = None;
            }
        }
        if let Some(anim) = &mut self.position_anim {
            anim.elapsed += dt;
            self.position = anim.sample(self.easing);
            if anim.done() {
                self.position = anim.to;
                self.position_anim = None;
            }
        }
        if let Some(anim) = &mut self.dolly_anim {
            anim.elapsed += dt;
            let distance = anim.sample(self.easing);
            let axis = (self.position - self.target)
                .try_normalize()
                .unwrap_or(DVec3::Z);
            self.position = self.target + axis * distance;
            if anim.done() {
                self.position = self.target + axis * anim.to;
                self.dolly_anim = None;
            }
        }

        // Enforce bounds even when the target moved under a fixed camera.
        let current = self.distance();
        let clamped = self.clamp_distance(current);
        if current > 0.0 && (clamped - current).abs() > f64::EPSILON {
            let axis = self.view_axis();
            self.position = self.target + axis * clamped;
        }
    }
}

impl Default for SmoothRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraDriver for SmoothRig {
    fn set_target(&mut self, target: DVec3, animated: bool) {
        if animated && self.smooth_time > 0.0 {
            self.target_anim = Some(VecTransition {
                from: self.target,
                to: target,
                elapsed: 0.0,
                duration: self.smooth_time,
            });
        } else {
            self.target = target;
            self.target_anim = None;
        }
    }

    fn set_position(&mut self, position: DVec3, animated: bool) {
        if animated && self.smooth_time > 0.0 {
            self.position_anim = Some(VecTransition {
                from: self.position,
                to: position,
                elapsed: 0.0,
                duration: self.smooth_time,
            });
        } else {
            self.position = position;
            self.position_anim = None;
        }
    }

    fn dolly_to(&mut self, distance: f64, animated: bool) {
        let goal = self.clamp_distance(distance);
        if animated && self.smooth_time > 0.0 {
            self.dolly_anim = Some(ScalarTransition {
                from: self.distance(),
                to: goal,
                elapsed: 0.0,
                duration: self.smooth_time,
            });
        } else {
            let axis = self.view_axis();
            self.position = self.target + axis * goal;
            self.dolly_anim = None;
        }
    }

    fn set_min_distance(&mut self, distance: f64) {
        self.min_distance = distance;
    }
}
