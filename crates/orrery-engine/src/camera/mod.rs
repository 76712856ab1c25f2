pub mod driver;
pub mod rig;

// Re-export key types for convenient access
pub use driver::{CameraDriver, FrameRequest};
pub use rig::SmoothRig;
