//! Pose signal pipeline - angles, smoothing, gestures, per-frame orchestration
//!
//! Re-exports only. All logic in submodules.

mod direction;
mod geometry;
mod gestures;
mod landmarks;
mod processor;
mod smoother;

pub use direction::{shoulder_angle, LEFT_REST_ANGLE, RIGHT_REST_ANGLE};
pub use geometry::angle_at;
pub use gestures::{classify, GestureState, CLOSED_THRESHOLD, EXTENDED_THRESHOLD};
pub use landmarks::{Landmark, LandmarkFrame};
pub use processor::{
    DrawPose, FrameOutput, FrameProcessor, StatusReport, VIEW_HEIGHT, VIEW_WIDTH,
};
pub use smoother::{AngleSmoother, ELBOW_ALPHA};
