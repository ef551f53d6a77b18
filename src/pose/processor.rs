//! Per-frame orchestration: landmarks in, draw pose and status out

use std::fmt;

use super::direction::{shoulder_angle, LEFT_REST_ANGLE, RIGHT_REST_ANGLE};
use super::geometry::angle_at;
use super::gestures::{classify, GestureState};
use super::landmarks::{Landmark, LandmarkFrame};
use super::smoother::AngleSmoother;

/// Avatar viewport in pixels; matches the canvas the renderer draws into.
pub const VIEW_WIDTH: i32 = 640;
pub const VIEW_HEIGHT: i32 = 480;

/// Elbow angle assumed for a side whose wrist has never been seen.
const FULL_EXTENSION: f32 = 180.0;

/// Everything the renderer needs for one frame of the avatar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawPose {
    pub shoulder_center: (i32, i32),
    pub left_shoulder: (i32, i32),
    pub right_shoulder: (i32, i32),
    /// Arm draw angles in degrees: 0° = screen right, 90° = screen up.
    pub left_angle: f32,
    pub right_angle: f32,
}

impl DrawPose {
    /// Fixed pose shown while no person is tracked: centered torso, arms
    /// hanging slightly outward.
    pub fn resting() -> Self {
        let cx = VIEW_WIDTH / 2;
        let cy = VIEW_HEIGHT / 2;
        Self {
            shoulder_center: (cx, cy - 40),
            left_shoulder: (cx - 20, cy - 40),
            right_shoulder: (cx + 20, cy - 40),
            left_angle: -30.0,
            right_angle: 30.0,
        }
    }
}

/// Smoothed elbow angles plus gesture flags for one tracked frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusReport {
    pub left_angle: f32,
    pub right_angle: f32,
    pub gestures: GestureState,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Left angle: {} Right angle: {} | Arms open: {} closed: {} | L_up: {} R_up: {}",
            self.left_angle as i32,
            self.right_angle as i32,
            self.gestures.arms_open,
            self.gestures.arms_closed,
            flag(self.gestures.left_hand_up),
            flag(self.gestures.right_hand_up),
        )
    }
}

fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "undefined",
    }
}

/// Result of one pipeline pass. `status` is `None` when no person was
/// tracked this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub pose: DrawPose,
    pub status: Option<StatusReport>,
}

/// Per-frame pipeline driver.
///
/// Owns the only cross-frame state in the pipeline: the two elbow-angle
/// smoothing histories. Created once at loop start and fed every frame;
/// untracked frames leave the histories untouched so tracking resumes
/// smoothly when the person reappears.
pub struct FrameProcessor {
    left_elbow: AngleSmoother,
    right_elbow: AngleSmoother,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self {
            left_elbow: AngleSmoother::for_elbow(),
            right_elbow: AngleSmoother::for_elbow(),
        }
    }

    /// One full pass: geometry → smoothing → gestures and draw angles.
    ///
    /// A frame missing a shoulder or an elbow is treated as "no person":
    /// the resting pose comes back and no state changes.
    pub fn process(&mut self, frame: &LandmarkFrame) -> FrameOutput {
        let (Some(ls), Some(rs), Some(le), Some(re)) = (
            frame.left_shoulder,
            frame.right_shoulder,
            frame.left_elbow,
            frame.right_elbow,
        ) else {
            return FrameOutput {
                pose: DrawPose::resting(),
                status: None,
            };
        };

        let shoulder_center = ((ls.x + rs.x) / 2, (ls.y + rs.y) / 2);

        let left_angle = Self::smoothed_elbow(&mut self.left_elbow, ls, le, frame.left_wrist);
        let right_angle = Self::smoothed_elbow(&mut self.right_elbow, rs, re, frame.right_wrist);

        let gestures = classify(
            left_angle,
            right_angle,
            frame.left_wrist,
            frame.left_shoulder,
            frame.right_wrist,
            frame.right_shoulder,
        );

        let left_draw = match frame.left_wrist {
            Some(w) => shoulder_angle(ls, w),
            None => LEFT_REST_ANGLE,
        };
        let right_draw = match frame.right_wrist {
            Some(w) => shoulder_angle(rs, w),
            None => RIGHT_REST_ANGLE,
        };

        FrameOutput {
            pose: DrawPose {
                shoulder_center,
                left_shoulder: (ls.x, ls.y),
                right_shoulder: (rs.x, rs.y),
                left_angle: left_draw,
                right_angle: right_draw,
            },
            status: Some(StatusReport {
                left_angle,
                right_angle,
                gestures,
            }),
        }
    }

    /// Measure and smooth one elbow. A side with no usable wrist skips the
    /// measurement for this frame; its signal holds the previous value, or
    /// reads as fully extended before the first sample.
    fn smoothed_elbow(
        smoother: &mut AngleSmoother,
        shoulder: Landmark,
        elbow: Landmark,
        wrist: Option<Landmark>,
    ) -> f32 {
        match wrist {
            Some(w) => smoother.apply(angle_at(shoulder, elbow, w)),
            None => smoother.last().unwrap_or(FULL_EXTENSION),
        }
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}
