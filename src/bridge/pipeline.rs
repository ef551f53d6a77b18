//! Per-frame pipeline tick and status export
//!
//! Owns the frame processor (and with it the smoothing histories) plus the
//! latest frame output, for the renderer and the JS status overlay to read.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::pose::{DrawPose, FrameOutput, FrameProcessor};

use super::landmarks::current_frame;

struct PipelineState {
    processor: FrameProcessor,
    latest: FrameOutput,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            processor: FrameProcessor::new(),
            latest: FrameOutput {
                pose: DrawPose::resting(),
                status: None,
            },
        }
    }
}

thread_local! {
    static PIPELINE: RefCell<PipelineState> = RefCell::new(PipelineState::default());
}

/// One full pipeline pass over the most recently pushed landmarks.
/// Called from JavaScript once per camera frame, before `render_frame`.
#[wasm_bindgen]
pub fn process_frame() {
    let frame = current_frame();
    PIPELINE.with(|cell| {
        let state = &mut *cell.borrow_mut();
        state.latest = state.processor.process(&frame);
    });
}

/// Status line for the overlay: smoothed angles plus gesture flags.
/// Empty while no person is tracked.
#[wasm_bindgen]
pub fn get_status_text() -> String {
    PIPELINE.with(|cell| match cell.borrow().latest.status {
        Some(report) => report.to_string(),
        None => String::new(),
    })
}

/// The latest draw pose, for the renderer.
pub fn latest_pose() -> DrawPose {
    PIPELINE.with(|cell| cell.borrow().latest.pose)
}

#[cfg(test)]
mod tests {
    use super::super::landmarks::{
        clear_landmarks, update_landmarks, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW,
        RIGHT_SHOULDER, RIGHT_WRIST,
    };
    use super::*;

    /// Flat detector array with both arms hanging straight down.
    fn straight_arm_data() -> Vec<f32> {
        let mut data = vec![0.0; 33 * 4];
        let place = |data: &mut Vec<f32>, index: usize, x: f32, y: f32| {
            data[index * 4] = x;
            data[index * 4 + 1] = y;
            data[index * 4 + 3] = 1.0;
        };
        place(&mut data, LEFT_SHOULDER, 260.0, 200.0);
        place(&mut data, RIGHT_SHOULDER, 380.0, 200.0);
        place(&mut data, LEFT_ELBOW, 260.0, 280.0);
        place(&mut data, RIGHT_ELBOW, 380.0, 280.0);
        place(&mut data, LEFT_WRIST, 260.0, 360.0);
        place(&mut data, RIGHT_WRIST, 380.0, 360.0);
        data
    }

    #[test]
    fn starts_with_resting_pose_and_no_status() {
        assert_eq!(latest_pose(), DrawPose::resting());
        assert_eq!(get_status_text(), "");
    }

    #[test]
    fn tracked_frame_produces_status_and_pose() {
        update_landmarks(&straight_arm_data());
        process_frame();
        assert_eq!(
            get_status_text(),
            "Left angle: 180 Right angle: 180 | Arms open: true closed: false \
             | L_up: false R_up: false"
        );
        assert_eq!(latest_pose().shoulder_center, (320, 200));
    }

    #[test]
    fn cleared_frame_returns_to_resting() {
        update_landmarks(&straight_arm_data());
        process_frame();
        clear_landmarks();
        process_frame();
        assert_eq!(get_status_text(), "");
        assert_eq!(latest_pose(), DrawPose::resting());
    }
}
