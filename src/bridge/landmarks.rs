//! Landmark ingestion - JS → Rust entry points
//!
//! The JavaScript collaborator runs the camera and the MediaPipe pose
//! detector, converts the normalized output to mirrored pixel coordinates,
//! and pushes the result here once per camera frame.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::pose::{Landmark, LandmarkFrame};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// Values per landmark in the flat input array: x, y, z, visibility.
const STRIDE: usize = 4;

/// Landmarks in a full MediaPipe pose result.
const LANDMARK_COUNT: usize = 33;

/// A landmark reported less visible than this is treated as absent.
pub const MIN_VISIBILITY: f32 = 0.5;

thread_local! {
    static FRAME: RefCell<LandmarkFrame> = RefCell::new(LandmarkFrame::empty());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 132 values
/// (33 landmarks × [x, y, z, visibility]), x/y in pixel space.
///
/// z is ignored. A landmark below `MIN_VISIBILITY` is stored absent. Only
/// the six arm landmarks are kept.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != LANDMARK_COUNT * STRIDE {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                LANDMARK_COUNT * STRIDE
            )
            .into(),
        );
        return;
    }

    let frame = LandmarkFrame {
        left_shoulder: extract(data, LEFT_SHOULDER),
        right_shoulder: extract(data, RIGHT_SHOULDER),
        left_elbow: extract(data, LEFT_ELBOW),
        right_elbow: extract(data, RIGHT_ELBOW),
        left_wrist: extract(data, LEFT_WRIST),
        right_wrist: extract(data, RIGHT_WRIST),
    };

    FRAME.with(|cell| *cell.borrow_mut() = frame);
}

/// Called from JavaScript when the detector found no person this frame.
#[wasm_bindgen]
pub fn clear_landmarks() {
    FRAME.with(|cell| *cell.borrow_mut() = LandmarkFrame::empty());
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// The current frame's landmarks, for the pipeline tick.
pub fn current_frame() -> LandmarkFrame {
    FRAME.with(|cell| *cell.borrow())
}

fn extract(data: &[f32], index: usize) -> Option<Landmark> {
    let base = index * STRIDE;
    if data[base + 3] < MIN_VISIBILITY {
        return None;
    }
    Some(Landmark::new(data[base] as i32, data[base + 1] as i32))
}
