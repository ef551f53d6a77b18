//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod pipeline;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    // Internal API
    current_frame,
    // Constants
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    LEFT_ELBOW,
    RIGHT_ELBOW,
    LEFT_WRIST,
    RIGHT_WRIST,
    MIN_VISIBILITY,
};

pub use pipeline::{get_status_text, latest_pose, process_frame};
