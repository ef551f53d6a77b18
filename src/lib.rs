//! Robot Mimic - pose-driven stick-figure avatar
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! JavaScript owns the camera, the MediaPipe pose detector, and the
//! requestAnimationFrame loop; it pushes landmarks in once per camera frame
//! and drives the pipeline tick and the render.

pub mod bridge;
pub mod pose;
pub mod renderer;

// Re-export the per-frame entry points for JS access
pub use bridge::{clear_landmarks, get_status_text, process_frame, update_landmarks};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("WebGPU initialized, avatar renderer ready");
    Ok(())
}

/// Render one frame of the avatar. `now_ms` is the caller's
/// `performance.now()`; calls arriving faster than the frame ceiling skip
/// the present.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) {
    renderer::render_frame(now_ms);
}
