//! Renderer module - avatar vertex building, frame pacing, GPU present
//!
//! Re-exports only. All logic in submodules.

mod avatar;
mod pacer;
mod shapes;
#[cfg(target_arch = "wasm32")]
mod state;

pub use avatar::{arm_endpoint, build_avatar_vertices, ARM_LENGTH};
pub use pacer::{FramePacer, FRAME_CEILING_HZ};
pub use shapes::{
    create_circle_vertices, create_line_vertices, create_rect_vertices, Vertex,
};

#[cfg(target_arch = "wasm32")]
pub use avatar::render_frame;
#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, GpuStateError};
