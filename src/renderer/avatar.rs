//! Avatar rendering - draw pose in, stick-figure robot out
//!
//! Builds the frame's vertex list in pixel space (torso, joint markers, arm
//! segments), then projects it onto the clip-space viewport. The wasm
//! present path pairs this with the shared GPU state.

use crate::pose::{DrawPose, VIEW_HEIGHT, VIEW_WIDTH};

use super::shapes::{
    create_circle_vertices, create_line_vertices, create_rect_vertices, Vertex,
};

/// Arm segment length in pixels. Purely visual, not an anatomical retarget.
pub const ARM_LENGTH: f32 = 80.0;

/// Torso rectangle size in pixels.
const TORSO_WIDTH: f32 = 40.0;
const TORSO_HEIGHT: f32 = 80.0;

/// Segments per joint marker circle.
const JOINT_SEGMENTS: u32 = 12;

/// Colors for the avatar's parts
mod colors {
    /// Torso fill
    pub const TORSO: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    /// Shoulder-center marker
    pub const CENTER: [f32; 4] = [1.0, 0.392, 0.392, 1.0];
    /// Left-shoulder marker
    pub const LEFT: [f32; 4] = [0.392, 1.0, 0.392, 1.0];
    /// Right-shoulder marker
    pub const RIGHT: [f32; 4] = [0.392, 0.392, 1.0, 1.0];
    /// Arm segments
    pub const ARM: [f32; 4] = [0.784, 0.784, 0.0, 1.0];
    /// Arm end caps
    pub const CAP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Visual elbow position for an arm segment drawn from `shoulder` at
/// `angle_deg`: positive angles swing the endpoint upward on screen.
pub fn arm_endpoint(shoulder: (i32, i32), angle_deg: f32) -> (f32, f32) {
    let a = angle_deg.to_radians();
    (
        shoulder.0 as f32 + ARM_LENGTH * a.cos(),
        shoulder.1 as f32 - ARM_LENGTH * a.sin(),
    )
}

/// Build the avatar's vertex list for one frame.
///
/// Draw order: torso, shoulder-center / left / right joint markers, left
/// arm, right arm. The background is the render pass clear color, not a
/// vertex.
pub fn build_avatar_vertices(pose: &DrawPose) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Fixed-size torso, centered on the viewport.
    let cx = (VIEW_WIDTH / 2) as f32;
    let cy = (VIEW_HEIGHT / 2) as f32;
    vertices.extend(create_rect_vertices(
        cx - TORSO_WIDTH / 2.0,
        cy - TORSO_HEIGHT / 2.0,
        cx + TORSO_WIDTH / 2.0,
        cy + TORSO_HEIGHT / 2.0,
        colors::TORSO,
    ));

    // Joint markers.
    let (scx, scy) = px(pose.shoulder_center);
    vertices.extend(create_circle_vertices(scx, scy, 6.0, colors::CENTER, JOINT_SEGMENTS));
    let (lsx, lsy) = px(pose.left_shoulder);
    vertices.extend(create_circle_vertices(lsx, lsy, 5.0, colors::LEFT, JOINT_SEGMENTS));
    let (rsx, rsy) = px(pose.right_shoulder);
    vertices.extend(create_circle_vertices(rsx, rsy, 5.0, colors::RIGHT, JOINT_SEGMENTS));

    // Arms.
    vertices.extend(build_arm(pose.left_shoulder, pose.left_angle));
    vertices.extend(build_arm(pose.right_shoulder, pose.right_angle));

    project(&mut vertices);
    vertices
}

/// One arm: thick segment from the shoulder to the visual elbow, plus an
/// end-cap circle.
fn build_arm(shoulder: (i32, i32), angle_deg: f32) -> Vec<Vertex> {
    let (sx, sy) = px(shoulder);
    let (ex, ey) = arm_endpoint(shoulder, angle_deg);

    let mut vertices = create_line_vertices(sx, sy, ex, ey, 4.0, colors::ARM);
    vertices.extend(create_circle_vertices(ex, ey, 6.0, colors::CAP, JOINT_SEGMENTS));
    vertices
}

fn px(point: (i32, i32)) -> (f32, f32) {
    (point.0 as f32, point.1 as f32)
}

/// Map pixel-space vertex positions onto the clip-space viewport (y flipped).
fn project(vertices: &mut [Vertex]) {
    for v in vertices.iter_mut() {
        v.position = [
            v.position[0] / VIEW_WIDTH as f32 * 2.0 - 1.0,
            -(v.position[1] / VIEW_HEIGHT as f32 * 2.0 - 1.0),
        ];
    }
}

// ============================================================================
// WASM PRESENT PATH
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod present {
    use std::cell::RefCell;

    use crate::bridge;
    use crate::renderer::pacer::FramePacer;
    use crate::renderer::state::GPU_STATE;

    use super::build_avatar_vertices;

    /// Background fill behind the avatar (dark grey)
    const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.118,
        g: 0.118,
        b: 0.118,
        a: 1.0,
    };

    thread_local! {
        static PACER: RefCell<FramePacer> = RefCell::new(FramePacer::default());
    }

    /// Render one frame of the avatar. `now_ms` is the caller's
    /// `performance.now()`; calls arriving faster than the frame ceiling
    /// skip the present.
    pub fn render_frame(now_ms: f64) {
        let due = PACER.with(|p| p.borrow_mut().ready(now_ms / 1000.0));
        if !due {
            return;
        }

        let pose = bridge::latest_pose();
        let vertices = build_avatar_vertices(&pose);

        GPU_STATE.with(|state_cell| {
            let state_ref = state_cell.borrow();
            let state = match state_ref.as_ref() {
                Some(s) => s,
                None => return,
            };

            let output = match state.surface.get_current_texture() {
                Ok(t) => t,
                Err(_) => return,
            };

            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut encoder = state
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Avatar Encoder"),
                });

            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(&vertices));

            {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Avatar Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(BACKGROUND),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }

            state.queue.submit(std::iter::once(encoder.finish()));
            output.present();
        });
    }
}

#[cfg(target_arch = "wasm32")]
pub use present::render_frame;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::DrawPose;

    #[test]
    fn endpoint_at_zero_degrees_points_right() {
        let (x, y) = arm_endpoint((300, 200), 0.0);
        assert!((x - 380.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn endpoint_at_ninety_degrees_points_up() {
        let (x, y) = arm_endpoint((300, 200), 90.0);
        assert!((x - 300.0).abs() < 1e-3);
        assert!((y - 120.0).abs() < 1e-3);
    }

    #[test]
    fn endpoint_at_one_eighty_points_left() {
        let (x, y) = arm_endpoint((300, 200), 180.0);
        assert!((x - 220.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn vertex_count_is_stable() {
        // Torso quad + three joint fans + two arms (quad + cap fan each).
        let expected = 6
            + 3 * (JOINT_SEGMENTS * 3) as usize
            + 2 * (6 + (JOINT_SEGMENTS * 3) as usize);
        let vertices = build_avatar_vertices(&DrawPose::resting());
        assert_eq!(vertices.len(), expected);
    }

    #[test]
    fn torso_is_drawn_first() {
        let vertices = build_avatar_vertices(&DrawPose::resting());
        for v in &vertices[..6] {
            assert_eq!(v.color, colors::TORSO);
        }
    }

    #[test]
    fn resting_pose_projects_inside_the_viewport() {
        let vertices = build_avatar_vertices(&DrawPose::resting());
        for v in vertices {
            assert!(v.position[0].abs() <= 1.0, "x {} out of clip", v.position[0]);
            assert!(v.position[1].abs() <= 1.0, "y {} out of clip", v.position[1]);
        }
    }
}
