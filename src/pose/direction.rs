//! Arm pointing direction for the rendered avatar
//!
//! Independent of the elbow-angle signal: answers "which way is this arm
//! pointing from the shoulder", nothing more.

use super::landmarks::Landmark;

/// Draw angle for a left arm with no usable wrist: pointing screen-left.
pub const LEFT_REST_ANGLE: f32 = 180.0;

/// Draw angle for a right arm with no usable wrist: pointing screen-right.
pub const RIGHT_REST_ANGLE: f32 = 0.0;

/// Direction of the shoulder→wrist vector in degrees.
///
/// The y component is inverted out of screen space first, so 0° points
/// right and 90° points up.
pub fn shoulder_angle(shoulder: Landmark, wrist: Landmark) -> f32 {
    let vx = (wrist.x - shoulder.x) as f32;
    let vy = (shoulder.y - wrist.y) as f32;
    vy.atan2(vx).to_degrees()
}
