//! Gesture classification from smoothed elbow angles and wrist heights
//!
//! Pure threshold rules over the current frame; no history of its own.

use super::landmarks::Landmark;

/// An elbow angle above this counts as an extended (nearly straight) arm.
pub const EXTENDED_THRESHOLD: f32 = 160.0;

/// An elbow angle below this counts as a flexed arm.
///
/// The gap up to `EXTENDED_THRESHOLD` sets neither flag; angles in between
/// are an ambiguous transition zone, which keeps the flags from flickering
/// around a single boundary.
pub const CLOSED_THRESHOLD: f32 = 100.0;

/// Gesture snapshot for one frame, recomputed fresh every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    /// Both elbow angles above `EXTENDED_THRESHOLD`.
    pub arms_open: bool,
    /// Both elbow angles below `CLOSED_THRESHOLD`.
    pub arms_closed: bool,
    /// Wrist strictly above the shoulder (screen y grows downward).
    /// `None` when either landmark on that side is absent.
    pub left_hand_up: Option<bool>,
    /// Same convention for the right side.
    pub right_hand_up: Option<bool>,
}

/// Derive the discrete gesture flags for one frame.
pub fn classify(
    left_angle: f32,
    right_angle: f32,
    left_wrist: Option<Landmark>,
    left_shoulder: Option<Landmark>,
    right_wrist: Option<Landmark>,
    right_shoulder: Option<Landmark>,
) -> GestureState {
    let left_extended = left_angle > EXTENDED_THRESHOLD;
    let right_extended = right_angle > EXTENDED_THRESHOLD;

    GestureState {
        arms_open: left_extended && right_extended,
        arms_closed: left_angle < CLOSED_THRESHOLD && right_angle < CLOSED_THRESHOLD,
        left_hand_up: hand_up(left_wrist, left_shoulder),
        right_hand_up: hand_up(right_wrist, right_shoulder),
    }
}

/// Smaller y is higher on screen.
fn hand_up(wrist: Option<Landmark>, shoulder: Option<Landmark>) -> Option<bool> {
    match (wrist, shoulder) {
        (Some(w), Some(s)) => Some(w.y < s.y),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: i32, y: i32) -> Landmark {
        Landmark::new(x, y)
    }

    fn angles_only(left: f32, right: f32) -> GestureState {
        classify(left, right, None, None, None, None)
    }

    #[test]
    fn both_extended_opens_arms() {
        let state = angles_only(161.0, 161.0);
        assert!(state.arms_open);
        assert!(!state.arms_closed);
    }

    #[test]
    fn both_flexed_closes_arms() {
        let state = angles_only(99.0, 99.0);
        assert!(state.arms_closed);
        assert!(!state.arms_open);
    }

    #[test]
    fn transition_zone_sets_neither_flag() {
        let state = angles_only(130.0, 130.0);
        assert!(!state.arms_open);
        assert!(!state.arms_closed);
    }

    #[test]
    fn thresholds_are_exclusive() {
        // Exactly at the cutoffs counts as neither.
        let state = angles_only(160.0, 100.0);
        assert!(!state.arms_open);
        assert!(!state.arms_closed);
    }

    #[test]
    fn one_flexed_side_is_not_closed() {
        let state = angles_only(90.0, 170.0);
        assert!(!state.arms_closed);
        assert!(!state.arms_open);
    }

    #[test]
    fn one_extended_side_is_not_open() {
        let state = angles_only(170.0, 130.0);
        assert!(!state.arms_open);
    }

    #[test]
    fn wrist_above_shoulder_is_up() {
        let state = classify(
            120.0,
            120.0,
            Some(lm(100, 150)),
            Some(lm(110, 200)),
            Some(lm(300, 201)),
            Some(lm(310, 200)),
        );
        assert_eq!(state.left_hand_up, Some(true));
        assert_eq!(state.right_hand_up, Some(false));
    }

    #[test]
    fn level_wrist_is_not_up() {
        let state = classify(
            120.0,
            120.0,
            Some(lm(100, 200)),
            Some(lm(110, 200)),
            None,
            None,
        );
        assert_eq!(state.left_hand_up, Some(false));
    }

    #[test]
    fn absent_landmark_is_undefined() {
        let state = classify(
            120.0,
            120.0,
            None,
            Some(lm(110, 200)),
            Some(lm(300, 100)),
            None,
        );
        assert_eq!(state.left_hand_up, None);
        assert_eq!(state.right_hand_up, None);
    }
}
