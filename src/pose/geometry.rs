//! Elbow angle calculation using dot product
//!
//! Computes the interior angle at a joint from the two rays leaving it,
//! e.g. at the elbow from the shoulder and wrist landmarks.

use super::landmarks::Landmark;

/// Guards the magnitude product against (near-)zero-length rays.
const LENGTH_EPSILON: f32 = 1e-6;

/// Interior angle at vertex `b` in degrees, formed by rays `b→a` and `b→c`.
///
/// Uses the normalized dot product of `(a - b)` and `(c - b)`:
/// - 180° = the three points lie on a line (arm fully extended)
/// - 90° = the rays are perpendicular (arm bent square)
///
/// Total over all finite inputs: coincident points are absorbed by the
/// epsilon in the denominator, and the cosine is clamped before `acos`, so
/// the result is always finite and in [0, 180].
pub fn angle_at(a: Landmark, b: Landmark, c: Landmark) -> f32 {
    let ba = ((a.x - b.x) as f32, (a.y - b.y) as f32);
    let bc = ((c.x - b.x) as f32, (c.y - b.y) as f32);

    let dot = ba.0 * bc.0 + ba.1 * bc.1;
    let mag_ba = (ba.0 * ba.0 + ba.1 * ba.1).sqrt();
    let mag_bc = (bc.0 * bc.0 + bc.1 * bc.1).sqrt();

    let cos_angle = (dot / (mag_ba * mag_bc + LENGTH_EPSILON)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees().clamp(0.0, 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: i32, y: i32) -> Landmark {
        Landmark::new(x, y)
    }

    #[test]
    fn straight_vertical_arm() {
        // Shoulder, elbow, wrist stacked vertically: fully extended.
        let angle = angle_at(lm(260, 200), lm(260, 280), lm(260, 360));
        assert!((angle - 180.0).abs() < 0.5, "angle {angle}");
    }

    #[test]
    fn square_bend() {
        // Forearm perpendicular to the upper arm.
        let angle = angle_at(lm(260, 200), lm(260, 280), lm(340, 280));
        assert!((angle - 90.0).abs() < 0.5, "angle {angle}");
    }

    #[test]
    fn folded_back_is_zero() {
        // Wrist back on top of the shoulder: fully flexed.
        let angle = angle_at(lm(260, 200), lm(260, 280), lm(260, 210));
        assert!(angle < 0.5, "angle {angle}");
    }

    #[test]
    fn coincident_points_stay_finite() {
        let p = lm(100, 100);
        let angle = angle_at(p, p, p);
        assert!(angle.is_finite());
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn collinear_overlap_stays_finite() {
        let angle = angle_at(lm(10, 10), lm(10, 10), lm(50, 10));
        assert!(angle.is_finite());
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn always_within_bounds() {
        let triples = [
            (lm(0, 0), lm(1, 0), lm(2, 0)),
            (lm(-500, 300), lm(12, -7), lm(640, 480)),
            (lm(260, 200), lm(260, 280), lm(330, 200)),
            (lm(3, 3), lm(3, 4), lm(4, 3)),
            (lm(1000, -1000), lm(0, 0), lm(-1000, 1000)),
        ];
        for (a, b, c) in triples {
            let angle = angle_at(a, b, c);
            assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
        }
    }
}
