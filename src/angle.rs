//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a joint from the vectors toward its
//! two neighboring joints, e.g. knee angle from knee->hip and knee->ankle.

use crate::types::Point3D;

/// Interior angle at vertex `b` formed by rays b->a and b->c, in degrees.
///
/// Uses cos(theta) = (ba . bc) / (|ba| * |bc|), with the cosine clamped to
/// [-1, 1] before acos to guard against floating-point overshoot.
///
/// Returns NaN when either ray has zero length (a == b or c == b); the
/// caller skips such samples instead of handling an error path.
pub fn joint_angle(a: Point3D, b: Point3D, c: Point3D) -> f32 {
    let ba = (a.x - b.x, a.y - b.y, a.z - b.z);
    let bc = (c.x - b.x, c.y - b.y, c.z - b.z);

    let dot = ba.0 * bc.0 + ba.1 * bc.1 + ba.2 * bc.2;
    let mag_ba = (ba.0 * ba.0 + ba.1 * ba.1 + ba.2 * ba.2).sqrt();
    let mag_bc = (bc.0 * bc.0 + bc.1 * bc.1 + bc.2 * bc.2).sqrt();

    let denom = mag_ba * mag_bc;
    if denom == 0.0 {
        return f32::NAN;
    }

    let cos_angle = (dot / denom).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}
