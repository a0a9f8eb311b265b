use crate::data_structure::{AngleVector, JOINT_COUNT};

/// Evenly spaced poses from `start` to `target`, both included.
///
/// Each joint is interpolated on its own and truncated toward zero.
/// One step yields only `start`; zero steps yield nothing. Frames are
/// produced lazily.
pub fn ramp(
    start: AngleVector,
    target: AngleVector,
    steps: usize,
) -> impl Iterator<Item = AngleVector> {
    let last = steps.saturating_sub(1);
    let mut delta = [0f64; JOINT_COUNT];
    if last > 0 {
        for (j, d) in delta.iter_mut().enumerate() {
            *d = (target[j] as f64 - start[j] as f64) / last as f64;
        }
    }

    (0..steps).map(move |i| {
        if i == 0 {
            return start;
        }
        if i == last {
            return target;
        }
        let mut frame = [0i16; JOINT_COUNT];
        for (j, slot) in frame.iter_mut().enumerate() {
            *slot = (start[j] as f64 + i as f64 * delta[j]).trunc() as i16;
        }
        frame
    })
}
