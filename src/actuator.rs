use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::channel::HandPublisher;
use crate::config::MotionConfig;
use crate::data_structure::{AngleVector, Gesture, HandCtrl, RAMP_START};
use crate::error::HandError;
use crate::trajectory::ramp;

/// Ramps from the fixed start pose to `target`, sleeping `dt` after every publish.
/// Returns the number of commands sent.
pub async fn send_angles<P: HandPublisher>(
    publisher: &mut P,
    target: AngleVector,
    steps: usize,
    dt: Duration,
) -> Result<usize, HandError> {
    let mut sent = 0;
    for frame in ramp(RAMP_START, target, steps) {
        debug!(step = sent, angles = ?frame, "ramp");
        publisher.publish(&HandCtrl::angles(frame))?;
        sent += 1;
        sleep(dt).await;
    }
    Ok(sent)
}

/// Republishes `target` every `dt` until `duration` has elapsed.
pub async fn hold<P: HandPublisher>(
    publisher: &mut P,
    target: AngleVector,
    duration: Duration,
    dt: Duration,
) -> Result<usize, HandError> {
    let cmd = HandCtrl::angles(target);
    let deadline = Instant::now() + duration;
    let mut sent = 0;
    while Instant::now() < deadline {
        publisher.publish(&cmd)?;
        sent += 1;
        sleep(dt).await;
    }
    Ok(sent)
}

pub async fn perform_gesture<P: HandPublisher>(
    publisher: &mut P,
    gesture: Gesture,
    motion: &MotionConfig,
) -> Result<usize, HandError> {
    let target = gesture.target();
    info!(topic = publisher.topic(), %gesture, ?target, "moving hand");

    let ramped = send_angles(publisher, target, motion.steps, motion.step_interval).await?;
    let held = hold(publisher, target, motion.hold_duration, motion.hold_interval).await?;

    info!(ramped, held, "gesture complete");
    Ok(ramped + held)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structure::{ANGLE_MODE, CLOSE, OPEN, PINCH};

    #[derive(Default)]
    struct Recorder {
        sent: Vec<(Instant, HandCtrl)>,
        fail_after: Option<usize>,
    }

    impl HandPublisher for Recorder {
        fn topic(&self) -> &str {
            "rt/inspire_hand/ctrl/l"
        }

        fn publish(&mut self, cmd: &HandCtrl) -> Result<(), HandError> {
            if self.fail_after == Some(self.sent.len()) {
                return Err(HandError::Publish {
                    topic: self.topic().to_string(),
                    reason: "link down".into(),
                });
            }
            self.sent.push((Instant::now(), cmd.clone()));
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ramp_publishes_every_frame() {
        let mut rec = Recorder::default();
        let sent = send_angles(&mut rec, OPEN, 30, Duration::from_millis(50))
            .await
            .unwrap();
        assert_eq!(sent, 30);
        assert_eq!(rec.sent.len(), 30);
        assert_eq!(rec.sent[0].1.angle_set, CLOSE.to_vec());
        assert_eq!(rec.sent[29].1.angle_set, OPEN.to_vec());
        assert!(rec.sent.iter().all(|(_, cmd)| cmd.mode == ANGLE_MODE));

        let gap = rec.sent[1].0 - rec.sent[0].0;
        assert_eq!(gap, Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn hold_repeats_target_until_deadline() {
        let mut rec = Recorder::default();
        let duration = Duration::from_secs(1);
        let dt = Duration::from_millis(100);
        let sent = hold(&mut rec, PINCH, duration, dt).await.unwrap();

        assert!(sent >= 10, "only {sent} publishes");
        assert_eq!(rec.sent.len(), sent);
        assert!(rec
            .sent
            .iter()
            .all(|(_, cmd)| cmd.angle_set == PINCH.to_vec() && cmd.mode == ANGLE_MODE));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_hold_publishes_nothing() {
        let mut rec = Recorder::default();
        let sent = hold(&mut rec, OPEN, Duration::ZERO, Duration::from_millis(100))
            .await
            .unwrap();
        assert_eq!(sent, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn gesture_runs_ramp_then_hold() {
        let mut rec = Recorder::default();
        let total = perform_gesture(&mut rec, Gesture::Open, &MotionConfig::default())
            .await
            .unwrap();
        assert_eq!(total, rec.sent.len());
        assert!(total >= 40);
        assert!(rec.sent[29..]
            .iter()
            .all(|(_, cmd)| cmd.angle_set == OPEN.to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn publish_failure_aborts_run() {
        let mut rec = Recorder {
            fail_after: Some(3),
            ..Recorder::default()
        };
        let err = perform_gesture(&mut rec, Gesture::Close, &MotionConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HandError::Publish { .. }));
        assert_eq!(rec.sent.len(), 3);
    }
}
