use std::time::Duration;

use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::action::Action;

/// The frame and spawn cadences, always started and stopped together.
pub trait Cadence {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Drives both cadences from a single task, posting `FrameTick` and `SpawnPipes`
/// into the app's action channel.
pub struct GameClock {
    action_tx: Option<UnboundedSender<Action>>,
    frame_period: Duration,
    spawn_period: Duration,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
}

impl GameClock {
    pub fn new(frame_rate: f64, spawn_period: Duration) -> Self {
        GameClock {
            action_tx: None,
            frame_period: Duration::from_secs_f64(1.0 / frame_rate),
            spawn_period,
            task: None,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }
}

impl Cadence for GameClock {
    fn start(&mut self) {
        self.stop();
        let Some(action_tx) = self.action_tx.clone() else {
            warn!("Game clock started before an action handler was registered");
            return;
        };

        self.cancellation_token = CancellationToken::new();
        let cancellation_token = self.cancellation_token.clone();
        let frame_period = self.frame_period;
        let spawn_period = self.spawn_period;
        self.task = Some(tokio::spawn(async move {
            // Neither cadence fires immediately; the first tick comes one period after start.
            let now = Instant::now();
            let mut frame_interval = time::interval_at(now + frame_period, frame_period);
            let mut spawn_interval = time::interval_at(now + spawn_period, spawn_period);
            frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            spawn_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let action = tokio::select! {
                    biased;
                    _ = cancellation_token.cancelled() => break,
                    _ = spawn_interval.tick() => Action::SpawnPipes,
                    _ = frame_interval.tick() => Action::FrameTick,
                };
                if action_tx.send(action).is_err() {
                    break;
                }
            }
        }));
        debug!("Game clock started: frame every {:?}, spawn every {:?}", frame_period, spawn_period);
    }

    fn stop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Game clock stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for GameClock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Clock for tests: records starts and stops, never ticks on its own.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    pub running: bool,
    pub starts: usize,
    pub stops: usize,
}

#[cfg(test)]
impl Cadence for ManualClock {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::constants::game::{FRAME_RATE, SPAWN_INTERVAL};

    fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> (usize, usize) {
        let (mut frames, mut spawns) = (0, 0);
        while let Ok(action) = rx.try_recv() {
            match action {
                Action::FrameTick => frames += 1,
                Action::SpawnPipes => spawns += 1,
                other => panic!("unexpected action {other:?}"),
            }
        }
        (frames, spawns)
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_posts_frames_and_spawns() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = GameClock::new(FRAME_RATE, SPAWN_INTERVAL);
        clock.register_action_handler(tx);

        clock.start();
        assert!(clock.is_running());

        time::sleep(Duration::from_millis(1400)).await;
        let (frames, spawns) = drain(&mut rx);
        assert_eq!(spawns, 0);
        assert!(frames >= 60, "only {frames} frames");

        time::sleep(Duration::from_millis(200)).await;
        let (_, spawns) = drain(&mut rx);
        assert_eq!(spawns, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_both_cadences() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = GameClock::new(FRAME_RATE, SPAWN_INTERVAL);
        clock.register_action_handler(tx);

        clock.start();
        time::sleep(Duration::from_millis(100)).await;
        drain(&mut rx);

        clock.stop();
        assert!(!clock.is_running());
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(drain(&mut rx), (0, 0));
    }

    #[tokio::test]
    async fn test_start_without_action_handler() {
        let mut clock = GameClock::new(FRAME_RATE, SPAWN_INTERVAL);
        clock.start();
        assert!(!clock.is_running());
    }
}
