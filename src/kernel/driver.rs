use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::info;

use super::cancel::PendingFrames;
use super::controller::PlaybackController;
use super::event::{Command, Renderer};
use super::time::{Clock, FRAME_MS};

/// Async frame loop. Owns the controller exclusively, so control
/// commands and ticks never interleave.
pub struct PlaybackDriver<C, R>
where
    C: Clock,
    R: Renderer,
{
    controller: PlaybackController<C, PendingFrames, R>,
    commands: mpsc::Receiver<Command>,
    frame_interval: Duration,
}

impl<C, R> PlaybackDriver<C, R>
where
    C: Clock,
    R: Renderer,
{
    pub fn new(
        controller: PlaybackController<C, PendingFrames, R>,
        commands: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            controller,
            commands,
            frame_interval: Duration::from_millis(FRAME_MS),
        }
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval.max(Duration::from_millis(1));
        self
    }

    /// Runs until `Command::Shutdown` or every sender is dropped.
    /// Hands the controller back for inspection.
    pub async fn run(mut self) -> PlaybackController<C, PendingFrames, R> {
        info!("Playback driver started. Frame: {:?}", self.frame_interval);

        let mut cadence = interval(self.frame_interval);
        cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            // Wait for the frame boundary
            cadence.tick().await;

            // Apply queued commands before the frame runs
            loop {
                match self.commands.try_recv() {
                    Ok(Command::Shutdown) => return self.shutdown(),
                    Ok(command) => self.controller.apply(command),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return self.shutdown(),
                }
            }

            self.controller.pump();
        }
    }

    fn shutdown(mut self) -> PlaybackController<C, PendingFrames, R> {
        self.controller.pause();
        info!("Playback driver stopped at {:.2}s", self.controller.current_time());
        self.controller
    }
}
