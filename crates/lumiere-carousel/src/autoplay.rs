//! Autoplay driver.
//!
//! One task owns the [`CarouselEngine`]. Timer ticks and manual commands
//! are serialized through that task's `select!` loop, and every state
//! change is published on a `watch` channel.
//!
//! ```text
//!   CarouselHandle ──mpsc──▶ ┌──────────────┐ ──watch──▶ subscribers
//!                            │ driver task  │
//!        interval tick ────▶ │ (owns engine)│
//!                            └──────────────┘
//! ```

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::engine::{CarouselEngine, CarouselState, Transition};
use crate::CarouselError;

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

const COMMAND_BUFFER: usize = 32;

enum DriverCommand {
    Apply(Transition),
    Shutdown,
}

/// Owns an engine and advances it on a fixed period.
pub struct CarouselDriver {
    engine: CarouselEngine,
    period: Duration,
}

/// Handle to a running driver. Dropping it stops the driver.
pub struct CarouselHandle {
    cmd_tx: mpsc::Sender<DriverCommand>,
    state_rx: watch::Receiver<CarouselState>,
    task: JoinHandle<()>,
}

impl CarouselDriver {
    /// A zero period is rejected; the ticker cannot run without one.
    pub fn new(engine: CarouselEngine, period: Duration) -> Result<Self, CarouselError> {
        if period.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self { engine, period })
    }

    /// Spawn the driver on the current tokio runtime.
    ///
    /// The first tick fires one full period after start.
    pub fn start(self) -> CarouselHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let (state_tx, state_rx) = watch::channel(self.engine.state());

        let task = tokio::spawn(self.run(cmd_rx, state_tx));

        CarouselHandle {
            cmd_tx,
            state_rx,
            task,
        }
    }

    async fn run(
        mut self,
        mut cmd_rx: mpsc::Receiver<DriverCommand>,
        state_tx: watch::Sender<CarouselState>,
    ) {
        info!(
            slides = self.engine.slide_count(),
            period_ms = self.period.as_millis() as u64,
            "carousel autoplay started"
        );

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let transition = tokio::select! {
                _ = ticker.tick() => Transition::Tick,
                cmd = cmd_rx.recv() => match cmd {
                    Some(DriverCommand::Apply(transition)) => transition,
                    Some(DriverCommand::Shutdown) | None => break,
                },
            };

            if self.engine.apply(transition) {
                state_tx.send_replace(self.engine.state());
            } else {
                debug!(?transition, "carousel transition left slide unchanged");
                // Direction may still have changed.
                state_tx.send_if_modified(|state| {
                    let next = self.engine.state();
                    let modified = *state != next;
                    *state = next;
                    modified
                });
            }
        }

        info!("carousel autoplay stopped");
    }
}

impl CarouselHandle {
    /// Latest published state.
    pub fn state(&self) -> CarouselState {
        *self.state_rx.borrow()
    }

    /// Receiver for state changes.
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state_rx.clone()
    }

    /// Queue a manual transition.
    pub async fn apply(&self, transition: Transition) -> Result<(), CarouselError> {
        self.send(DriverCommand::Apply(transition)).await
    }

    pub async fn next(&self) -> Result<(), CarouselError> {
        self.apply(Transition::Next).await
    }

    pub async fn previous(&self) -> Result<(), CarouselError> {
        self.apply(Transition::Previous).await
    }

    pub async fn jump_to(&self, index: usize) -> Result<(), CarouselError> {
        self.apply(Transition::JumpTo(index)).await
    }

    /// Stop the driver and wait for its task to finish.
    pub async fn shutdown(mut self) -> Result<(), CarouselError> {
        self.send(DriverCommand::Shutdown).await?;
        (&mut self.task)
            .await
            .map_err(|_| CarouselError::DriverClosed)
    }

    async fn send(&self, cmd: DriverCommand) -> Result<(), CarouselError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| CarouselError::DriverClosed)
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
