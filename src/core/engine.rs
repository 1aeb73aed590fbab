//! Stopwatch engine: the in-memory timing state machine for one active crono.
//!
//! While running, a task spawned on the tokio runtime sleeps for
//! `TICK_PERIOD` and adds exactly `TICK_STEP_MILLIS` to the elapsed counter
//! on every wake-up. The step is fixed; wall-clock drift is not corrected.
//!
//! All fields sit behind a single mutex. Every arm of the tick gets a fresh
//! epoch and a tick only lands if its epoch is still current, so once
//! `pause()`, `stop()` or `load()` return no late tick can touch the state.

use crate::models::StopwatchRecord;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);
pub const TICK_STEP_MILLIS: i64 = 1000;

/// Observable snapshot of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    pub title: String,
    pub running: bool,
    pub elapsed_millis: i64,
    /// Paused at least once since the last reset: there is unsaved progress.
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

impl StopwatchState {
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.dirty {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }
}

struct Inner {
    state: StopwatchState,
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
}

impl Inner {
    /// Invalidate the current epoch and abort the tick task, if any.
    fn cancel_tick(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<StopwatchState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &StopwatchState) {
        self.updates.send_replace(state.clone());
    }

    /// Apply one tick. Returns false when the tick belongs to a cancelled
    /// epoch, which also ends the task.
    fn tick(&self, epoch: u64) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch || !inner.state.running {
            return false;
        }
        inner.state.elapsed_millis += TICK_STEP_MILLIS;
        ::log::trace!("tick: {} ms", inner.state.elapsed_millis);
        self.publish(&inner.state);
        true
    }
}

pub struct StopwatchEngine {
    shared: Arc<Shared>,
    runtime: Handle,
}

impl StopwatchEngine {
    /// Create an idle engine whose tick task runs on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        let (updates, _) = watch::channel(StopwatchState::default());
        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                state: StopwatchState::default(),
                epoch: 0,
                ticker: None,
            }),
            updates,
        });
        Self { shared, runtime }
    }

    pub fn set_title(&self, text: impl Into<String>) {
        let mut inner = self.shared.lock();
        inner.state.title = text.into();
        self.shared.publish(&inner.state);
    }

    /// Start ticking. Does nothing if already running.
    pub fn start(&self) {
        let mut inner = self.shared.lock();
        if inner.state.running {
            return;
        }
        inner.state.running = true;
        self.arm(&mut inner);
        ::log::debug!("stopwatch started at {} ms", inner.state.elapsed_millis);
        self.shared.publish(&inner.state);
    }

    /// Pause, keeping the accumulated time. Does nothing if not running.
    pub fn pause(&self) {
        let mut inner = self.shared.lock();
        if !inner.state.running {
            return;
        }
        inner.cancel_tick();
        inner.state.running = false;
        inner.state.dirty = true;
        ::log::debug!("stopwatch paused at {} ms", inner.state.elapsed_millis);
        self.shared.publish(&inner.state);
    }

    /// Cancel any tick and reset every field.
    pub fn stop(&self) {
        let mut inner = self.shared.lock();
        inner.cancel_tick();
        inner.state = StopwatchState::default();
        ::log::debug!("stopwatch reset");
        self.shared.publish(&inner.state);
    }

    /// Take title and elapsed time from a persisted record. The engine ends
    /// up idle and clean; a running tick is cancelled first.
    pub fn load(&self, record: &StopwatchRecord) {
        let mut inner = self.shared.lock();
        inner.cancel_tick();
        inner.state = StopwatchState {
            title: record.title.clone(),
            running: false,
            elapsed_millis: record.elapsed_millis,
            dirty: false,
        };
        ::log::debug!("loaded crono #{} into stopwatch", record.id);
        self.shared.publish(&inner.state);
    }

    pub fn snapshot(&self) -> StopwatchState {
        self.shared.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.shared.lock().state.phase()
    }

    pub fn has_active_tick(&self) -> bool {
        self.shared.lock().ticker.is_some()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<StopwatchState> {
        self.shared.updates.subscribe()
    }

    /// Replace any existing tick task with a fresh one.
    fn arm(&self, inner: &mut Inner) {
        inner.cancel_tick();
        let epoch = inner.epoch;
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);

        inner.ticker = Some(self.runtime.spawn(async move {
            loop {
                tokio::time::sleep(TICK_PERIOD).await;
                let Some(shared) = shared.upgrade() else {
                    break;
                };
                if !shared.tick(epoch) {
                    break;
                }
            }
        }));
    }
}

impl Drop for StopwatchEngine {
    fn drop(&mut self) {
        self.shared.lock().cancel_tick();
    }
}
