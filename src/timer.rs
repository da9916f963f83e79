//! # Countdown Timer
//!
//! Calls a callback after a period, once or repeatedly, on a tokio task of
//! its own. The callback runs concurrently with whatever the caller is
//! doing, so anything it touches has to be `Send + Sync`.
//!
//! ```text
//! create(cb) ──▶ start(period, once) ──▶ [task sleeps] ──▶ cb()
//!                    │                                      │ once = false
//!                    ▼                                      ▼
//!                  stop() / destroy() / drop         sleep again ...
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// No runtime to schedule the timer on.
    Unavailable(String),
    /// A zero period would fire immediately and forever.
    InvalidPeriod,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::Unavailable(msg) => write!(f, "timer unavailable: {msg}"),
            TimerError::InvalidPeriod => write!(f, "timer period must be non-zero"),
        }
    }
}

impl std::error::Error for TimerError {}

type Callback = Arc<dyn Fn() + Send + Sync>;

pub struct CountdownTimer {
    callback: Callback,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("armed", &self.is_armed())
            .finish()
    }
}

impl CountdownTimer {
    /// Binds `callback` to a new, disarmed timer on the current runtime.
    pub fn create<F>(callback: F) -> Result<Self, TimerError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| {
            warn!("Cannot create timer: {}", e);
            TimerError::Unavailable(e.to_string())
        })?;
        Ok(Self {
            callback: Arc::new(callback),
            runtime,
            task: None,
        })
    }

    /// Arms the timer. Re-arming replaces the previous schedule.
    ///
    /// With `once` the callback fires a single time after `period`;
    /// otherwise it fires every `period` until stopped.
    pub fn start(&mut self, period: Duration, once: bool) -> Result<(), TimerError> {
        if period.is_zero() {
            return Err(TimerError::InvalidPeriod);
        }
        self.stop();

        let callback = Arc::clone(&self.callback);
        let task = self.runtime.spawn(async move {
            if once {
                time::sleep(period).await;
                callback();
                return;
            }
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                callback();
            }
        });

        debug!("Timer armed: period={:?}, once={}", period, once);
        self.task = Some(task);
        Ok(())
    }

    /// Disarms without destroying. Returns whether the timer was armed.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                let armed = !task.is_finished();
                task.abort();
                if armed {
                    debug!("Timer disarmed");
                }
                armed
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Disarms and releases the timer.
    pub fn destroy(mut self) {
        self.stop();
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
