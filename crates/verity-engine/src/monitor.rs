//! Connectivity monitor: a periodic sampler of backend health.
//!
//! `start()` resets the state to `checking`, runs a probe cycle immediately,
//! then one cycle per interval until `stop()`. A cycle retries transport
//! failures a fixed number of times with a fixed delay and ends in exactly one
//! [`ConnectivityEvent`]. State transitions are the only observable effect.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use verity_config::MonitorConfig;
use verity_core::{ConnectivityEvent, ConnectivityState};

use crate::probe::{HealthProbe, ProbeAttempt};

/// Retry and scheduling parameters of the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorTiming {
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub interval: Duration,
}

impl From<&MonitorConfig> for MonitorTiming {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            retry_attempts: config.retry_attempts,
            retry_delay: config.retry_delay(),
            interval: config.interval(),
        }
    }
}

impl Default for MonitorTiming {
    fn default() -> Self {
        Self::from(&MonitorConfig::default())
    }
}

pub struct ConnectivityMonitor {
    probe: Arc<dyn HealthProbe>,
    timing: MonitorTiming,
    state: Arc<watch::Sender<ConnectivityState>>,
    running: Mutex<Option<CancellationToken>>,
}

impl ConnectivityMonitor {
    #[must_use]
    pub fn new(probe: Arc<dyn HealthProbe>, timing: MonitorTiming) -> Self {
        let (state, _) = watch::channel(ConnectivityState::Checking);
        Self {
            probe,
            timing,
            state: Arc::new(state),
            running: Mutex::new(None),
        }
    }

    /// Current connectivity state.
    #[must_use]
    pub fn state(&self) -> ConnectivityState {
        *self.state.borrow()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Reset to `checking` and begin periodic probing on a background task.
    ///
    /// A no-op while the monitor is already running. Must be called from
    /// within a tokio runtime.
    pub fn start(&self) {
        let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        if running.as_ref().is_some_and(|token| !token.is_cancelled()) {
            tracing::debug!("connectivity monitor already running");
            return;
        }

        apply(&self.state, ConnectivityEvent::Activated);

        let token = CancellationToken::new();
        *running = Some(token.clone());
        drop(running);

        let probe = Arc::clone(&self.probe);
        let state = Arc::clone(&self.state);
        let timing = self.timing;
        tokio::spawn(async move {
            loop {
                let event = probe_cycle(probe.as_ref(), timing).await;
                if token.is_cancelled() {
                    tracing::debug!(?event, "monitor stopped, discarding probe result");
                    break;
                }
                apply(&state, event);

                tokio::select! {
                    () = token.cancelled() => break,
                    () = tokio::time::sleep(timing.interval) => {}
                }
            }
        });
    }

    /// Cancel the periodic schedule. A probe still in flight may finish, but
    /// its result is discarded.
    pub fn stop(&self) {
        if let Some(token) = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            token.cancel();
            tracing::debug!("connectivity monitor stopped");
        }
    }

    /// Run one probe cycle in the foreground and apply its outcome.
    ///
    /// While the background schedule is running this starts no cycle of its
    /// own; it waits for the running schedule to settle and returns that.
    pub async fn probe_now(&self) -> ConnectivityState {
        if self.is_running() {
            tracing::debug!("monitor running, deferring to its probe cycle");
            return self.settled().await;
        }
        let event = probe_cycle(self.probe.as_ref(), self.timing).await;
        apply(&self.state, event)
    }

    /// Wait until the state leaves `checking`, and return it.
    pub async fn settled(&self) -> ConnectivityState {
        let mut rx = self.subscribe();
        rx.wait_for(|state| *state != ConnectivityState::Checking)
            .await
            .map_or_else(|_| self.state(), |state| *state)
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Probe until a definitive answer or the retry budget runs out.
async fn probe_cycle(probe: &dyn HealthProbe, timing: MonitorTiming) -> ConnectivityEvent {
    let mut retries = 0;
    loop {
        match probe.probe().await {
            ProbeAttempt::Healthy => return ConnectivityEvent::ProbeHealthy,
            ProbeAttempt::Unhealthy => return ConnectivityEvent::ProbeUnhealthy,
            ProbeAttempt::Unreachable if retries < timing.retry_attempts => {
                retries += 1;
                tracing::debug!(
                    retry = retries,
                    of = timing.retry_attempts,
                    "retrying health check"
                );
                tokio::time::sleep(timing.retry_delay).await;
            }
            ProbeAttempt::Unreachable => return ConnectivityEvent::ProbeUnreachable,
        }
    }
}

fn apply(state: &watch::Sender<ConnectivityState>, event: ConnectivityEvent) -> ConnectivityState {
    let mut next = ConnectivityState::Checking;
    state.send_modify(|current| {
        let previous = *current;
        *current = current.transition(event);
        next = *current;
        if previous != next {
            tracing::info!(from = %previous, to = %next, "connectivity changed");
        }
    });
    next
}
