//! Periodic SBD health collection.
//!
//! The core runs one cycle at a time and never times out on its own. This
//! monitor is the driver around it: it ticks on a fixed interval, bounds
//! each cycle with an optional timeout and stops when its cancellation
//! token fires. Every cycle yields exactly one [`MonitorEvent`].

use std::time::Duration;

use async_stream::stream;
use futures_util::Stream;
use sbdhealth_core::{HealthSnapshot, SbdError, SbdHealthCollector};
use tokio::time::{MissedTickBehavior, interval, timeout};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Outcome of a single monitored collection cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The cycle completed and produced a snapshot.
    Collected(HealthSnapshot),
    /// The cycle was aborted by a collection error.
    Failed(SbdError),
    /// The cycle exceeded the configured timeout.
    TimedOut { after: Duration },
}

impl MonitorEvent {
    /// The snapshot carried by this event, if the cycle completed.
    pub const fn snapshot(&self) -> Option<&HealthSnapshot> {
        match self {
            Self::Collected(snapshot) => Some(snapshot),
            Self::Failed(_) | Self::TimedOut { .. } => None,
        }
    }
}

/// Runs collection cycles on a fixed interval.
pub struct SbdHealthMonitor {
    collector: SbdHealthCollector,
    interval: Duration,
    cycle_timeout: Option<Duration>,
    cancel_token: CancellationToken,
}

impl SbdHealthMonitor {
    /// Create a new monitor.
    ///
    /// # Arguments
    ///
    /// * `collector` - Collector to run each cycle
    /// * `check_interval` - Time between cycle starts
    /// * `cancel_token` - Token to signal monitor shutdown
    pub const fn new(
        collector: SbdHealthCollector,
        check_interval: Duration,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            collector,
            interval: check_interval,
            cycle_timeout: None,
            cancel_token,
        }
    }

    /// Abort any cycle that runs longer than `limit`.
    #[must_use]
    pub const fn with_cycle_timeout(mut self, limit: Duration) -> Self {
        self.cycle_timeout = Some(limit);
        self
    }

    /// Run a single cycle immediately, honouring the cycle timeout.
    pub async fn run_once(&self) -> MonitorEvent {
        run_cycle(&self.collector, self.cycle_timeout).await
    }

    /// Start monitoring and return a stream with one event per cycle.
    ///
    /// The first cycle runs immediately. Completes when the cancellation
    /// token is triggered, including in the middle of a cycle.
    pub fn monitor(self) -> impl Stream<Item = MonitorEvent> {
        let Self {
            collector,
            interval: period,
            cycle_timeout,
            cancel_token,
        } = self;

        stream! {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            debug!(
                source = %collector.config_source(),
                interval = ?period,
                "Starting SBD health monitor"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    () = cancel_token.cancelled() => {
                        debug!("SBD health monitor cancelled");
                        break;
                    }
                }

                let event = tokio::select! {
                    event = run_cycle(&collector, cycle_timeout) => event,
                    () = cancel_token.cancelled() => {
                        debug!("SBD health monitor cancelled during a cycle");
                        break;
                    }
                };

                yield event;
            }
        }
    }
}

async fn run_cycle(collector: &SbdHealthCollector, cycle_timeout: Option<Duration>) -> MonitorEvent {
    let outcome = match cycle_timeout {
        Some(limit) => {
            if let Ok(outcome) = timeout(limit, collector.collect()).await {
                outcome
            } else {
                warn!(timeout = ?limit, "SBD health collection timed out");
                return MonitorEvent::TimedOut { after: limit };
            }
        }
        None => collector.collect().await,
    };

    match outcome {
        Ok(snapshot) => MonitorEvent::Collected(snapshot),
        Err(e) => {
            warn!(error = %e, "SBD health collection failed");
            MonitorEvent::Failed(e)
        }
    }
}
