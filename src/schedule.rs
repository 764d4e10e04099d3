use crate::clock::{self, MSK};
use crate::poster::Poster;
use chrono::{DateTime, Days};
use chrono_tz::Tz;
use chrono::TimeZone;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time as tok_time;
use tracing::{debug, error, info};

/// A fixed daily firing rule evaluated in Moscow time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

impl Trigger {
    const fn at(label: &'static str, hour: u32, minute: u32) -> Self {
        Self {
            label,
            hour,
            minute,
        }
    }

    /// First instant strictly after `after` at which this trigger fires.
    fn next_fire(&self, after: DateTime<Tz>) -> DateTime<Tz> {
        let mut day = after.date_naive();
        loop {
            // a local time can be skipped or doubled around an offset change
            let at = day
                .and_hms_opt(self.hour, self.minute, 0)
                .and_then(|naive| MSK.from_local_datetime(&naive).earliest());
            if let Some(at) = at {
                if at > after {
                    return at;
                }
            }
            day = day + Days::new(1);
        }
    }
}

const SCHEDULED_TRIGGERS: [Trigger; 2] =
    [Trigger::at("morning", 8, 0), Trigger::at("day", 14, 0)];

/// Runs the two daily triggers. Each trigger lives in its own timer task and
/// enqueues its label on firing; a single worker drains the queue and calls
/// the poster, so a failed send never stops later firings.
pub struct Scheduler {
    triggers: Vec<Trigger>,
    shutdown_sig: watch::Sender<u8>,
}

impl Scheduler {
    pub fn start(poster: Poster) -> Self {
        let (shutdown_sig, _) = watch::channel(0);
        let (fire_tx, fire_rx) = mpsc::channel(8);

        spawn_worker(poster, fire_rx, shutdown_sig.subscribe());

        let triggers = SCHEDULED_TRIGGERS.to_vec();
        for trigger in &triggers {
            spawn_timer(*trigger, fire_tx.clone(), shutdown_sig.subscribe());
        }

        info!(
            "scheduler running, plan: {}",
            triggers
                .iter()
                .map(|t| format!("{} at {:02}:{:02}", t.label, t.hour, t.minute))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            triggers,
            shutdown_sig,
        }
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn stop(&self) {
        if let Err(e) = self.shutdown_sig.send(1) {
            error!("fail to stop scheduler: {}", e);
        }
    }
}

fn spawn_timer(
    trigger: Trigger,
    fire_tx: mpsc::Sender<&'static str>,
    mut shutdown: watch::Receiver<u8>,
) {
    tokio::spawn(async move {
        loop {
            let now = clock::now_msk();
            let at = trigger.next_fire(now);
            let wait = (at - now).to_std().unwrap_or(Duration::ZERO);
            debug!("trigger {} sleeps until {}", trigger.label, at);

            tokio::select! {
                _ = shutdown.changed() => {
                    info!("trigger {} stopped", trigger.label);
                    return;
                }

                _ = tok_time::sleep(wait) => {
                    if fire_tx.send(trigger.label).await.is_err() {
                        // worker is gone, nothing left to fire for
                        return;
                    }
                }
            }
        }
    });
}

fn spawn_worker(
    poster: Poster,
    mut fire_rx: mpsc::Receiver<&'static str>,
    mut shutdown: watch::Receiver<u8>,
) {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("scheduler worker stopped");
                    return;
                }

                label = fire_rx.recv() => {
                    let Some(label) = label else { return };
                    // log and keep going, the next firing must still happen
                    if let Err(e) = poster.send_post(label).await {
                        error!("scheduled {} post failed: {:#}", label, e);
                    }
                }
            }
        }
    });
}
