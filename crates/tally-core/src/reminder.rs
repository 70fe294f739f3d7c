//! Repeating drink reminder.
//!
//! At most one reminder timer exists at a time. Starting a new one aborts
//! the previous task before spawning, so timers never overlap.

use std::time::Duration;

use log::info;
use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    error::{Result, TallyError},
    notify::{NotificationSink, Severity},
};

/// Message sent on every reminder tick.
pub const REMINDER_MESSAGE: &str = "Time to drink water! 💧";

/// Handle to the single repeating reminder timer.
#[derive(Debug, Default)]
pub struct Reminder {
    task: Option<JoinHandle<()>>,
    minutes: Option<u32>,
}

impl Reminder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any running reminder and starts one that notifies `sink`
    /// every `minutes` minutes. The first notification arrives after one
    /// full interval.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidInterval` for a zero interval; any running
    /// reminder is left untouched in that case.
    pub fn start<N>(&mut self, minutes: u32, sink: N) -> Result<()>
    where
        N: NotificationSink + Send + 'static,
    {
        if minutes == 0 {
            return Err(TallyError::InvalidInterval);
        }
        self.stop();

        let period = Duration::from_secs(u64::from(minutes) * 60);
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                sink.notify(REMINDER_MESSAGE, Severity::Reminder);
            }
        });

        info!("reminder set every {minutes} minutes");
        self.task = Some(task);
        self.minutes = Some(minutes);
        Ok(())
    }

    /// Cancels the running reminder. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.minutes = None;
        match self.task.take() {
            Some(task) => {
                task.abort();
                info!("reminder stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Interval of the running reminder, in minutes.
    pub fn minutes(&self) -> Option<u32> {
        self.minutes
    }

    /// Human-readable reminder state.
    pub fn status(&self) -> String {
        match self.minutes {
            Some(minutes) => format!("Reminder every {minutes} minutes"),
            None => "No reminder set".to_string(),
        }
    }
}

impl Drop for Reminder {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::notify::Notification;

    const MINUTE: Duration = Duration::from_secs(60);

    fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
        let mut received = Vec::new();
        while let Ok(notification) = rx.try_recv() {
            received.push(notification);
        }
        received
    }

    #[tokio::test(start_paused = true)]
    async fn test_reminder_fires_every_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let mut reminder = Reminder::new();
        reminder.start(1, tx).unwrap();

        time::sleep(MINUTE / 2).await;
        assert!(drain(&mut rx).is_empty());

        time::sleep(3 * MINUTE).await;
        let received = drain(&mut rx);
        assert_eq!(received.len(), 3);
        assert!(received
            .iter()
            .all(|n| n.severity == Severity::Reminder && n.message == REMINDER_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let mut reminder = Reminder::new();
        reminder.start(1, tx.clone()).unwrap();
        time::sleep(MINUTE / 2).await;

        reminder.start(2, tx).unwrap();
        assert_eq!(reminder.minutes(), Some(2));

        // The first timer would have fired at 1:00.
        time::sleep(MINUTE).await;
        assert!(drain(&mut rx).is_empty());

        // The replacement fires at 2:30, checked at 3:00.
        time::sleep(MINUTE + MINUTE / 2).await;
        assert_eq!(drain(&mut rx).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_reminder() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let mut reminder = Reminder::new();
        reminder.start(1, tx).unwrap();
        assert!(reminder.is_active());

        assert!(reminder.stop());
        assert!(!reminder.is_active());
        assert!(!reminder.stop());

        time::sleep(5 * MINUTE).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel::<Notification>();
        let mut reminder = Reminder::new();
        reminder.start(5, tx.clone()).unwrap();

        assert!(matches!(
            reminder.start(0, tx),
            Err(TallyError::InvalidInterval)
        ));
        assert_eq!(reminder.minutes(), Some(5));
    }

    #[tokio::test]
    async fn test_status_text() {
        let (tx, _rx) = mpsc::unbounded_channel::<Notification>();
        let mut reminder = Reminder::new();
        assert_eq!(reminder.status(), "No reminder set");
        reminder.start(30, tx).unwrap();
        assert_eq!(reminder.status(), "Reminder every 30 minutes");
        reminder.stop();
        assert_eq!(reminder.status(), "No reminder set");
    }
}
