//! Notification polling.
//!
//! Polls `GET /notifications` on a fixed interval, independent of other
//! activity. The poller is torn down explicitly when the observing view
//! goes away; after [`NotificationPoller::stop`] returns, no further state
//! is written.

use std::sync::Arc;
use std::time::Duration;

use edt_client::backend::ScheduleBackend;
use edt_client::notifications::NotificationFeed;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::warn;

pub struct NotificationPoller {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
    feed: Arc<RwLock<NotificationFeed>>,
}

impl NotificationPoller {
    /// Starts polling. The first fetch happens immediately, then every
    /// `interval`. Poll failures are logged and the previous feed is kept;
    /// no retry beyond the next scheduled tick.
    pub fn start(backend: Arc<dyn ScheduleBackend>, interval: Duration) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let feed = Arc::new(RwLock::new(NotificationFeed::default()));
        let task_feed = feed.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        match backend.notifications().await {
                            Ok(fresh) => *task_feed.write().await = fresh,
                            Err(e) => warn!(error = %e, "notification poll failed"),
                        }
                    }
                }
            }
        });

        NotificationPoller {
            handle,
            shutdown,
            feed,
        }
    }

    /// Latest polled feed.
    pub async fn feed(&self) -> NotificationFeed {
        self.feed.read().await.clone()
    }

    /// Stops the poll loop and waits for it to finish, guaranteeing no write
    /// after teardown.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}
