//! Notification waiter
//!
//! Polls the notification behind an asynchronous operation until it reaches
//! a terminal status or the local timeout elapses. The remote task is never
//! cancelled; a timeout only ends the local wait.

use std::sync::Arc;
use std::time::Duration;

use hostctl_client::CloudApi;
use hostctl_core::domain::notification::NotificationStatus;
use hostctl_core::dto::operation::{NotificationHandle, OperationResponse};
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::error::CliError;
use crate::progress::ProgressReporter;

#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Return immediately without contacting the API
    pub skip_wait: bool,
    /// Delay before every status check, including the first
    pub poll_interval: Duration,
    /// Total time allowed from the start of the wait
    pub timeout: Duration,
}

/// State of a single wait call
struct PendingOperation {
    handle: NotificationHandle,
    started_at: Instant,
    polls: u32,
}

impl PendingOperation {
    fn new(handle: NotificationHandle) -> Self {
        Self {
            handle,
            started_at: Instant::now(),
            polls: 0,
        }
    }
}

pub struct NotificationWaiter {
    api: Arc<dyn CloudApi>,
    options: WaitOptions,
    reporter: Arc<dyn ProgressReporter>,
}

impl NotificationWaiter {
    pub fn new(
        api: Arc<dyn CloudApi>,
        options: WaitOptions,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            api,
            options,
            reporter,
        }
    }

    /// Wait for the task referenced by an operation response to complete
    ///
    /// # Errors
    /// - `MissingHandle` if the response has no notification link
    /// - `OperationFailed` if the task reports `failed`
    /// - `UnknownStatus` for any status outside the known set
    /// - `Timeout` once the configured timeout has elapsed
    pub async fn wait(&self, response: &OperationResponse) -> Result<(), CliError> {
        if self.options.skip_wait {
            debug!("Not waiting for task: waiting disabled");
            return Ok(());
        }

        let handle = response
            .notification_handle()
            .ok_or(CliError::MissingHandle)?;

        let mut pending = PendingOperation::new(handle);
        self.reporter.waiting(pending.handle.as_str());

        let result = self.poll(&mut pending).await;
        self.reporter.finish(result.is_ok());
        debug!(
            "Stopped polling {} after {} poll(s)",
            pending.handle, pending.polls
        );
        result
    }

    async fn poll(&self, pending: &mut PendingOperation) -> Result<(), CliError> {
        loop {
            sleep(self.options.poll_interval).await;

            let notification = self.api.get_notification(pending.handle.as_str()).await?;
            pending.polls += 1;

            let elapsed = pending.started_at.elapsed();
            self.reporter.poll(elapsed, &notification.status);
            debug!(
                "Task {} is {} after {}s",
                pending.handle,
                notification.status,
                elapsed.as_secs()
            );

            match notification.status {
                NotificationStatus::Completed => {
                    info!("Task {} completed", pending.handle);
                    return Ok(());
                }
                NotificationStatus::Failed => {
                    return Err(CliError::OperationFailed {
                        handle: pending.handle.to_string(),
                    });
                }
                NotificationStatus::Started | NotificationStatus::InProgress => {}
                NotificationStatus::Unknown(status) => {
                    return Err(CliError::UnknownStatus {
                        handle: pending.handle.to_string(),
                        status,
                    });
                }
            }

            if elapsed >= self.options.timeout {
                return Err(CliError::Timeout {
                    handle: pending.handle.to_string(),
                    elapsed,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, SilentReporter};
    use hostctl_core::dto::operation::OperationLinks;

    const BASE: &str = "https://cloud.example.com/api";

    fn waiter(api: &Arc<FakeApi>, options: WaitOptions) -> NotificationWaiter {
        NotificationWaiter::new(api.clone(), options, Arc::new(SilentReporter::default()))
    }

    fn options(poll: u64, timeout: u64) -> WaitOptions {
        WaitOptions {
            skip_wait: false,
            poll_interval: Duration::from_secs(poll),
            timeout: Duration::from_secs(timeout),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_after_three_polls() {
        let api = Arc::new(FakeApi::new());
        api.script(&["started", "in-progress", "completed"]);

        let started = Instant::now();
        waiter(&api, options(5, 300))
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap();

        assert_eq!(api.count("get_notification task"), 3);
        // the first check happens only after one full interval
        assert!(started.elapsed() >= Duration::from_secs(15));
        assert!(started.elapsed() < Duration::from_secs(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_after_two_polls() {
        let api = Arc::new(FakeApi::new());
        api.script(&["in-progress", "failed"]);

        let err = waiter(&api, options(5, 300))
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::OperationFailed { ref handle } if handle == "task"));
        assert_eq!(api.count("get_notification"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_while_in_progress() {
        let api = Arc::new(FakeApi::new());
        api.script(&["in-progress"; 100]);

        let err = waiter(&api, options(5, 30))
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Timeout { .. }));
        let polls = api.count("get_notification");
        assert!((5..=7).contains(&polls), "polled {} times", polls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_does_not_reset_the_clock() {
        let api = Arc::new(FakeApi::new());
        api.script(&["in-progress", "started", "in-progress", "started", "in-progress"]);

        let err = waiter(&api, options(5, 10))
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Timeout { .. }));
        assert_eq!(api.count("get_notification"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_status_is_fatal() {
        let api = Arc::new(FakeApi::new());
        api.script(&["Completed"]);

        let err = waiter(&api, options(5, 300))
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::UnknownStatus { ref status, .. } if status == "Completed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_wait_makes_no_calls() {
        let api = Arc::new(FakeApi::new());
        api.script(&["failed"]);
        let mut opts = options(5, 300);
        opts.skip_wait = true;

        waiter(&api, opts)
            .wait(&OperationResponse::for_notification(BASE, "task"))
            .await
            .unwrap();

        assert!(api.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_handle() {
        let api = Arc::new(FakeApi::new());
        let response = OperationResponse {
            message: "Done".into(),
            links: OperationLinks::default(),
        };

        let err = waiter(&api, options(5, 300)).wait(&response).await.unwrap_err();

        assert!(matches!(err, CliError::MissingHandle));
        assert!(api.calls().is_empty());
    }
}
