//! Task lifecycle monitoring
//!
//! This module drives one export job from submission to its terminal result:
//! the submit call with simulated progress labels, and the fixed-interval
//! polling loop against the status endpoint.
//!
//! Polling is deliberately plain: a fixed cadence with no backoff and no
//! jitter. Ticks are strictly sequential; a tick's response is fully handled
//! before the next tick is awaited, so at most one status request is in
//! flight at any time. Cancellation is signalled through a `watch` channel
//! and synchronously ends the loop; an already-issued request may still
//! complete on the wire, but nothing is delivered for it.

pub mod stages;

pub use stages::{StageRotation, SUBMIT_STAGES};

use crate::adapters::export_api::ExportApi;
use crate::config::PollingConfig;
use crate::domain::ids::TaskId;
use crate::domain::request::ExportRequest;
use crate::domain::status::{ExportOutcome, TaskState, TaskStatusSnapshot};
use crate::domain::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

/// Failure message used when a status poll cannot be completed
pub const STATUS_UNAVAILABLE: &str = "status unavailable";

/// Receiver of progress updates during submission and polling
///
/// The monitor reports stage labels and optional progress percentages here;
/// the terminal outcome is the return value of [`TaskMonitor::watch`], not a
/// sink callback, so it cannot be delivered more than once.
pub trait ProgressSink: Send {
    /// Called once per update with a stage label and optional progress (0-100)
    fn stage(&mut self, label: &str, progress: Option<f64>);
}

/// Verdict of one handled status snapshot
enum Tick {
    /// Keep polling
    Continue,
    /// Terminal state reached
    Done(ExportOutcome),
}

/// Drives one export job from user intent to terminal result
///
/// The monitor owns the timers; the API calls go through the [`ExportApi`]
/// seam. One instance can watch any number of tasks sequentially.
///
/// # Example
///
/// ```no_run
/// use gitexport::adapters::export_api::HttpExportApi;
/// use gitexport::config::{PollingConfig, ServiceConfig};
/// use gitexport::core::monitor::{ProgressSink, TaskMonitor};
/// use gitexport::domain::ExportRequest;
/// use std::sync::Arc;
/// use tokio::sync::watch;
///
/// struct PrintSink;
///
/// impl ProgressSink for PrintSink {
///     fn stage(&mut self, label: &str, progress: Option<f64>) {
///         println!("{label} {progress:?}");
///     }
/// }
///
/// # async fn example() -> gitexport::domain::Result<()> {
/// let api = Arc::new(HttpExportApi::new(&ServiceConfig::default())?);
/// let monitor = TaskMonitor::new(api, &PollingConfig::default());
/// let (_cancel_tx, cancel_rx) = watch::channel(false);
///
/// let mut sink = PrintSink;
/// let request = ExportRequest::new("https://github.com/acme/repo");
/// let task_id = monitor.submit_with_progress(&request, &mut sink).await?;
/// let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;
/// println!("{outcome:?}");
/// # Ok(())
/// # }
/// ```
pub struct TaskMonitor {
    api: Arc<dyn ExportApi>,
    poll_interval: Duration,
    stage_interval: Duration,
    poll_timeout: Option<Duration>,
}

impl TaskMonitor {
    /// Creates a monitor over the given API with the configured cadence
    pub fn new(api: Arc<dyn ExportApi>, polling: &PollingConfig) -> Self {
        Self {
            api,
            poll_interval: Duration::from_millis(polling.interval_ms),
            stage_interval: Duration::from_millis(polling.stage_interval_ms),
            poll_timeout: polling.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Submits an export request while rotating simulated stage labels
    ///
    /// The label timer starts immediately, advances once per stage interval,
    /// and holds on the last label once the sequence is exhausted. The timer
    /// is dropped when the submit response arrives, on the success and the
    /// failure path alike.
    ///
    /// # Errors
    ///
    /// Propagates the submission error from the underlying API.
    pub async fn submit_with_progress(
        &self,
        request: &ExportRequest,
        sink: &mut dyn ProgressSink,
    ) -> Result<TaskId> {
        let mut rotation = StageRotation::new();
        let mut ticker = tokio::time::interval(self.stage_interval);

        let submit = self.api.submit_export(request);
        tokio::pin!(submit);

        loop {
            tokio::select! {
                result = &mut submit => return result,
                _ = ticker.tick() => {
                    if let Some(label) = rotation.advance() {
                        sink.stage(label, None);
                    }
                }
            }
        }
    }

    /// Polls the task until it reaches a terminal state or is cancelled
    ///
    /// Returns `Some(outcome)` when the task terminates (success, error, or
    /// a failed poll), and `None` when cancellation ended the loop first. A
    /// cancelled watch delivers nothing: no further progress updates and no
    /// outcome.
    pub async fn watch(
        &self,
        task_id: &TaskId,
        sink: &mut dyn ProgressSink,
        mut cancel: watch::Receiver<bool>,
    ) -> Option<ExportOutcome> {
        if *cancel.borrow() {
            return None;
        }

        let started = Instant::now();
        let mut ticker =
            tokio::time::interval_at(started + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            task_id = %task_id,
            interval_ms = self.poll_interval.as_millis() as u64,
            "Polling task status"
        );

        loop {
            if let Some(limit) = self.poll_timeout {
                if started.elapsed() >= limit {
                    tracing::warn!(task_id = %task_id, "Polling bound exceeded");
                    return Some(ExportOutcome::failed(format!(
                        "No terminal status after {}s, stopped polling",
                        limit.as_secs()
                    )));
                }
            }

            tokio::select! {
                _ = cancelled(&mut cancel) => {
                    tracing::info!(task_id = %task_id, "Polling cancelled");
                    return None;
                }
                _ = ticker.tick() => {}
            }

            let snapshot = tokio::select! {
                _ = cancelled(&mut cancel) => {
                    tracing::info!(task_id = %task_id, "Polling cancelled mid-request");
                    return None;
                }
                result = self.api.task_status(task_id) => result,
            };

            match snapshot {
                Ok(snapshot) => match self.handle_snapshot(task_id, snapshot, sink) {
                    Tick::Continue => {}
                    Tick::Done(outcome) => return Some(outcome),
                },
                Err(e) => {
                    tracing::warn!(task_id = %task_id, error = %e, "Stopping poll after failed tick");
                    return Some(ExportOutcome::failed(STATUS_UNAVAILABLE));
                }
            }
        }
    }

    /// Handles one decoded snapshot and decides whether polling continues
    fn handle_snapshot(
        &self,
        task_id: &TaskId,
        snapshot: TaskStatusSnapshot,
        sink: &mut dyn ProgressSink,
    ) -> Tick {
        match snapshot.state {
            TaskState::Processing => {
                let label = snapshot.stage.as_deref().unwrap_or("Processing...");
                sink.stage(label, snapshot.progress);
                Tick::Continue
            }
            TaskState::Success => match snapshot.result {
                Some(result) => {
                    tracing::info!(
                        task_id = %task_id,
                        file_count = result.file_count,
                        file_size = result.file_size,
                        "Export completed"
                    );
                    Tick::Done(ExportOutcome::Completed(result))
                }
                None => {
                    tracing::warn!(task_id = %task_id, "Success status without result payload");
                    Tick::Done(ExportOutcome::failed(
                        "Export service reported success without a result",
                    ))
                }
            },
            TaskState::Error => {
                let message = snapshot
                    .message
                    .unwrap_or_else(|| "Export failed".to_string());
                tracing::info!(task_id = %task_id, message = %message, "Export failed");
                Tick::Done(ExportOutcome::failed(message))
            }
        }
    }
}

/// Resolves once the cancel signal flips to `true`; never resolves otherwise
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if *cancel.borrow() {
        return;
    }
    while cancel.changed().await.is_ok() {
        if *cancel.borrow() {
            return;
        }
    }
    // Sender dropped without cancelling; treat as never-cancelled.
    std::future::pending::<()>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::OutputMode;
    use crate::domain::status::ExportResult;
    use crate::domain::{GitExportError, ServiceError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn processing(stage: &str, progress: f64) -> TaskStatusSnapshot {
        TaskStatusSnapshot {
            state: TaskState::Processing,
            stage: Some(stage.to_string()),
            progress: Some(progress),
            result: None,
            message: None,
        }
    }

    fn success(result: ExportResult) -> TaskStatusSnapshot {
        TaskStatusSnapshot {
            state: TaskState::Success,
            stage: None,
            progress: None,
            result: Some(result),
            message: None,
        }
    }

    fn error(message: &str) -> TaskStatusSnapshot {
        TaskStatusSnapshot {
            state: TaskState::Error,
            stage: None,
            progress: None,
            result: None,
            message: Some(message.to_string()),
        }
    }

    fn sample_result() -> ExportResult {
        ExportResult {
            file_count: 12,
            file_size: 1_572_864,
            download_url: "/files/repo_merged.md".to_string(),
            output_mode: OutputMode::Single,
        }
    }

    /// API double that replays a scripted status sequence and then hangs
    struct ScriptedApi {
        submit_delay: Duration,
        submit_result: Mutex<Option<Result<TaskId>>>,
        statuses: Mutex<VecDeque<Result<TaskStatusSnapshot>>>,
        status_calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn with_statuses(statuses: Vec<Result<TaskStatusSnapshot>>) -> Self {
            Self {
                submit_delay: Duration::ZERO,
                submit_result: Mutex::new(Some(Ok(TaskId::new("task-1").unwrap()))),
                statuses: Mutex::new(statuses.into()),
                status_calls: AtomicUsize::new(0),
            }
        }

        fn with_submit(delay: Duration, result: Result<TaskId>) -> Self {
            Self {
                submit_delay: delay,
                submit_result: Mutex::new(Some(result)),
                statuses: Mutex::new(VecDeque::new()),
                status_calls: AtomicUsize::new(0),
            }
        }

        fn status_calls(&self) -> usize {
            self.status_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExportApi for ScriptedApi {
        async fn submit_export(&self, _request: &ExportRequest) -> Result<TaskId> {
            tokio::time::sleep(self.submit_delay).await;
            self.submit_result
                .lock()
                .unwrap()
                .take()
                .expect("submit_export called twice")
        }

        async fn task_status(&self, _task_id: &TaskId) -> Result<TaskStatusSnapshot> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            let next = self.statuses.lock().unwrap().pop_front();
            match next {
                Some(result) => result,
                None => {
                    // Script exhausted: behave like a hung service.
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    /// Sink that records every update it receives
    #[derive(Clone, Default)]
    struct RecordingSink {
        events: Arc<Mutex<Vec<(String, Option<f64>)>>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<(String, Option<f64>)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ProgressSink for RecordingSink {
        fn stage(&mut self, label: &str, progress: Option<f64>) {
            self.events
                .lock()
                .unwrap()
                .push((label.to_string(), progress));
        }
    }

    fn fast_polling() -> PollingConfig {
        PollingConfig {
            interval_ms: 10,
            stage_interval_ms: 10,
            timeout_secs: None,
        }
    }

    fn monitor_over(api: Arc<ScriptedApi>, polling: &PollingConfig) -> TaskMonitor {
        TaskMonitor::new(api, polling)
    }

    #[tokio::test]
    async fn test_watch_reports_progress_then_completes() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![
            Ok(processing("Downloading file contents...", 50.0)),
            Ok(processing("Merging output files...", 80.0)),
            Ok(success(sample_result())),
        ]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert_eq!(outcome, Some(ExportOutcome::Completed(sample_result())));
        assert_eq!(
            sink.events(),
            vec![
                ("Downloading file contents...".to_string(), Some(50.0)),
                ("Merging output files...".to_string(), Some(80.0)),
            ]
        );
        assert_eq!(api.status_calls(), 3);
    }

    #[tokio::test]
    async fn test_watch_stops_on_error_status() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![Ok(error("disk full"))]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert_eq!(outcome, Some(ExportOutcome::failed("disk full")));
        assert!(sink.events().is_empty());

        // The loop has returned; no further polls occur even after another
        // interval has passed.
        tokio::time::sleep(Duration::from_millis(35)).await;
        assert_eq!(api.status_calls(), 1);
    }

    #[tokio::test]
    async fn test_watch_stops_on_transport_failure() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![Err(
            GitExportError::Service(ServiceError::StatusUnavailable),
        )]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert_eq!(outcome, Some(ExportOutcome::failed(STATUS_UNAVAILABLE)));
        assert_eq!(api.status_calls(), 1);
    }

    #[tokio::test]
    async fn test_cancellation_suppresses_all_delivery() {
        // Empty script: the first poll hangs like an unresponsive service.
        let api = Arc::new(ScriptedApi::with_statuses(Vec::new()));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let handle = {
            let mut task_sink = sink.clone();
            tokio::spawn(async move { monitor.watch(&task_id, &mut task_sink, cancel_rx).await })
        };

        tokio::time::sleep(Duration::from_millis(25)).await;
        cancel_tx.send(true).unwrap();

        let outcome = handle.await.unwrap();
        assert_eq!(outcome, None);
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn test_watch_returns_immediately_when_already_cancelled() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![Ok(success(
            sample_result(),
        ))]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (cancel_tx, cancel_rx) = watch::channel(false);
        cancel_tx.send(true).unwrap();
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert_eq!(outcome, None);
        assert_eq!(api.status_calls(), 0);
    }

    #[tokio::test]
    async fn test_poll_timeout_bounds_a_hung_job() {
        let statuses = (0..20)
            .map(|_| Ok(processing("Filtering files...", 10.0)))
            .collect();
        let api = Arc::new(ScriptedApi::with_statuses(statuses));
        let polling = PollingConfig {
            interval_ms: 5,
            stage_interval_ms: 10,
            timeout_secs: None,
        };
        let mut monitor = monitor_over(api.clone(), &polling);
        monitor.poll_timeout = Some(Duration::from_millis(30));
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        match outcome {
            Some(ExportOutcome::Failed { message }) => {
                assert!(message.contains("stopped polling"), "got: {message}");
            }
            other => panic!("expected timeout failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_without_result_is_a_failure() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![Ok(TaskStatusSnapshot {
            state: TaskState::Success,
            stage: None,
            progress: None,
            result: None,
            message: None,
        })]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert!(matches!(outcome, Some(ExportOutcome::Failed { .. })));
    }

    #[tokio::test]
    async fn test_missing_stage_label_falls_back() {
        let api = Arc::new(ScriptedApi::with_statuses(vec![
            Ok(TaskStatusSnapshot {
                state: TaskState::Processing,
                stage: None,
                progress: Some(25.0),
                result: None,
                message: None,
            }),
            Ok(success(sample_result())),
        ]));
        let monitor = monitor_over(api.clone(), &fast_polling());
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let mut sink = RecordingSink::default();
        let task_id = TaskId::new("task-1").unwrap();

        monitor.watch(&task_id, &mut sink, cancel_rx).await;

        assert_eq!(
            sink.events(),
            vec![("Processing...".to_string(), Some(25.0))]
        );
    }

    #[tokio::test]
    async fn test_submit_with_progress_rotates_stage_labels() {
        let api = Arc::new(ScriptedApi::with_submit(
            Duration::from_millis(35),
            Ok(TaskId::new("task-9").unwrap()),
        ));
        let monitor = monitor_over(api, &fast_polling());
        let mut sink = RecordingSink::default();
        let request = ExportRequest::new("https://github.com/acme/repo");

        let task_id = monitor
            .submit_with_progress(&request, &mut sink)
            .await
            .unwrap();

        assert_eq!(task_id.as_str(), "task-9");
        let events = sink.events();
        assert!(!events.is_empty());
        assert_eq!(events[0].0, SUBMIT_STAGES[0]);
        for (label, progress) in &events {
            assert!(SUBMIT_STAGES.contains(&label.as_str()));
            assert!(progress.is_none());
        }
    }

    #[tokio::test]
    async fn test_submit_with_progress_stops_labels_on_failure() {
        let api = Arc::new(ScriptedApi::with_submit(
            Duration::from_millis(15),
            Err(GitExportError::Service(ServiceError::ConnectionFailed(
                "connection refused".to_string(),
            ))),
        ));
        let monitor = monitor_over(api, &fast_polling());
        let mut sink = RecordingSink::default();
        let request = ExportRequest::new("https://github.com/acme/repo");

        let result = monitor.submit_with_progress(&request, &mut sink).await;
        assert!(result.is_err());

        // The label timer died with the submit call; nothing arrives later.
        let before = sink.events().len();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(sink.events().len(), before);
    }
}
