//! The dashboard: one session's orchestrator for analysis submissions.
//!
//! A submission is validated, routed by the current connectivity state to the
//! remote or synthetic backend, mapped into an [`AnalysisResult`], and stored
//! as the current result and at the head of history. Remote failures are
//! returned to the caller and leave history untouched.
//!
//! At most one submission per modality is in flight. Submissions of different
//! modalities may overlap; the current result is whichever completed last.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Local;
use verity_client::{ApiClient, ClientError};
use verity_config::VerityConfig;
use verity_core::{
    AnalysisRequest, AnalysisResult, ConnectivityState, HistoryEntry, Modality,
};

use crate::analytics::AnalyticsSummary;
use crate::backend::{AnalysisBackend, RemoteBackend, SyntheticBackend};
use crate::error::AnalysisError;
use crate::history::History;
use crate::mapping;
use crate::monitor::{ConnectivityMonitor, MonitorTiming};
use crate::probe::BackendProbe;
use crate::report;
use crate::session::SessionContext;

/// Outcome of [`Dashboard::submit`] that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Result stored as current and prepended to history.
    Completed(HistoryEntry),
    /// Nothing was sent.
    Skipped(SkipReason),
    /// A result arrived after teardown and was dropped.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only input.
    EmptyInput,
    /// A submission for the same modality is still running.
    InFlight,
}

#[derive(Debug, Default)]
struct DashboardState {
    current: Option<HistoryEntry>,
    history: History,
    in_flight: [bool; Modality::ALL.len()],
    torn_down: bool,
    /// Bumped on every teardown so late results can tell they are stale.
    epoch: u64,
}

pub struct Dashboard {
    session: Mutex<Option<SessionContext>>,
    monitor: ConnectivityMonitor,
    remote: Arc<dyn AnalysisBackend>,
    synthetic: Arc<dyn AnalysisBackend>,
    state: Mutex<DashboardState>,
}

impl Dashboard {
    #[must_use]
    pub fn new(
        session: SessionContext,
        monitor: ConnectivityMonitor,
        remote: Arc<dyn AnalysisBackend>,
        synthetic: Arc<dyn AnalysisBackend>,
    ) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            monitor,
            remote,
            synthetic,
            state: Mutex::new(DashboardState::default()),
        }
    }

    /// Wire a dashboard against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client cannot be built.
    pub fn from_config(session: SessionContext, config: &VerityConfig) -> Result<Self, ClientError> {
        let client = ApiClient::new(&config.backend)?;
        let probe = BackendProbe::new(client.clone(), config.monitor.probe_timeout());
        let monitor = ConnectivityMonitor::new(Arc::new(probe), MonitorTiming::from(&config.monitor));
        Ok(Self::new(
            session,
            monitor,
            Arc::new(RemoteBackend::new(client)),
            Arc::new(SyntheticBackend::new(config.fallback.strategy)),
        ))
    }

    /// Reset connectivity to `checking` and start monitoring.
    ///
    /// Also revives a torn-down dashboard. Must be called from within a
    /// tokio runtime.
    pub fn activate(&self) {
        self.lock_state().torn_down = false;
        self.monitor.start();
    }

    /// Stop monitoring and ignore results of submissions still in flight.
    pub fn teardown(&self) {
        self.monitor.stop();
        let mut state = self.lock_state();
        if !state.torn_down {
            state.torn_down = true;
            state.epoch += 1;
            state.in_flight = [false; Modality::ALL.len()];
            tracing::debug!("dashboard torn down");
        }
    }

    /// Tear down, clear the current result and history, and end the session.
    pub fn logout(&self) -> Option<SessionContext> {
        self.teardown();
        {
            let mut state = self.lock_state();
            state.current = None;
            state.history.clear();
        }
        let session = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(session) = &session {
            tracing::info!(user = session.display_name(), "logged out");
        }
        session
    }

    /// Analyze one request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when the remote backend fails or answers with
    /// an unusable body, or [`AnalysisError::TornDown`] after teardown.
    pub async fn submit(&self, request: AnalysisRequest) -> Result<Submission, AnalysisError> {
        if let Err(e) = request.validate() {
            tracing::debug!(%e, "submission skipped");
            return Ok(Submission::Skipped(SkipReason::EmptyInput));
        }

        let modality = request.modality();
        let epoch = {
            let mut state = self.lock_state();
            if state.torn_down {
                return Err(AnalysisError::TornDown);
            }
            if state.in_flight[modality.index()] {
                tracing::debug!(modality = modality.as_str(), "analysis already in flight");
                return Ok(Submission::Skipped(SkipReason::InFlight));
            }
            state.in_flight[modality.index()] = true;
            state.epoch
        };
        let _guard = InFlightGuard {
            state: &self.state,
            modality,
            epoch,
        };

        let connectivity = self.monitor.state();
        let backend = if connectivity.routes_remote() {
            &self.remote
        } else {
            &self.synthetic
        };
        tracing::info!(
            modality = modality.as_str(),
            backend = backend.name(),
            connectivity = connectivity.as_str(),
            "analysis dispatched"
        );

        let response = backend.analyze(&request).await.inspect_err(|e| {
            tracing::warn!(modality = modality.as_str(), error = %e, "analysis failed");
        })?;
        let result = mapping::map_response(&response, &request, Local::now().date_naive())?;

        let mut state = self.lock_state();
        if state.torn_down || state.epoch != epoch {
            tracing::debug!(modality = modality.as_str(), "late result discarded");
            return Ok(Submission::Discarded);
        }
        let entry = state.history.push(result, source_label(&request));
        state.current = Some(entry.clone());
        tracing::info!(
            id = entry.id,
            verdict = %entry.result.verdict,
            confidence = entry.result.confidence_score,
            "analysis completed"
        );
        Ok(Submission::Completed(entry))
    }

    /// Most recently completed result.
    #[must_use]
    pub fn current(&self) -> Option<AnalysisResult> {
        self.lock_state().current.as_ref().map(|e| e.result.clone())
    }

    /// History snapshot, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock_state().history.entries()
    }

    #[must_use]
    pub fn is_analyzing(&self, modality: Modality) -> bool {
        self.lock_state().in_flight[modality.index()]
    }

    #[must_use]
    pub fn connectivity(&self) -> ConnectivityState {
        self.monitor.state()
    }

    #[must_use]
    pub const fn monitor(&self) -> &ConnectivityMonitor {
        &self.monitor
    }

    /// Wait for the first probe cycle after activation, at most `limit`.
    pub async fn wait_for_connectivity(&self, limit: Duration) -> ConnectivityState {
        tokio::time::timeout(limit, self.monitor.settled())
            .await
            .unwrap_or_else(|_| self.monitor.state())
    }

    #[must_use]
    pub fn session(&self) -> Option<SessionContext> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text report of the current result.
    #[must_use]
    pub fn report(&self) -> Option<String> {
        let current = self.current()?;
        let session = self.session();
        let user = session.as_ref().map_or("Guest", SessionContext::display_name);
        Some(report::render(&current, user, Local::now()))
    }

    #[must_use]
    pub fn analytics(&self) -> AnalyticsSummary {
        AnalyticsSummary::from_history(self.lock_state().history.iter())
    }

    fn lock_state(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Clears the in-flight flag however the submission ends.
struct InFlightGuard<'a> {
    state: &'a Mutex<DashboardState>,
    modality: Modality,
    epoch: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.epoch == self.epoch {
            state.in_flight[self.modality.index()] = false;
        }
    }
}

/// Display label for a history entry: the host of a URL submission.
fn source_label(request: &AnalysisRequest) -> Option<String> {
    match request {
        AnalysisRequest::Url { address } => reqwest::Url::parse(address.trim())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string)),
        AnalysisRequest::Text { .. } | AnalysisRequest::Image { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{HealthProbe, ProbeAttempt};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use verity_config::FallbackStrategy;
    use verity_core::Verdict;
    use verity_core::wire::AnalysisResponse;

    struct FixedProbe(ProbeAttempt);

    #[async_trait]
    impl HealthProbe for FixedProbe {
        async fn probe(&self) -> ProbeAttempt {
            self.0
        }
    }

    /// Answers `REAL` at 0.9, or fails when `fail` is set. Text requests
    /// take `text_latency`; the others answer immediately.
    struct StubBackend {
        text_latency: Duration,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new(text_latency: Duration) -> Arc<Self> {
            Arc::new(Self {
                text_latency,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                text_latency: Duration::ZERO,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn analyze(
            &self,
            request: &AnalysisRequest,
        ) -> Result<AnalysisResponse, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.modality() == Modality::Text {
                tokio::time::sleep(self.text_latency).await;
            }
            if self.fail {
                return Err(AnalysisError::Client(ClientError::Api {
                    status: 500,
                    message: "Analysis failed".into(),
                }));
            }
            Ok(serde_json::from_str(r#"{"verdict": "REAL", "confidence": 0.9}"#).unwrap())
        }
    }

    fn dashboard(probe: ProbeAttempt, remote: Arc<StubBackend>) -> Dashboard {
        Dashboard::new(
            SessionContext::guest(),
            ConnectivityMonitor::new(Arc::new(FixedProbe(probe)), MonitorTiming::default()),
            remote,
            Arc::new(SyntheticBackend::new(FallbackStrategy::Heuristic)),
        )
    }

    fn completed(submission: Submission) -> HistoryEntry {
        match submission {
            Submission::Completed(entry) => entry,
            other => panic!("expected completed submission, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn online_routes_to_remote() {
        let remote = StubBackend::new(Duration::ZERO);
        let dashboard = dashboard(ProbeAttempt::Healthy, Arc::clone(&remote));
        dashboard.monitor().probe_now().await;

        let entry = completed(dashboard.submit(AnalysisRequest::text("hello")).await.unwrap());
        assert_eq!(remote.calls(), 1);
        assert_eq!(entry.result.confidence_score, 90);
        assert_eq!(dashboard.current(), Some(entry.result));
    }

    #[tokio::test(start_paused = true)]
    async fn checking_and_offline_use_synthetic() {
        let remote = StubBackend::new(Duration::ZERO);
        let dashboard = dashboard(ProbeAttempt::Unhealthy, Arc::clone(&remote));
        assert_eq!(dashboard.connectivity(), ConnectivityState::Checking);

        let first = dashboard
            .submit(AnalysisRequest::text("Shocking secret cover-up"))
            .await
            .unwrap();
        assert_eq!(completed(first).result.verdict, Verdict::Fake);

        dashboard.monitor().probe_now().await;
        assert_eq!(dashboard.connectivity(), ConnectivityState::Offline);
        completed(dashboard.submit(AnalysisRequest::url("https://x.io")).await.unwrap());

        assert_eq!(remote.calls(), 0);
        assert_eq!(dashboard.history().len(), 2);
    }

    #[tokio::test]
    async fn empty_input_is_skipped() {
        let remote = StubBackend::new(Duration::ZERO);
        let dashboard = dashboard(ProbeAttempt::Healthy, Arc::clone(&remote));
        dashboard.monitor().probe_now().await;

        for request in [AnalysisRequest::text("  \n"), AnalysisRequest::url("")] {
            assert_eq!(
                dashboard.submit(request).await.unwrap(),
                Submission::Skipped(SkipReason::EmptyInput)
            );
        }
        assert_eq!(remote.calls(), 0);
        assert!(dashboard.history().is_empty());
    }

    #[tokio::test]
    async fn remote_failure_leaves_history_untouched() {
        let dashboard = dashboard(ProbeAttempt::Healthy, StubBackend::failing());
        dashboard.monitor().probe_now().await;

        let err = dashboard.submit(AnalysisRequest::text("hello")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Client(ClientError::Api { status: 500, .. })));
        assert!(dashboard.history().is_empty());
        assert!(dashboard.current().is_none());
        assert!(!dashboard.is_analyzing(Modality::Text));
    }

    #[tokio::test(start_paused = true)]
    async fn same_modality_is_not_submitted_twice() {
        let remote = StubBackend::new(Duration::from_secs(2));
        let dashboard = dashboard(ProbeAttempt::Healthy, Arc::clone(&remote));
        dashboard.monitor().probe_now().await;

        let (first, second) = tokio::join!(
            dashboard.submit(AnalysisRequest::text("one")),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                assert!(dashboard.is_analyzing(Modality::Text));
                dashboard.submit(AnalysisRequest::text("two")).await
            }
        );
        completed(first.unwrap());
        assert_eq!(second.unwrap(), Submission::Skipped(SkipReason::InFlight));
        assert_eq!(remote.calls(), 1);
        assert!(!dashboard.is_analyzing(Modality::Text));
    }

    #[tokio::test(start_paused = true)]
    async fn current_follows_completion_order() {
        let remote = StubBackend::new(Duration::from_secs(3));
        let dashboard = dashboard(ProbeAttempt::Healthy, Arc::clone(&remote));
        dashboard.monitor().probe_now().await;

        // Text starts first but completes last.
        let (text, url) = tokio::join!(
            dashboard.submit(AnalysisRequest::text("started first")),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                dashboard.submit(AnalysisRequest::url("https://news.example.com/a")).await
            }
        );
        let text = completed(text.unwrap());
        let url = completed(url.unwrap());

        assert!(url.id < text.id);
        assert_eq!(dashboard.current(), Some(text.result.clone()));
        let history = dashboard.history();
        assert_eq!(history[0].id, text.id);
        assert_eq!(history[1].source.as_deref(), Some("news.example.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn late_result_after_teardown_is_discarded() {
        let remote = StubBackend::new(Duration::from_secs(5));
        let dashboard = dashboard(ProbeAttempt::Healthy, Arc::clone(&remote));
        dashboard.monitor().probe_now().await;

        let (submission, ()) = tokio::join!(dashboard.submit(AnalysisRequest::text("slow")), async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            dashboard.teardown();
        });
        assert_eq!(submission.unwrap(), Submission::Discarded);
        assert!(dashboard.history().is_empty());

        assert!(matches!(
            dashboard.submit(AnalysisRequest::text("again")).await,
            Err(AnalysisError::TornDown)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_everything() {
        let dashboard = dashboard(ProbeAttempt::Unhealthy, StubBackend::new(Duration::ZERO));
        dashboard.activate();
        assert_eq!(
            dashboard.wait_for_connectivity(Duration::from_secs(10)).await,
            ConnectivityState::Offline
        );

        completed(dashboard.submit(AnalysisRequest::text("a")).await.unwrap());
        completed(dashboard.submit(AnalysisRequest::text("b")).await.unwrap());
        assert_eq!(dashboard.analytics().total, 2);
        assert!(dashboard.report().unwrap().contains("User: Guest"));

        let session = dashboard.logout();
        assert!(session.is_some());
        assert!(dashboard.session().is_none());
        assert!(dashboard.current().is_none());
        assert!(dashboard.history().is_empty());
        assert!(!dashboard.monitor().is_running());
        assert!(dashboard.report().is_none());
    }

    #[test]
    fn url_source_label_is_host() {
        assert_eq!(
            source_label(&AnalysisRequest::url(" https://www.bbc.co.uk/news/1 ")),
            Some("www.bbc.co.uk".to_string())
        );
        assert_eq!(source_label(&AnalysisRequest::url("not a url")), None);
        assert_eq!(source_label(&AnalysisRequest::text("x")), None);
    }
}
