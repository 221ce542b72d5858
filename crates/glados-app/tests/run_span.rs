/// E2E Test: Run span
///
/// Account spans opened while checking in must nest under the runner's
/// `run` span, which carries the run id.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use glados_app::application::config::RunConfig;
use glados_app::application::services::CheckInRunner;
use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_infrastructure::config::TimeoutConfig;
use glados_infrastructure::http::CheckinExecutor;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

struct Silent;

#[async_trait]
impl NotificationSender for Silent {
    async fn send(&self, _message: &NotificationMessage) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
struct SeenSpan {
    name: String,
    parent: Option<String>,
    run_id: Option<String>,
}

#[derive(Clone, Default)]
struct SpanRecorder(Arc<Mutex<Vec<SeenSpan>>>);

struct RunIdVisitor(Option<String>);

impl Visit for RunIdVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "run_id" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S> Layer<S> for SpanRecorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut visitor = RunIdVisitor(None);
        attrs.record(&mut visitor);

        let parent = ctx
            .span(id)
            .and_then(|span| span.parent())
            .map(|parent| parent.name().to_string());

        self.0.lock().unwrap().push(SeenSpan {
            name: attrs.metadata().name().to_string(),
            parent,
            run_id: visitor.0,
        });
    }
}

#[tokio::test]
async fn e2e_account_spans_nest_under_run_span() {
    let recorder = SpanRecorder::default();
    let _guard = tracing::subscriber::set_default(Registry::default().with(recorder.clone()));

    let executor = CheckinExecutor::with_timeouts(TimeoutConfig::new().without_pause())
        .expect("executor should build");
    let runner = CheckInRunner::new(executor, Arc::new(Silent), Duration::ZERO);

    // Nothing listens on port 1, so both accounts fail fast
    let config = RunConfig::from_lookup(|key| match key {
        "COOKIES" => Some("sess=one&sess=two".to_string()),
        "GLADOS_CHECKIN_URL" => Some("http://127.0.0.1:1/api/user/checkin".to_string()),
        "GLADOS_STATUS_URL" => Some("http://127.0.0.1:1/api/user/status".to_string()),
        _ => None,
    });

    let report = runner.check_in_all(&config).await;
    assert_eq!(report.results.len(), 2);

    let spans = recorder.0.lock().unwrap().clone();

    let run = spans
        .iter()
        .find(|span| span.name == "run")
        .expect("run span recorded");
    assert_eq!(run.run_id.as_deref(), Some(runner.run_id().to_string().as_str()));

    let accounts: Vec<_> = spans.iter().filter(|span| span.name == "account").collect();
    assert_eq!(accounts.len(), 2);
    assert!(accounts
        .iter()
        .all(|span| span.parent.as_deref() == Some("run")));
}
