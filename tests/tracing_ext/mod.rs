use error_taxon::tracing_ext::ResultSpanExt;
use error_taxon::Namespace;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Record = HashMap<String, String>;

/// Layer keeping the fields of every event it sees.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<Record>>>);

impl Captured {
    fn events(&self) -> Vec<Record> {
        self.0.lock().unwrap().clone()
    }
}

struct Fields(Record);

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields(Record::new());
        fields.0.insert("level".to_owned(), event.metadata().level().to_string());
        event.record(&mut fields);
        self.0.lock().unwrap().push(fields.0);
    }
}

#[test]
fn record_emits_one_event_with_annotations() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    let err = Namespace::new("profile_store", &[])
        .class("unavailable", &[])
        .error("replica lagging")
        .annotate()
        .hint("retry against the primary")
        .domain("accounts")
        .owner("storage-team")
        .public("profile temporarily unavailable")
        .tag("region", "eu-west")
        .done();

    tracing::subscriber::with_default(subscriber, || err.record(Level::WARN));

    let events = captured.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["level"], "WARN");
    assert_eq!(event["class"], "profile_store.unavailable");
    assert_eq!(event["message"], "replica lagging");
    assert_eq!(event["hint"], "retry against the primary");
    assert_eq!(event["domain"], "accounts");
    assert_eq!(event["owner"], "storage-team");
    assert_eq!(event["public"], "profile temporarily unavailable");
    assert!(event["tags"].contains("eu-west"));
    assert_eq!(event["error"], err.to_string());
    assert!(event["stacktrace"].contains(" at "));
    assert!(!event.contains_key("trace_id"));
}

#[test]
fn in_current_span_stamps_the_entered_span() {
    let subscriber = tracing_subscriber::registry().with(Captured::default());

    let err = tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("load_profile");
        let _guard = span.enter();
        let failed: Result<(), io::Error> = Err(io::Error::other("refused"));
        failed.in_current_span().unwrap_err()
    });

    assert_eq!(err.span(), Some("load_profile"));
    assert_eq!(err.summary(), "refused");
    assert!(err.stack_trace().is_some());
}

#[test]
fn in_span_keeps_structured_errors_and_their_trace() {
    let subscriber = tracing_subscriber::registry().with(Captured::default());
    let cause = Namespace::new("span_keep", &[]).class("c", &[]).error("boom");

    let err = tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("sync_ledger");
        Err::<(), _>(cause.clone()).in_span(&span).unwrap_err()
    });

    assert_eq!(err.span(), Some("sync_ledger"));
    assert_eq!(err.message(), "boom");
    assert_eq!(
        err.stack_trace().map(|t| t.addresses().to_vec()),
        cause.stack_trace().map(|t| t.addresses().to_vec())
    );
}
