//! Questionnaire lifecycle events and the sinks that receive them.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub const FORM_START: &str = "form_start";
pub const FORM_STEP_COMPLETE: &str = "form_step_complete";
pub const FORM_SUBMISSION: &str = "form_submission";
pub const RECOMMENDATION_VIEW: &str = "recommendation_view";
pub const FORM_ERROR: &str = "form_error";
pub const FORM_RESTART: &str = "form_restart";

/// Scalar parameter value attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl From<&str> for EventValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EventValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for EventValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for EventValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: BTreeMap<&'static str, EventValue>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl Into<EventValue>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&EventValue> {
        self.params.get(key)
    }

    /// Flattens the event into the `{"event": name, ...params}` shape that
    /// tag-manager data layers expect.
    pub fn data_layer_entry(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("event".to_string(), Value::String(self.name.to_string()));
        for (key, value) in &self.params {
            let value = serde_json::to_value(value).unwrap_or(Value::Null);
            entry.insert((*key).to_string(), value);
        }
        Value::Object(entry)
    }
}

/// Destination for analytics events. Delivery is fire-and-forget.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Forwards to `sink` when one is configured; otherwise does nothing.
pub fn dispatch(sink: Option<&dyn AnalyticsSink>, event: &AnalyticsEvent) {
    if let Some(sink) = sink {
        sink.track(event);
    }
}

/// Emits events as structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(
            event = event.name,
            params = %event.data_layer_entry(),
            "analytics event"
        );
    }
}

/// Collects events in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|event| event.name).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: &AnalyticsEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}
