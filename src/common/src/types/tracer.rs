use serde::{Deserialize, Serialize};

pub type TracerId = u64;

/// An instrumentation point tracked by the tracer API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracer {
    pub id: TracerId,
    pub tracer_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub hits: u32,
    pub events: Vec<TracerEvent>,
}

/// An occurrence of a tracer, keyed to its parent through `tracer_id`.
///
/// The client overwrites `tracer_id` right before submission, so whatever the
/// caller put there is not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerEvent {
    pub id: u64,
    pub tracer_id: TracerId,
    pub raw_event: String,
    pub event_url: String,
    pub event_type: String,
}

/// Bundle posted to `/tracers`: the originating request plus the tracers found in it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    pub raw_request: String,
    pub request_url: String,
    pub request_method: String,
    pub tracers: Vec<Tracer>,
}
