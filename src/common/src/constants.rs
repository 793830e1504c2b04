/// Configuration key holding the `host:port` of the tracer API.
pub const TRACER_SERVER_KEY: &str = "tracer-server";
pub const TRACER_SERVER_ENV: &str = "TRACER_SERVER";

pub const DEFAULT_CONFIG_FILE: &str = "tracer.toml";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub const TRACERS_PATH: &str = "tracers";
pub const EVENTS_PATH: &str = "events";
pub const LABELS_PATH: &str = "labels";
