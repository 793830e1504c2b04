mod label;
mod tracer;

pub use label::{Label, LabelId};
pub use tracer::{Request, Tracer, TracerEvent, TracerId};
