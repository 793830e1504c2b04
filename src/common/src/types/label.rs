use serde::{Deserialize, Serialize};

pub type LabelId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracer_payload: Option<String>,
}
