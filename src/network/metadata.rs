use serde::{Deserialize, Serialize};

/// Optional annotations attached to a saved `TopologySpec`.
/// All fields are Option<> so specs without metadata deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    /// Human-readable labels for the output layer (e.g. ["setosa","versicolor"]).
    pub output_labels: Option<Vec<String>>,
}
