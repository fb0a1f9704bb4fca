use serde::{Serialize, Deserialize};
use crate::error::NetworkError;
use crate::math::matrix::Matrix;
use crate::network::metadata::ModelMetadata;
use crate::network::topology::NetworkTopology;

/// A fully serializable description of a network architecture, stored
/// independently of any weight set.
///
/// `TopologySpec` can be saved to / loaded from JSON and later paired with
/// weights produced elsewhere (a trainer, a format converter) through
/// [`TopologySpec::build`]. Only shapes are described here; the weights
/// themselves never pass through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologySpec {
    /// Human-readable name used as the spec file stem.
    pub name: String,
    /// Raw input vector size, bias excluded.
    pub input_count: usize,
    /// Hidden layer sizes, input side first. May be empty.
    pub hidden_layer_sizes: Vec<usize>,
    /// Output layer size.
    pub output_count: usize,
    /// Optional metadata (description, output labels).
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl TopologySpec {
    /// Total layer count including the input and output layers.
    pub fn total_layer_count(&self) -> usize {
        self.hidden_layer_sizes.len() + 2
    }

    /// The `(rows, cols)` shape each supplied weight matrix must have, in
    /// layer order. Columns include the bias column of the source layer.
    pub fn weight_shapes(&self) -> Vec<(usize, usize)> {
        let mut sizes = Vec::with_capacity(self.total_layer_count());
        sizes.push(self.input_count);
        sizes.extend_from_slice(&self.hidden_layer_sizes);
        sizes.push(self.output_count);

        sizes.windows(2).map(|pair| (pair[1], pair[0] + 1)).collect()
    }

    /// Pairs this spec with an externally supplied weight set.
    pub fn build(&self, weights: Vec<Matrix>) -> Result<NetworkTopology, NetworkError> {
        NetworkTopology::new(
            self.input_count,
            self.total_layer_count(),
            self.hidden_layer_sizes.clone(),
            self.output_count,
            weights,
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TopologySpec` from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TopologySpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
