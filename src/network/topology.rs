use crate::error::NetworkError;
use crate::math::matrix::Matrix;

/// Fixed structural description of a network: layer sizes plus one weight
/// matrix per layer transition. Never mutated after construction.
///
/// Weight matrix `k` maps layer `k` to layer `k + 1`: one row per destination
/// neuron, one column per source neuron plus a leading bias column. Folding
/// the bias into the matrix lets the whole layer transition run as a single
/// matrix-vector product against a bias-augmented activation vector.
#[derive(Debug, Clone)]
pub struct NetworkTopology {
    input_count: usize,
    hidden_layer_sizes: Vec<usize>,
    output_count: usize,
    weights: Vec<Matrix>,
}

impl NetworkTopology {
    /// Validates the shape contract and assembles a topology.
    ///
    /// `total_layer_count` counts the input and output layers, so
    /// `hidden_layer_sizes` must hold exactly `total_layer_count - 2` entries
    /// and `weights` one matrix more than that. Weight values themselves are
    /// taken as-is; NaN and infinity flow through the math untouched.
    pub fn new(
        input_count: usize,
        total_layer_count: usize,
        hidden_layer_sizes: Vec<usize>,
        output_count: usize,
        weights: Vec<Matrix>,
    ) -> Result<NetworkTopology, NetworkError> {
        if total_layer_count.checked_sub(2) != Some(hidden_layer_sizes.len()) {
            return Err(NetworkError::InvalidTopology(format!(
                "{} hidden layer sizes do not fit a {}-layer network",
                hidden_layer_sizes.len(),
                total_layer_count
            )));
        }
        if weights.len() != hidden_layer_sizes.len() + 1 {
            return Err(NetworkError::InvalidTopology(format!(
                "expected {} weight matrices, got {}",
                hidden_layer_sizes.len() + 1,
                weights.len()
            )));
        }

        let topology = NetworkTopology {
            input_count,
            hidden_layer_sizes,
            output_count,
            weights,
        };
        topology.check_weight_shapes()?;
        Ok(topology)
    }

    fn check_weight_shapes(&self) -> Result<(), NetworkError> {
        for (k, matrix) in self.weights.iter().enumerate() {
            let rows = self.layer_size(k + 1);
            let cols = self.layer_size(k) + 1;
            if !shape_matches(matrix, rows, cols) {
                return Err(NetworkError::InvalidTopology(format!(
                    "weight matrix {} must be {}x{} (destination neurons x source neurons plus bias)",
                    k, rows, cols
                )));
            }
        }
        Ok(())
    }

    /// Neuron count of layer `index` (0 = input, last = output), bias excluded.
    pub fn layer_size(&self, index: usize) -> usize {
        if index == 0 {
            self.input_count
        } else if index <= self.hidden_layer_sizes.len() {
            self.hidden_layer_sizes[index - 1]
        } else {
            self.output_count
        }
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn hidden_layer_count(&self) -> usize {
        self.hidden_layer_sizes.len()
    }

    pub fn hidden_layer_sizes(&self) -> &[usize] {
        &self.hidden_layer_sizes
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }
}

/// `Matrix` carries its dimensions as plain fields, so the stored data is
/// checked row by row rather than trusting `rows`/`cols`.
fn shape_matches(matrix: &Matrix, rows: usize, cols: usize) -> bool {
    matrix.rows == rows
        && matrix.cols == cols
        && matrix.data.len() == rows
        && matrix.data.iter().all(|row| row.len() == cols)
}
