use crate::activation::activation::sigmoid;
use crate::error::NetworkError;
use crate::math::matrix::Matrix;
use crate::network::cache::ActivationCache;
use crate::network::topology::NetworkTopology;

/// A fully-connected, sigmoid-activated network evaluated one input vector at
/// a time. Weights come from elsewhere; this type only runs them forward.
///
/// The activation cache belongs exclusively to the instance and `fire` takes
/// `&mut self`, so concurrent calls on one network are a compile error rather
/// than a data race. Use one instance per thread, or wrap it in a lock.
#[derive(Debug)]
pub struct FeedForwardNetwork {
    topology: NetworkTopology,
    cache: ActivationCache,
}

impl FeedForwardNetwork {
    /// Validates the topology parameters and allocates the layer caches.
    pub fn new(
        input_count: usize,
        total_layer_count: usize,
        hidden_layer_sizes: Vec<usize>,
        output_count: usize,
        weights: Vec<Matrix>,
    ) -> Result<FeedForwardNetwork, NetworkError> {
        let topology = NetworkTopology::new(
            input_count,
            total_layer_count,
            hidden_layer_sizes,
            output_count,
            weights,
        )?;
        Ok(FeedForwardNetwork::from_topology(topology))
    }

    /// Wraps an already-validated topology.
    pub fn from_topology(topology: NetworkTopology) -> FeedForwardNetwork {
        let cache = ActivationCache::new(&topology);
        FeedForwardNetwork { topology, cache }
    }

    pub fn topology(&self) -> &NetworkTopology {
        &self.topology
    }

    /// Read-only view of the layer buffers as left by the last `fire` call.
    pub fn cache(&self) -> &ActivationCache {
        &self.cache
    }

    /// Runs one forward pass and returns the output layer activations.
    ///
    /// `inputs` must hold exactly `input_count` values; the length check runs
    /// before any buffer is touched, so a rejected call leaves the cache as
    /// the previous pass wrote it. The returned vector is a copy, detached
    /// from the cache that later calls rewrite. Identical inputs produce
    /// bit-identical outputs.
    pub fn fire(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if inputs.len() != self.topology.input_count() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.topology.input_count(),
                actual: inputs.len(),
            });
        }

        self.cache.input[0] = 1.0;
        self.cache.input[1..].copy_from_slice(inputs);
        self.cache.hidden[0].copy_from_slice(&self.cache.input);

        // Each hidden layer reads the fully-computed activations of the
        // previous one, strictly left to right.
        for layer in 1..=self.topology.hidden_layer_count() {
            let (done, rest) = self.cache.hidden.split_at_mut(layer);
            let prev = &done[layer - 1];
            let curr = &mut rest[0];

            // The raw product lands after the bias slot, so index 0 only
            // ever holds the constant.
            self.topology.weights()[layer - 1].mul_vec_into(prev, &mut curr[1..]);
            curr[0] = 1.0;
            for value in &mut curr[1..] {
                *value = sigmoid(*value);
            }
        }

        let last = self.topology.hidden_layer_count();
        self.topology.weights()[last].mul_vec_into(&self.cache.hidden[last], &mut self.cache.output);
        for value in &mut self.cache.output {
            *value = sigmoid(*value);
        }

        Ok(self.cache.output.clone())
    }
}
