pub mod math;
pub mod activation;
pub mod network;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::sigmoid;
pub use network::cache::ActivationCache;
pub use network::metadata::ModelMetadata;
pub use network::network::FeedForwardNetwork;
pub use network::spec::TopologySpec;
pub use network::topology::NetworkTopology;
pub use error::NetworkError;
