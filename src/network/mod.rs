pub mod cache;
pub mod metadata;
pub mod network;
pub mod spec;
pub mod topology;

pub use cache::ActivationCache;
pub use network::FeedForwardNetwork;
pub use spec::TopologySpec;
pub use topology::NetworkTopology;
