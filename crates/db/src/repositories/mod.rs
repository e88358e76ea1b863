pub mod journey_repo;
pub mod tree_node_repo;

pub use journey_repo::JourneyRepo;
pub use tree_node_repo::TreeNodeRepo;
