pub mod journey;
pub mod tree_node;
