pub mod errors;
pub mod graph;
pub mod graph_schema;
pub mod mutation;
