pub mod graph_error;
pub mod ingest_error;
pub mod traversal_error;

pub use graph_error::GraphError;
pub use ingest_error::IngestError;
pub use traversal_error::TraversalError;
