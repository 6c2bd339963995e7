/// Similarity graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// No ingredient with the given name exists in the graph.
    #[error("no ingredient named {name:?} in the graph")]
    NotFound { name: String },

    /// Both endpoints exist but no edge connects them. Deliberately
    /// distinct from a zero-weight edge.
    #[error("no edge between {a:?} and {b:?}")]
    EdgeNotFound { a: String, b: String },

    /// A malformed mapping was supplied at graph construction.
    #[error("invalid edge: {reason}")]
    InvalidEdge { reason: String },
}
