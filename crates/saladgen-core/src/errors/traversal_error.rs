/// Traversal engine errors.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// A traverser cannot be constructed over a graph with no ingredients.
    #[error("cannot traverse an empty graph")]
    EmptyGraph,

    /// A quota range is inverted, or a kind present in the graph has no
    /// quota entry.
    #[error("invalid quota: {reason}")]
    InvalidQuota { reason: String },

    /// `select` was called with an ingredient absent from the latest
    /// candidate list: unknown, already selected, not offered this round,
    /// or its kind is saturated.
    #[error("ingredient {name:?} is not eligible for selection")]
    SelectionIneligible { name: String },
}
