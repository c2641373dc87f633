// Topic model: signatures, the registry that pairs them with names, and
// Jaccard-based classification against it.

pub mod classifier;
pub mod registry;
pub mod signature;
pub mod similarity;
