// Drivers that run the core over a whole directory-of-topics dataset.

pub mod evaluate;
pub mod train;
