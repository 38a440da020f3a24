//! Input preparation: raw field sanitization and frequency pruning.

mod coordinates;
mod frequency;

pub use coordinates::{clean_coordinate, parse_volume};
pub use frequency::{prune_infrequent, PruneStats};
