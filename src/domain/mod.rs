//! Domain layer: the bookmark tree, its error taxonomy and the ports implemented by infrastructure.

pub mod error;
pub mod format;
pub mod model;
pub mod traits;
