//! Application layer: the store container and the helpers collaborators use
//! to report their outcomes into it.

pub mod outcome;
pub mod store;

pub use outcome::ApiOutcome;
pub use store::Store;
