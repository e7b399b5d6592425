//! Project domain module.
//!
//! Projects are fetched by collaborators and cached by the store,
//! partitioned by the caller's role.

mod model;

pub use model::{Project, ProjectCache};
