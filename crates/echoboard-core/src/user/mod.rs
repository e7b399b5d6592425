//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile snapshot held by the session
//!
//! # Usage
//!
//! ```ignore
//! use echoboard_core::user::UserProfile;
//! ```

mod model;

// Re-export public API
pub use model::UserProfile;
