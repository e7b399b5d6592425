//! Store domain module.
//!
//! # Module Structure
//!
//! - `action`: typed action vocabulary and its wire form
//! - `state`: the state snapshot
//! - `reducer`: pure `(state, action) -> (state, effects)` transition
//! - `effect`: durable storage writes produced by the reducer
//! - `hydrate`: initial state from durable storage

pub mod action;
pub mod effect;
pub mod hydrate;
pub mod reducer;
pub mod state;

pub use action::{Action, LoginPayload, WireAction};
pub use effect::StorageEffect;
pub use hydrate::hydrate;
pub use reducer::{Reduction, reduce};
pub use state::StoreState;
