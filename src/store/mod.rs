//! Store layer - client-side state coordination
//!
//! [`MusicStore`] sequences one remote call per action, tracks busy flags,
//! and reconciles results into [`StoreState`], which consumers only read.

pub mod coordinator;
pub mod operation;
pub mod state;

pub use coordinator::MusicStore;
pub use operation::{Operation, OperationLoading};
pub use state::StoreState;
