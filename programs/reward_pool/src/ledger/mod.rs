//! Host-agnostic reward pool accounting.
//!
//! The instruction handlers and the in-memory `RewardBook` both drive the
//! same state machine in `machine`, so the rules are enforced identically on
//! chain and in simulation.

pub mod authority;
pub mod book;
pub mod machine;
pub mod policy;
pub mod vault;

pub use authority::*;
pub use book::*;
pub use machine::*;
pub use policy::*;
pub use vault::*;
