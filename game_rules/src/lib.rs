//! # Game Rules
//!
//! The rules engine for TextBlade battles: entity and character models, skill and
//! equipment data, the world-state switch registry, and the resolvers that turn
//! battle commands into stat changes and narrative lines.
//!
//! Everything here is synchronous. The switch registry is an owned value that is
//! passed by reference into whatever needs it; there is no global state.

pub mod battle;
pub mod config;
pub mod entities;
pub mod error;
pub mod mechanics;
pub mod narrative;
pub mod progression;
pub mod world_state;

pub use battle::*;
pub use config::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use narrative::*;
pub use progression::*;
pub use world_state::*;
