//! Core types and pure engines for touchbase
//!
//! This crate contains the domain model shared across all other crates plus
//! the pure derivation engines: daily touch status, renewal/pipeline
//! derivation, filter/sort, dashboard aggregation, and the touch streak.
//! Nothing here performs I/O; every derivation takes a caller-supplied
//! "today" so it stays deterministic and testable.

mod account;
mod activity;
mod constants;
mod contact;
mod dashboard;
mod deal;
mod env_config;
mod note;
mod status;
mod streak;
mod task;
mod view;

pub use account::*;
pub use activity::*;
pub use constants::*;
pub use contact::*;
pub use dashboard::*;
pub use deal::*;
pub use env_config::*;
pub use note::*;
pub use status::*;
pub use streak::*;
pub use task::*;
pub use view::*;
