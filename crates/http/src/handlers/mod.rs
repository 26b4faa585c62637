#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]

pub mod accounts;
pub mod activities;
pub mod crm;
pub mod dashboard;
pub mod notes;
pub mod sync;
pub mod tasks;
