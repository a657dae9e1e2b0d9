//! Helpers shared between the crates of the octopoint workspace.

pub mod macros;
