//! GitHub implementation of the remote repository seam.

pub mod client;
pub mod models;

pub use client::{GitHubClient, GitHubRepository};
