//! Shared test utilities for the stagehand workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`fs`]: [`FakeFileSystem`] with a pinned working directory
//! - [`tree`]: [`TestTree`] builder for project and key directories on disk

pub mod fs;
pub mod tree;

pub use fs::FakeFileSystem;
pub use tree::TestTree;
