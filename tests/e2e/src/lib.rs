//! Shared helpers for the SpacedCode end-to-end test suite

pub mod mocks;

pub use mocks::fixtures;
