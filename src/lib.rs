//! Randomized email subscription fixtures.
//!
//! A [`Generator`](generator::Generator) produces [`Subscription`] records
//! with random identities and preference subsets; [`output`] encodes them as
//! a JSON array and writes them to disk.

pub mod generator;
pub mod output;
pub mod preferences;
pub mod subscription;

pub use generator::{GenerateError, Generator};
pub use preferences::Preference;
pub use subscription::Subscription;
