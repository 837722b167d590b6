pub mod cli;
pub mod constants;
pub mod error;
pub mod generate;
pub mod logger;
pub mod manifest;
pub mod verify;

pub use error::{FixtureError, Result};
pub use generate::{generate_fixtures, random_bytes, GenerateOptions, GenerationReport};
pub use manifest::{fixture_directories, manifest, FixtureContent, FixtureEntry, MANIFEST};
pub use verify::{verify_fixtures, VerificationReport};
