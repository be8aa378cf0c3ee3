pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod identifier;
pub mod logger;
pub mod obfuscator;
pub mod patterns;

pub use generator::{FakeValueGenerator, FixedGenerator, SsnGenerator};
pub use identifier::IdentifierType;
pub use obfuscator::{
    obfuscate, ObfuscationError, ObfuscationOutcome, ObfuscationRequest, Obfuscator,
    ReplacementMode,
};
pub use patterns::{PatternRegistry, PatternSpec, DEFAULT_REGISTRY};
