//! Fake value generators.
//!
//! A generator turns entropy into a string that looks like a real identifier
//! of its type but carries no meaning. The random source is always supplied by
//! the caller so tests can seed it.

use rand::{Rng, RngCore};

use crate::identifier::IdentifierType;
use crate::obfuscator::ObfuscationError;
use crate::patterns::DEFAULT_REGISTRY;

/// Produces syntactically valid random values for one identifier type.
pub trait FakeValueGenerator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> String;
}

/// Generates SSNs in `DDD-DD-DDDD` form.
///
/// Area numbers skip `000`, `666` and `900-999`, the group skips `00` and the
/// serial skips `0000`, so values resemble issued numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SsnGenerator;

impl FakeValueGenerator for SsnGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> String {
        let mut area: u16 = rng.random_range(1..=898);
        if area >= 666 {
            area += 1;
        }
        let group: u8 = rng.random_range(1..=99);
        let serial: u16 = rng.random_range(1..=9999);
        format!("{:03}-{:02}-{:04}", area, group, serial)
    }
}

/// Always returns the same value. Useful for masking and deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    value: String,
}

impl FixedGenerator {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl FakeValueGenerator for FixedGenerator {
    fn generate(&self, _rng: &mut dyn RngCore) -> String {
        self.value.clone()
    }
}

/// Generate a fake value for `identifier_type` using the default registry.
pub fn generate_for(
    identifier_type: IdentifierType,
    rng: &mut dyn RngCore,
) -> Result<String, ObfuscationError> {
    DEFAULT_REGISTRY
        .get(identifier_type)
        .map(|spec| spec.generator().generate(rng))
        .ok_or_else(|| ObfuscationError::UnsupportedIdentifierType(identifier_type.to_string()))
}
