//! Pattern registry: maps each identifier type to its matcher and generator.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::generator::{FakeValueGenerator, SsnGenerator};
use crate::identifier::IdentifierType;
use crate::obfuscator::ObfuscationError;

/// Dash-separated SSN bounded by word boundaries on both sides.
pub const SSN_PATTERN: &str = r"\b\d{3}-\d{2}-\d{4}\b";

static SSN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(SSN_PATTERN).unwrap());

/// Process-wide registry with the built-in rule for every identifier type.
pub static DEFAULT_REGISTRY: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::builtin);

/// Matching rule and fake value generator for one identifier type.
pub struct PatternSpec {
    identifier_type: IdentifierType,
    regex: Regex,
    generator: Box<dyn FakeValueGenerator>,
}

impl PatternSpec {
    pub fn new(
        identifier_type: IdentifierType,
        regex: Regex,
        generator: impl FakeValueGenerator + 'static,
    ) -> Self {
        Self {
            identifier_type,
            regex,
            generator: Box::new(generator),
        }
    }

    /// Compile `pattern` into a spec, reporting bad patterns as errors.
    pub fn from_pattern(
        identifier_type: IdentifierType,
        pattern: &str,
        generator: impl FakeValueGenerator + 'static,
    ) -> Result<Self, ObfuscationError> {
        let regex = Regex::new(pattern)
            .map_err(|e| ObfuscationError::Pattern(format!("{}: {}", identifier_type, e)))?;
        Ok(Self::new(identifier_type, regex, generator))
    }

    pub fn identifier_type(&self) -> IdentifierType {
        self.identifier_type
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn generator(&self) -> &dyn FakeValueGenerator {
        self.generator.as_ref()
    }
}

impl fmt::Debug for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternSpec")
            .field("identifier_type", &self.identifier_type)
            .field("regex", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

/// Lookup table from identifier type to [`PatternSpec`].
#[derive(Debug, Default)]
pub struct PatternRegistry {
    specs: HashMap<IdentifierType, PatternSpec>,
}

impl PatternRegistry {
    /// An empty registry; every lookup fails until specs are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in rule for every identifier type.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(PatternSpec::new(
            IdentifierType::Ssn,
            SSN_REGEX.clone(),
            SsnGenerator,
        ));
        registry
    }

    /// Add or replace the spec for its identifier type.
    pub fn register(&mut self, spec: PatternSpec) {
        self.specs.insert(spec.identifier_type(), spec);
    }

    pub fn with(mut self, spec: PatternSpec) -> Self {
        self.register(spec);
        self
    }

    pub fn get(&self, identifier_type: IdentifierType) -> Option<&PatternSpec> {
        self.specs.get(&identifier_type)
    }

    pub fn contains(&self, identifier_type: IdentifierType) -> bool {
        self.specs.contains_key(&identifier_type)
    }

    /// Registered types in declaration order.
    pub fn supported(&self) -> Vec<IdentifierType> {
        IdentifierType::all()
            .iter()
            .copied()
            .filter(|t| self.contains(*t))
            .collect()
    }
}
