use rand::RngCore;
use regex::{Captures, NoExpand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifier::IdentifierType;
use crate::patterns::{PatternRegistry, DEFAULT_REGISTRY};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObfuscationError {
    #[error("unsupported identifier type: {0}")]
    UnsupportedIdentifierType(String),
    #[error("invalid pattern: {0}")]
    Pattern(String),
}

/// How fake values are assigned to the matches within one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacementMode {
    /// Every match gets its own freshly generated value.
    #[default]
    PerMatch,
    /// One value is generated up front and reused for every match.
    Shared,
}

impl ReplacementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplacementMode::PerMatch => "per-match",
            ReplacementMode::Shared => "shared",
        }
    }
}

/// Input text plus the identifier type to replace in it.
#[derive(Debug, Clone, Copy)]
pub struct ObfuscationRequest<'a> {
    pub text: &'a str,
    pub identifier_type: IdentifierType,
}

impl<'a> ObfuscationRequest<'a> {
    pub fn new(text: &'a str, identifier_type: IdentifierType) -> Self {
        Self { text, identifier_type }
    }
}

/// Successful result of one obfuscation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObfuscationOutcome {
    pub text: String,
    pub identifier_type: IdentifierType,
    pub replacements: usize,
    pub mode: ReplacementMode,
}

/// Stateless engine that replaces identifiers using a pattern registry.
#[derive(Debug, Clone, Copy)]
pub struct Obfuscator<'r> {
    registry: &'r PatternRegistry,
    mode: ReplacementMode,
}

impl Default for Obfuscator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Obfuscator<'static> {
    /// Engine backed by the built-in registry, one fresh value per match.
    pub fn new() -> Self {
        Self::with_registry(&DEFAULT_REGISTRY)
    }
}

impl<'r> Obfuscator<'r> {
    pub fn with_registry(registry: &'r PatternRegistry) -> Self {
        Self {
            registry,
            mode: ReplacementMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ReplacementMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ReplacementMode {
        self.mode
    }

    /// Replace every `identifier_type` match using the thread-local RNG.
    pub fn obfuscate(
        &self,
        text: &str,
        identifier_type: IdentifierType,
    ) -> Result<String, ObfuscationError> {
        self.obfuscate_with_rng(text, identifier_type, &mut rand::rng())
    }

    pub fn obfuscate_with_rng(
        &self,
        text: &str,
        identifier_type: IdentifierType,
        rng: &mut dyn RngCore,
    ) -> Result<String, ObfuscationError> {
        self.process(ObfuscationRequest::new(text, identifier_type), rng)
            .map(|outcome| outcome.text)
    }

    /// Like [`Obfuscator::obfuscate_with_rng`], but takes the identifier type
    /// by name. Unknown names fail before the text is looked at.
    pub fn obfuscate_named(
        &self,
        text: &str,
        identifier_type: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ObfuscationError> {
        let identifier_type: IdentifierType = identifier_type.parse()?;
        self.obfuscate_with_rng(text, identifier_type, rng)
    }

    /// Run one request and report how many spans were replaced.
    ///
    /// The registry lookup happens first; an unsupported type returns an error
    /// without scanning the text or drawing from `rng`.
    pub fn process(
        &self,
        request: ObfuscationRequest<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ObfuscationOutcome, ObfuscationError> {
        let spec = self.registry.get(request.identifier_type).ok_or_else(|| {
            ObfuscationError::UnsupportedIdentifierType(request.identifier_type.to_string())
        })?;
        let regex = spec.regex();
        let generator = spec.generator();

        let mut replacements = 0;
        let text = match self.mode {
            ReplacementMode::PerMatch => regex
                .replace_all(request.text, |_: &Captures| {
                    replacements += 1;
                    generator.generate(rng)
                })
                .into_owned(),
            ReplacementMode::Shared => {
                let value = generator.generate(rng);
                replacements = regex.find_iter(request.text).count();
                regex
                    .replace_all(request.text, NoExpand(&value))
                    .into_owned()
            }
        };

        Ok(ObfuscationOutcome {
            text,
            identifier_type: request.identifier_type,
            replacements,
            mode: self.mode,
        })
    }
}

/// Replace every `identifier_type` match in `text` with a fresh fake value.
pub fn obfuscate(text: &str, identifier_type: IdentifierType) -> Result<String, ObfuscationError> {
    Obfuscator::new().obfuscate(text, identifier_type)
}
