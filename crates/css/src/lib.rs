//! Applies a fluid modular type scale to stylesheets.
//!
//! A [`TypeScaleSession`] resolves the scale once and then rewrites any number of
//! documents with the policy its configuration selects: directive expansion or
//! inline replacement (see [`Policy`]).

#![forbid(unsafe_code)]

pub mod document;
pub mod substitution;

use css_syntax::{Node, StyleRule, Stylesheet, ValueError, parse_stylesheet};
use css_type_scale::{ConfigError, ScaleMapping, TypeScaleConfig, generate};
use log::debug;
use thiserror::Error;

pub use document::ScaleDocument;
pub use substitution::{Policy, SubstitutionReport, scale_declarations};

/// Errors produced while generating a scale or applying it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not tokenize declaration value: {0}")]
    Value(#[from] ValueError),
}

/// Result of processing one stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Processed {
    pub css: String,
    pub report: SubstitutionReport,
}

/// One resolved configuration and the scale generated from it.
///
/// The mapping is computed once on construction and only read afterwards, so a
/// session can process many documents; separate sessions share nothing.
#[derive(Clone, Debug)]
pub struct TypeScaleSession {
    config: TypeScaleConfig,
    mapping: ScaleMapping,
    policy: Policy,
}

impl TypeScaleSession {
    /// Generate the scale for `config`.
    ///
    /// # Errors
    /// Returns `ConfigError` when the configuration cannot produce a scale.
    pub fn new(config: TypeScaleConfig) -> Result<Self, ConfigError> {
        let mapping = generate(&config)?;
        let policy = Policy::from_config(&config);
        debug!("type scale session: {} entries, {policy:?}", mapping.len());
        Ok(Self {
            config,
            mapping,
            policy,
        })
    }

    pub fn config(&self) -> &TypeScaleConfig {
        &self.config
    }

    pub fn mapping(&self) -> &ScaleMapping {
        &self.mapping
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Apply the session's policy to `document` in place.
    ///
    /// # Errors
    /// Returns `ProcessError::Value` when a referencing declaration value cannot be tokenized.
    pub fn apply<D: ScaleDocument>(
        &self,
        document: &mut D,
    ) -> Result<SubstitutionReport, ProcessError> {
        substitution::apply(document, &self.mapping, &self.policy).map_err(ProcessError::from)
    }

    /// Parse `css`, apply the policy and serialize the result.
    ///
    /// # Errors
    /// See [`TypeScaleSession::apply`].
    pub fn process_css(&self, css: &str) -> Result<Processed, ProcessError> {
        let mut sheet = parse_stylesheet(css);
        let report = self.apply(&mut sheet)?;
        Ok(Processed {
            css: sheet.to_css(),
            report,
        })
    }

    /// The whole scale as a single rule, e.g. `:root { --font-size-0: clamp(...); }`.
    pub fn scale_stylesheet(&self, selector: &str) -> Stylesheet {
        Stylesheet {
            nodes: vec![Node::Rule(StyleRule {
                prelude: selector.to_owned(),
                nodes: scale_declarations(&self.mapping)
                    .into_iter()
                    .map(Node::Declaration)
                    .collect(),
            })],
        }
    }
}
