use thiserror::Error;

/// Configuration that cannot produce a scale.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `suffixType = values` needs one suffix per generated step.
    #[error(
        "suffixValues must contain at least {required} entries (minStep + maxStep + 1), \
         but {configured} were configured: {values:?}"
    )]
    InsufficientSuffixValues {
        required: u64,
        configured: usize,
        values: Vec<String>,
    },
}

/// An unrecognized keyword for one of the enumerated options (`unit`, `suffixType`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {option} `{value}`, expected one of: {expected}")]
pub struct KeywordError {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}
