//! Scale configuration and the merge of partial options over the defaults.

use crate::error::KeywordError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Output unit. `Rem` also converts the pixel inputs by `root_font_size` first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    #[default]
    Rem,
}

impl Unit {
    /// Suffix appended to emitted lengths.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = KeywordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "px" => Ok(Self::Px),
            "rem" => Ok(Self::Rem),
            other => Err(KeywordError {
                option: "unit",
                value: other.to_owned(),
                expected: "px, rem",
            }),
        }
    }
}

/// How generated property names are suffixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixType {
    /// `--{prefix}{power}`, signed.
    #[default]
    Numbered,
    /// `--{prefix}{suffix_values[step]}`.
    Values,
}

impl Display for SuffixType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(match self {
            Self::Numbered => "numbered",
            Self::Values => "values",
        })
    }
}

impl FromStr for SuffixType {
    type Err = KeywordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "numbered" => Ok(Self::Numbered),
            "values" => Ok(Self::Values),
            other => Err(KeywordError {
                option: "suffixType",
                value: other.to_owned(),
                expected: "numbered, values",
            }),
        }
    }
}

/// Fully resolved scale configuration.
///
/// `min_screen_width < max_screen_width` is assumed, not checked.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScaleConfig {
    pub min_screen_width: f64,
    pub max_screen_width: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
    /// Steps generated below the base step.
    pub min_step: u32,
    /// Steps generated above the base step.
    pub max_step: u32,
    /// Only used for px → rem conversion.
    pub root_font_size: f64,
    /// Fractional digits in emitted numbers.
    pub precision: u32,
    pub prefix: String,
    pub suffix_type: SuffixType,
    /// Ascending by font size; needs more than `min_step + max_step` entries
    /// when `suffix_type` is `Values`.
    pub suffix_values: Vec<String>,
    pub unit: Unit,
    /// Rewrite `var(--prefix...)` tokens in place instead of expanding directives.
    pub replace_inline: bool,
    /// Comment text marking where declarations are emitted.
    pub generator_directive: String,
}

impl Default for TypeScaleConfig {
    fn default() -> Self {
        Self {
            min_screen_width: 320.0,
            max_screen_width: 1536.0,
            min_font_size: 16.0,
            max_font_size: 20.0,
            min_ratio: 1.2,
            max_ratio: 1.333,
            min_step: 2,
            max_step: 5,
            root_font_size: 16.0,
            precision: 2,
            prefix: "font-size-".to_owned(),
            suffix_type: SuffixType::Numbered,
            suffix_values: ["xs", "sm", "base", "md", "lg", "xl", "xxl", "xxxl"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            unit: Unit::Rem,
            replace_inline: false,
            generator_directive: "postcss-modular-type-generate".to_owned(),
        }
    }
}

/// Partial configuration, as read from a JSON file or the command line.
/// Every field left as `None` takes its default on [`TypeScaleOptions::resolve`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeScaleOptions {
    pub min_screen_width: Option<f64>,
    pub max_screen_width: Option<f64>,
    pub min_font_size: Option<f64>,
    pub max_font_size: Option<f64>,
    pub min_ratio: Option<f64>,
    pub max_ratio: Option<f64>,
    pub min_step: Option<u32>,
    pub max_step: Option<u32>,
    pub root_font_size: Option<f64>,
    pub precision: Option<u32>,
    pub prefix: Option<String>,
    pub suffix_type: Option<SuffixType>,
    pub suffix_values: Option<Vec<String>>,
    pub unit: Option<Unit>,
    pub replace_inline: Option<bool>,
    pub generator_directive: Option<String>,
}

impl TypeScaleOptions {
    /// Merge over a fresh copy of the defaults. Never touches shared state, so
    /// repeated calls with different partial options cannot leak into each other.
    pub fn resolve(&self) -> TypeScaleConfig {
        let defaults = TypeScaleConfig::default();
        TypeScaleConfig {
            min_screen_width: self.min_screen_width.unwrap_or(defaults.min_screen_width),
            max_screen_width: self.max_screen_width.unwrap_or(defaults.max_screen_width),
            min_font_size: self.min_font_size.unwrap_or(defaults.min_font_size),
            max_font_size: self.max_font_size.unwrap_or(defaults.max_font_size),
            min_ratio: self.min_ratio.unwrap_or(defaults.min_ratio),
            max_ratio: self.max_ratio.unwrap_or(defaults.max_ratio),
            min_step: self.min_step.unwrap_or(defaults.min_step),
            max_step: self.max_step.unwrap_or(defaults.max_step),
            root_font_size: self.root_font_size.unwrap_or(defaults.root_font_size),
            precision: self.precision.unwrap_or(defaults.precision),
            prefix: self.prefix.clone().unwrap_or(defaults.prefix),
            suffix_type: self.suffix_type.unwrap_or(defaults.suffix_type),
            suffix_values: self.suffix_values.clone().unwrap_or(defaults.suffix_values),
            unit: self.unit.unwrap_or(defaults.unit),
            replace_inline: self.replace_inline.unwrap_or(defaults.replace_inline),
            generator_directive: self
                .generator_directive
                .clone()
                .unwrap_or(defaults.generator_directive),
        }
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            min_screen_width: overrides.min_screen_width.or(self.min_screen_width),
            max_screen_width: overrides.max_screen_width.or(self.max_screen_width),
            min_font_size: overrides.min_font_size.or(self.min_font_size),
            max_font_size: overrides.max_font_size.or(self.max_font_size),
            min_ratio: overrides.min_ratio.or(self.min_ratio),
            max_ratio: overrides.max_ratio.or(self.max_ratio),
            min_step: overrides.min_step.or(self.min_step),
            max_step: overrides.max_step.or(self.max_step),
            root_font_size: overrides.root_font_size.or(self.root_font_size),
            precision: overrides.precision.or(self.precision),
            prefix: overrides.prefix.or(self.prefix),
            suffix_type: overrides.suffix_type.or(self.suffix_type),
            suffix_values: overrides.suffix_values.or(self.suffix_values),
            unit: overrides.unit.or(self.unit),
            replace_inline: overrides.replace_inline.or(self.replace_inline),
            generator_directive: overrides.generator_directive.or(self.generator_directive),
        }
    }
}
