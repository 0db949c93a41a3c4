//! Fluid modular type scale generation.
//!
//! Turns a [`TypeScaleConfig`] into an ordered [`ScaleMapping`] of custom property
//! names to `clamp()` expressions that grow linearly with the viewport width between
//! a minimum and a maximum screen width, following a geometric ratio per step.
//! Spec: <https://www.w3.org/TR/css-values-4/#funcdef-clamp>

#![forbid(unsafe_code)]

mod config;
mod error;
mod generator;
mod mapping;

pub use config::{SuffixType, TypeScaleConfig, TypeScaleOptions, Unit};
pub use error::{ConfigError, KeywordError};
pub use generator::{base_index, format_fixed, generate};
pub use mapping::{ScaleEntry, ScaleMapping};
