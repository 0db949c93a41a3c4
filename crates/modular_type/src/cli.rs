//! Command line definition.

use clap::{Args, Parser, Subcommand};
use css_type_scale::{SuffixType, TypeScaleOptions, Unit};
use std::path::PathBuf;

/// Generate fluid modular type scales as CSS custom properties.
#[derive(Debug, Parser)]
#[command(name = "modular-type", version, propagate_version = true)]
#[command(after_help = "EXAMPLES:
    # Print the default scale
    modular-type scale

    # Expand /* postcss-modular-type-generate */ comments in a stylesheet
    modular-type --config type-scale.json process styles.css -o styles.out.css

    # Replace var(--font-size-N) references with their clamp() values
    modular-type --replace-inline process styles.css")]
pub struct Cli {
    /// JSON configuration file; every key is optional and falls back to its default.
    #[arg(long, short = 'c', global = true, env = "MODULAR_TYPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Options that take precedence over the configuration file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Output unit (px or rem).
    #[arg(long, global = true)]
    pub unit: Option<Unit>,

    /// Prefix of the generated custom properties.
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Fractional digits in emitted numbers.
    #[arg(long, global = true)]
    pub precision: Option<u32>,

    /// Steps below the base step.
    #[arg(long, global = true)]
    pub min_step: Option<u32>,

    /// Steps above the base step.
    #[arg(long, global = true)]
    pub max_step: Option<u32>,

    /// Property naming (numbered or values).
    #[arg(long, global = true)]
    pub suffix_type: Option<SuffixType>,

    /// Replace references inline instead of expanding directives (`--replace-inline=false` to disable).
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub replace_inline: Option<bool>,

    /// Comment text that marks where the scale is emitted.
    #[arg(long, global = true)]
    pub directive: Option<String>,
}

impl Overrides {
    pub fn into_options(self) -> TypeScaleOptions {
        TypeScaleOptions {
            unit: self.unit,
            prefix: self.prefix,
            precision: self.precision,
            min_step: self.min_step,
            max_step: self.max_step,
            suffix_type: self.suffix_type,
            replace_inline: self.replace_inline,
            generator_directive: self.directive,
            ..TypeScaleOptions::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the generated scale.
    Scale {
        /// Print an ordered JSON array of { property, value } instead of CSS.
        #[arg(long)]
        json: bool,

        /// Selector of the emitted rule.
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Apply the scale to stylesheets (`-` reads stdin).
    Process {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write the result here instead of stdout (single input only).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the resolved configuration as JSON.
    Config,
}
