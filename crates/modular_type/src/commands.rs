//! Command implementations.

use crate::cli::Command;
use anyhow::{Context as _, Result, anyhow};
use css::{Policy, TypeScaleSession};
use css_type_scale::{TypeScaleConfig, TypeScaleOptions};
use log::{info, warn};
use serde_json::{from_str, to_string_pretty};
use std::fs::{read_to_string, write};
use std::io::{Write, read_to_string as read_all, stdin};
use std::path::{Path, PathBuf};

/// Load the configuration file (if any) and layer the command line overrides on top.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid configuration.
pub fn resolve_config(path: Option<&Path>, overrides: TypeScaleOptions) -> Result<TypeScaleConfig> {
    let file_options = match path {
        Some(path) => load_options(path)?,
        None => TypeScaleOptions::default(),
    };
    Ok(file_options.merged_with(overrides).resolve())
}

fn load_options(path: &Path) -> Result<TypeScaleOptions> {
    let text = read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Run `command` with the resolved configuration, writing results to `out`.
///
/// # Errors
/// Returns an error if the scale cannot be generated, an input cannot be read or
/// processed, or output cannot be written.
pub fn run(command: Command, config: TypeScaleConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Config => {
            writeln!(out, "{}", to_string_pretty(&config)?)?;
            Ok(())
        }
        Command::Scale { json, selector } => cmd_scale(config, json, &selector, out),
        Command::Process { inputs, output } => cmd_process(config, &inputs, output.as_deref(), out),
    }
}

fn cmd_scale(config: TypeScaleConfig, json: bool, selector: &str, out: &mut impl Write) -> Result<()> {
    let session = TypeScaleSession::new(config)?;
    if json {
        writeln!(out, "{}", to_string_pretty(session.mapping())?)?;
    } else {
        write!(out, "{}", session.scale_stylesheet(selector))?;
    }
    Ok(())
}

fn cmd_process(
    config: TypeScaleConfig,
    inputs: &[PathBuf],
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    if output.is_some() && inputs.len() != 1 {
        return Err(anyhow!(
            "--output needs exactly one input, got {}",
            inputs.len()
        ));
    }
    let session = TypeScaleSession::new(config)?;
    let expects_directive = matches!(session.policy(), Policy::DirectiveExpansion { .. });
    for input in inputs {
        let source = read_input(input)?;
        let processed = session
            .process_css(&source)
            .with_context(|| format!("failed to process {}", input.display()))?;
        info!("{}: {:?}", input.display(), processed.report);
        if expects_directive && processed.report.directives_expanded == 0 {
            warn!(
                "{}: no `/* {} */` comment inside a rule",
                input.display(),
                session.config().generator_directive
            );
        }
        match output {
            Some(path) => write(path, &processed.css)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => write!(out, "{}", processed.css)?,
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_all(stdin()).context("failed to read stdin");
    }
    read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
