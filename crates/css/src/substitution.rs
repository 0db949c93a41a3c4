//! The two ways a generated scale is applied to a document.

use crate::document::ScaleDocument;
use css_syntax::{Declaration, ValueError, tokenize_value, walk_words};
use css_type_scale::{ScaleMapping, TypeScaleConfig};
use log::{debug, trace};

/// Which substitution runs for a session. Exactly one ever runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Replace each rule-contained comment equal to `directive` with the whole scale.
    DirectiveExpansion { directive: String },
    /// Replace the value of declarations that reference a scale property.
    InlineReplacement { prefix: String },
}

impl Policy {
    pub fn from_config(config: &TypeScaleConfig) -> Self {
        if config.replace_inline {
            Self::InlineReplacement {
                prefix: config.prefix.clone(),
            }
        } else {
            Self::DirectiveExpansion {
                directive: config.generator_directive.clone(),
            }
        }
    }
}

/// What a substitution pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub directives_expanded: usize,
    pub declarations_rewritten: usize,
}

/// The scale as declarations, in step order.
pub fn scale_declarations(mapping: &ScaleMapping) -> Vec<Declaration> {
    mapping
        .iter()
        .map(|entry| Declaration::new(entry.property.clone(), entry.value.clone()))
        .collect()
}

/// Apply `policy` to `document`.
///
/// # Errors
/// Propagates value tokenizer failures from inline replacement.
pub fn apply<D: ScaleDocument>(
    document: &mut D,
    mapping: &ScaleMapping,
    policy: &Policy,
) -> Result<SubstitutionReport, ValueError> {
    let report = match policy {
        Policy::DirectiveExpansion { directive } => SubstitutionReport {
            directives_expanded: expand_directives(document, mapping, directive),
            declarations_rewritten: 0,
        },
        Policy::InlineReplacement { prefix } => SubstitutionReport {
            directives_expanded: 0,
            declarations_rewritten: replace_inline(document, mapping, prefix)?,
        },
    };
    debug!("applied {policy:?}: {report:?}");
    Ok(report)
}

/// Swap every directive comment for one declaration per scale entry.
pub fn expand_directives<D: ScaleDocument>(
    document: &mut D,
    mapping: &ScaleMapping,
    directive: &str,
) -> usize {
    let declarations = scale_declarations(mapping);
    document.replace_directives(directive, &declarations)
}

/// Rewrite every declaration whose value references a scale property.
///
/// # Errors
/// Propagates value tokenizer failures; declarations visited before the failure
/// keep their rewritten values.
pub fn replace_inline<D: ScaleDocument>(
    document: &mut D,
    mapping: &ScaleMapping,
    prefix: &str,
) -> Result<usize, ValueError> {
    let mut rewritten = 0;
    document.try_for_each_declaration(&mut |declaration| {
        if let Some(expression) = resolve_inline_value(&declaration.value, mapping, prefix)? {
            trace!(
                "{}: {} -> {expression}",
                declaration.property, declaration.value
            );
            declaration.value = expression.to_owned();
            rewritten += 1;
        }
        Ok(())
    })?;
    Ok(rewritten)
}

/// The expression that replaces `value`, if any word in it names a scale property.
///
/// Values not containing `prefix` are not tokenized at all. Each matching word
/// replaces the whole value, so with several matches the last one wins.
///
/// # Errors
/// Returns the tokenizer error for malformed values that pass the prefix check.
pub fn resolve_inline_value<'map>(
    value: &str,
    mapping: &'map ScaleMapping,
    prefix: &str,
) -> Result<Option<&'map str>, ValueError> {
    if !value.contains(prefix) {
        return Ok(None);
    }
    let components = tokenize_value(value)?;
    let mut replacement = None;
    walk_words(&components, &mut |word: &str| {
        if let Some(expression) = mapping.get(word) {
            replacement = Some(expression);
        }
    });
    Ok(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_type_scale::generate;

    fn mapping() -> ScaleMapping {
        generate(&TypeScaleConfig::default()).unwrap_or_default()
    }

    #[test]
    fn policy_follows_replace_inline() {
        let config = TypeScaleConfig::default();
        assert_eq!(
            Policy::from_config(&config),
            Policy::DirectiveExpansion {
                directive: "postcss-modular-type-generate".to_owned()
            }
        );
        let inline = TypeScaleConfig {
            replace_inline: true,
            ..config
        };
        assert_eq!(
            Policy::from_config(&inline),
            Policy::InlineReplacement {
                prefix: "font-size-".to_owned()
            }
        );
    }

    #[test]
    fn resolves_var_reference() {
        let scale = mapping();
        assert_eq!(
            resolve_inline_value("var(--font-size-0)", &scale, "font-size-"),
            Ok(Some("clamp(1.00rem, 0.33vw + 0.93rem, 1.25rem)"))
        );
    }

    #[test]
    fn last_match_wins() {
        let scale = mapping();
        assert_eq!(
            resolve_inline_value("--font-size-0 var(--font-size-1)", &scale, "font-size-"),
            Ok(scale.get("--font-size-1"))
        );
    }

    #[test]
    fn prefix_without_known_key_is_untouched() {
        let scale = mapping();
        assert_eq!(
            resolve_inline_value("var(--font-size-9)", &scale, "font-size-"),
            Ok(None)
        );
        assert_eq!(resolve_inline_value("12px", &scale, "font-size-"), Ok(None));
    }

    #[test]
    fn dotted_suffix_is_not_a_shorter_key() {
        let scale = mapping();
        assert_eq!(
            resolve_inline_value("var(--font-size-0.5)", &scale, "font-size-"),
            Ok(None)
        );
    }

    #[test]
    fn prefix_filter_skips_tokenizing() {
        let scale = mapping();
        assert_eq!(resolve_inline_value("var(--a))", &scale, "font-size-"), Ok(None));
        assert!(resolve_inline_value("var(--font-size-0))", &scale, "font-size-").is_err());
    }

    #[test]
    fn strings_do_not_match() {
        let scale = mapping();
        assert_eq!(
            resolve_inline_value("\"--font-size-0\"", &scale, "font-size-"),
            Ok(None)
        );
    }

    #[test]
    fn declarations_follow_mapping_order() {
        let scale = mapping();
        let names: Vec<String> = scale_declarations(&scale)
            .into_iter()
            .map(|decl| decl.property)
            .collect();
        let keys: Vec<String> = scale.iter().map(|entry| entry.property.clone()).collect();
        assert_eq!(names, keys);
    }
}
