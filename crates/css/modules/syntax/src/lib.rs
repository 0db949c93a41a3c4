//! CSS Syntax Module Level 3 — a small stylesheet document model.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
//!
//! The tree keeps exactly what the type-scale tooling needs to rewrite a
//! stylesheet: style rules (with nesting), at-rules, declarations and
//! comments, all in source order. Preludes and values are kept as raw text.

#![forbid(unsafe_code)]

use core::mem::take;

mod parser;
mod serialize;
pub mod value;

pub use parser::parse_stylesheet;
pub use value::{ValueComponent, ValueError, tokenize_value, walk_words};

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as written (custom properties are case-sensitive).
    pub property: String,
    /// Raw value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

impl Declaration {
    /// Build a plain (non-important) declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

/// A comment. `text` is the comment body without delimiters, trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_owned(),
        }
    }
}

/// A style rule with a raw prelude and its child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations, comments and nested rules within the block.
    pub nodes: Vec<Node>,
}

/// An at-rule such as `@media (...) { ... }` or `@import "x.css";`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    /// Raw prelude text.
    pub prelude: String,
    /// Block contents; `None` for statement at-rules ending in `;`.
    pub nodes: Option<Vec<Node>>,
}

/// Any node that can appear in a stylesheet or a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Rule(StyleRule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

/// A parsed stylesheet: top-level nodes in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    /// Replace every comment that sits inside a style rule (at any depth) and whose
    /// text equals `marker` with a copy of `replacement`, in order.
    ///
    /// Comments outside of any style rule are never touched, including those placed
    /// directly in an at-rule block. Returns the number of comments replaced.
    pub fn replace_rule_comments(&mut self, marker: &str, replacement: &[Declaration]) -> usize {
        replace_comments_in(&mut self.nodes, marker, replacement, false)
    }

    /// Visit every declaration in document order, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `visit`.
    pub fn try_for_each_declaration_mut<E, F>(&mut self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&mut Declaration) -> Result<(), E>,
    {
        visit_declarations(&mut self.nodes, &mut visit)
    }

    /// Serialize back to CSS text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

fn replace_comments_in(
    nodes: &mut Vec<Node>,
    marker: &str,
    replacement: &[Declaration],
    inside_rule: bool,
) -> usize {
    let mut replaced = 0;
    let mut out = Vec::with_capacity(nodes.len());
    for mut node in take(nodes) {
        match &mut node {
            Node::Comment(comment) if inside_rule && comment.text == marker => {
                out.extend(replacement.iter().cloned().map(Node::Declaration));
                replaced += 1;
                continue;
            }
            Node::Rule(rule) => {
                replaced += replace_comments_in(&mut rule.nodes, marker, replacement, true);
            }
            Node::AtRule(at_rule) => {
                if let Some(children) = at_rule.nodes.as_mut() {
                    replaced += replace_comments_in(children, marker, replacement, inside_rule);
                }
            }
            Node::Comment(_) | Node::Declaration(_) => {}
        }
        out.push(node);
    }
    *nodes = out;
    replaced
}

fn visit_declarations<E, F>(nodes: &mut [Node], visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Declaration) -> Result<(), E>,
{
    for node in nodes {
        match node {
            Node::Declaration(declaration) => visit(declaration)?,
            Node::Rule(rule) => visit_declarations(&mut rule.nodes, visit)?,
            Node::AtRule(at_rule) => {
                if let Some(children) = at_rule.nodes.as_mut() {
                    visit_declarations(children, visit)?;
                }
            }
            Node::Comment(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_sheet() -> Stylesheet {
        parse_stylesheet(
            "/* gen */\n:root { color: red; /* gen */ }\n@media (min-width: 1px) { /* gen */ a { /* gen */ } }",
        )
    }

    #[test]
    fn replaces_only_comments_inside_rules() {
        let mut sheet = marker_sheet();
        let replaced = sheet.replace_rule_comments("gen", &[Declaration::new("--a", "1px")]);
        assert_eq!(replaced, 2);

        assert!(matches!(&sheet.nodes[0], Node::Comment(comment) if comment.text == "gen"));
        let Node::Rule(root) = &sheet.nodes[1] else {
            unreachable!("expected :root rule");
        };
        assert_eq!(
            root.nodes,
            vec![
                Node::Declaration(Declaration::new("color", "red")),
                Node::Declaration(Declaration::new("--a", "1px")),
            ]
        );
        let Node::AtRule(media) = &sheet.nodes[2] else {
            unreachable!("expected @media");
        };
        let children = media.nodes.as_deref().unwrap_or_default();
        assert!(matches!(&children[0], Node::Comment(_)));
    }

    #[test]
    fn replacement_keeps_order() {
        let mut sheet = parse_stylesheet("a { /* gen */ }");
        let decls = [
            Declaration::new("--x-0", "0"),
            Declaration::new("--x-1", "1"),
            Declaration::new("--x-2", "2"),
        ];
        sheet.replace_rule_comments("gen", &decls);
        let Node::Rule(rule) = &sheet.nodes[0] else {
            unreachable!("expected rule");
        };
        let names: Vec<&str> = rule
            .nodes
            .iter()
            .filter_map(|node| match node {
                Node::Declaration(decl) => Some(decl.property.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["--x-0", "--x-1", "--x-2"]);
    }

    #[test]
    fn visits_nested_declarations() {
        let mut sheet = parse_stylesheet("a { color: red; b { margin: 0 } } @media print { p { top: 1px } }");
        let mut seen = Vec::new();
        let result: Result<(), ()> = sheet.try_for_each_declaration_mut(|decl| {
            seen.push(decl.property.clone());
            decl.value = "x".to_owned();
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, ["color", "margin", "top"]);
        assert!(sheet.to_css().contains("top: x;"));
    }

    #[test]
    fn visit_stops_at_first_error() {
        let mut sheet = parse_stylesheet("a { one: 1; two: 2; three: 3 }");
        let mut count = 0;
        let result = sheet.try_for_each_declaration_mut(|decl| {
            count += 1;
            if decl.property == "two" { Err("stop") } else { Ok(()) }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(count, 2);
    }
}
