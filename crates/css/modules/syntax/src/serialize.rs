//! Serialization of the document model back to CSS text.

use crate::{AtRule, Declaration, Node, StyleRule, Stylesheet};
use core::fmt::{Display, Formatter, Result as FmtResult};

const INDENT: &str = "  ";

impl Display for Stylesheet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write_nodes(formatter, &self.nodes, 0)
    }
}

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}: {}", self.property, self.value)?;
        if self.important {
            formatter.write_str(" !important")?;
        }
        formatter.write_str(";")
    }
}

fn write_nodes(formatter: &mut Formatter<'_>, nodes: &[Node], depth: usize) -> FmtResult {
    for node in nodes {
        write_node(formatter, node, depth)?;
    }
    Ok(())
}

fn write_node(formatter: &mut Formatter<'_>, node: &Node, depth: usize) -> FmtResult {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Declaration(declaration) => writeln!(formatter, "{indent}{declaration}"),
        Node::Comment(comment) => writeln!(formatter, "{indent}/* {} */", comment.text),
        Node::Rule(StyleRule { prelude, nodes }) => {
            write_block(formatter, &indent, prelude, nodes, depth)
        }
        Node::AtRule(AtRule {
            name,
            prelude,
            nodes,
        }) => {
            let head = if prelude.is_empty() {
                format!("@{name}")
            } else {
                format!("@{name} {prelude}")
            };
            match nodes {
                Some(children) => write_block(formatter, &indent, &head, children, depth),
                None => writeln!(formatter, "{indent}{head};"),
            }
        }
    }
}

fn write_block(
    formatter: &mut Formatter<'_>,
    indent: &str,
    head: &str,
    children: &[Node],
    depth: usize,
) -> FmtResult {
    if head.is_empty() {
        writeln!(formatter, "{indent}{{")?;
    } else {
        writeln!(formatter, "{indent}{head} {{")?;
    }
    write_nodes(formatter, children, depth + 1)?;
    writeln!(formatter, "{indent}}}")
}
