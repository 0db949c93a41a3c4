//! Tolerant stylesheet parser built on the `cssparser` tokenizer.
//!
//! Unlike `cssparser`'s rule-list parsers this keeps comments, which is what
//! directive comments need. Anything it cannot make sense of is skipped.

use crate::{AtRule, Comment, Declaration, Node, StyleRule, Stylesheet};
use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};
use log::trace;

/// Parse a full stylesheet.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let nodes = parse_items(&mut parser);
    trace!("parsed stylesheet with {} top-level nodes", nodes.len());
    Stylesheet { nodes }
}

/// Parse the items of a stylesheet or block until the input is exhausted.
fn parse_items(parser: &mut Parser<'_, '_>) -> Vec<Node> {
    let mut nodes = Vec::new();
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::WhiteSpace(_)
            | Token::Semicolon
            | Token::CDO
            | Token::CDC
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket => {}
            Token::Comment(text) => nodes.push(Node::Comment(Comment::new(text))),
            Token::AtKeyword(name) => nodes.push(parse_at_rule(parser, name.as_ref())),
            other => {
                if let Some(node) = parse_rule_or_declaration(parser, start, other) {
                    nodes.push(node);
                }
            }
        }
    }
    nodes
}

/// Parse the contents of the `{}` block that was just consumed.
fn parse_block<'i>(parser: &mut Parser<'i, '_>) -> Vec<Node> {
    parser
        .parse_nested_block(|block| Ok::<_, ParseError<'i, ()>>(parse_items(block)))
        .unwrap_or_default()
}

/// Consume either a qualified rule (prelude followed by a block) or a declaration
/// (text up to the next `;` or the end of the enclosing block).
fn parse_rule_or_declaration<'i>(
    parser: &mut Parser<'i, '_>,
    start: SourcePosition,
    first: Token<'i>,
) -> Option<Node> {
    let mut before = start;
    let mut current = first;
    loop {
        match current {
            Token::CurlyBracketBlock => {
                let prelude = parser.slice(start..before).trim().to_owned();
                let nodes = parse_block(parser);
                return Some(Node::Rule(StyleRule { prelude, nodes }));
            }
            Token::Semicolon => return declaration_from_raw(parser.slice(start..before)),
            _ => {}
        }
        before = parser.position();
        match parser.next_including_whitespace_and_comments() {
            Ok(token) => current = token.clone(),
            Err(_) => return declaration_from_raw(parser.slice_from(start)),
        }
    }
}

/// Consume an at-rule whose `@name` was just read.
fn parse_at_rule(parser: &mut Parser<'_, '_>, name: &str) -> Node {
    let start = parser.position();
    loop {
        let before = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => {
                return Node::AtRule(AtRule {
                    name: name.to_owned(),
                    prelude: parser.slice_from(start).trim().to_owned(),
                    nodes: None,
                });
            }
        };
        match token {
            Token::Semicolon => {
                return Node::AtRule(AtRule {
                    name: name.to_owned(),
                    prelude: parser.slice(start..before).trim().to_owned(),
                    nodes: None,
                });
            }
            Token::CurlyBracketBlock => {
                let prelude = parser.slice(start..before).trim().to_owned();
                let nodes = parse_block(parser);
                return Node::AtRule(AtRule {
                    name: name.to_owned(),
                    prelude,
                    nodes: Some(nodes),
                });
            }
            _ => {}
        }
    }
}

/// Split `property: value` raw text into a declaration. Returns `None` when the
/// text has no colon or the property is not a single name.
fn declaration_from_raw(raw: &str) -> Option<Node> {
    let (property, value) = raw.split_once(':')?;
    let property = property.trim();
    if property.is_empty() || property.contains(char::is_whitespace) {
        return None;
    }
    let (value, important) = split_important_tail(value);
    Some(Node::Declaration(Declaration {
        property: property.to_owned(),
        value,
        important,
    }))
}

/// Parse `!important` at the end of a value, returning (`value_without_important`, `important_flag`).
fn split_important_tail(value: &str) -> (String, bool) {
    const KEYWORD: &str = "important";
    let trimmed = value.trim();
    let Some(split) = trimmed.len().checked_sub(KEYWORD.len()) else {
        return (trimmed.to_owned(), false);
    };
    if let Some(head) = trimmed
        .get(split..)
        .filter(|tail| tail.eq_ignore_ascii_case(KEYWORD))
        .and_then(|_| trimmed.get(..split))
        .map(str::trim_end)
        .and_then(|rest| rest.strip_suffix('!'))
    {
        return (head.trim_end().to_owned(), true);
    }
    (trimmed.to_owned(), false)
}
