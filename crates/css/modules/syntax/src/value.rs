//! Declaration value tokenizer.
//!
//! Splits a raw value into a small tree of components. Words are the only
//! component kind the type-scale substitution cares about; everything else is
//! kept so callers can tell them apart.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};
use thiserror::Error;

/// One syntactic component of a declaration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueComponent {
    /// Runs of adjacent identifiers, numbers, dimensions, hashes and stray delimiters, as written.
    Word(String),
    /// A function call or a bare parenthesized group (empty `name`).
    Function {
        name: String,
        nodes: Vec<ValueComponent>,
    },
    /// A `[...]` group.
    Brackets(Vec<ValueComponent>),
    /// A quoted string (unquoted contents).
    String(String),
    /// A divider: `,`, `/`, `:` or `;`.
    Div(char),
    /// A run of whitespace.
    Space,
    /// A comment body.
    Comment(String),
}

/// Failure to tokenize a value. Lines are 1-based, columns are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("malformed token {token} at {line}:{column}")]
    BadToken {
        token: String,
        line: u32,
        column: u32,
    },
    #[error("unbalanced `{delimiter}` at {line}:{column}")]
    Unbalanced {
        delimiter: char,
        line: u32,
        column: u32,
    },
    #[error("invalid value syntax at {line}:{column}: {message}")]
    Syntax {
        message: String,
        line: u32,
        column: u32,
    },
}

impl From<ParseError<'_, ValueError>> for ValueError {
    fn from(error: ParseError<'_, ValueError>) -> Self {
        match error.kind {
            ParseErrorKind::Custom(inner) => inner,
            ParseErrorKind::Basic(kind) => Self::Syntax {
                message: format!("{kind:?}"),
                line: error.location.line + 1,
                column: error.location.column,
            },
        }
    }
}

/// Tokenize a declaration value.
///
/// # Errors
/// Returns `ValueError` for bad strings/urls, unbalanced closing brackets and
/// `{}` blocks, none of which belong in a property value.
pub fn tokenize_value(value: &str) -> Result<Vec<ValueComponent>, ValueError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parse_components(&mut parser).map_err(ValueError::from)
}

/// Call `visit` with the text of every word, descending into functions and groups.
pub fn walk_words<'a, F>(components: &'a [ValueComponent], visit: &mut F)
where
    F: FnMut(&'a str),
{
    for component in components {
        match component {
            ValueComponent::Word(text) => visit(text),
            ValueComponent::Function { nodes, .. } | ValueComponent::Brackets(nodes) => {
                walk_words(nodes, visit);
            }
            ValueComponent::String(_)
            | ValueComponent::Div(_)
            | ValueComponent::Space
            | ValueComponent::Comment(_) => {}
        }
    }
}

fn parse_components<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Vec<ValueComponent>, ParseError<'i, ValueError>> {
    let mut out = Vec::new();
    loop {
        let location = parser.current_source_location();
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let line = location.line + 1;
        let column = location.column;
        let component = match token {
            Token::WhiteSpace(_) => ValueComponent::Space,
            Token::Comment(text) => ValueComponent::Comment(text.trim().to_owned()),
            Token::QuotedString(text) => ValueComponent::String(text.as_ref().to_owned()),
            Token::Comma => ValueComponent::Div(','),
            Token::Colon => ValueComponent::Div(':'),
            Token::Semicolon => ValueComponent::Div(';'),
            Token::Delim('/') => ValueComponent::Div('/'),
            Token::Function(name) => ValueComponent::Function {
                name: name.as_ref().to_owned(),
                nodes: parse_group(parser)?,
            },
            Token::ParenthesisBlock => ValueComponent::Function {
                name: String::new(),
                nodes: parse_group(parser)?,
            },
            Token::SquareBracketBlock => ValueComponent::Brackets(parse_group(parser)?),
            Token::CurlyBracketBlock => {
                return Err(parser.new_custom_error(ValueError::BadToken {
                    token: "{".to_owned(),
                    line,
                    column,
                }));
            }
            Token::BadUrl(_) | Token::BadString(_) => {
                return Err(parser.new_custom_error(ValueError::BadToken {
                    token: parser.slice_from(start).to_owned(),
                    line,
                    column,
                }));
            }
            Token::CloseParenthesis | Token::CloseSquareBracket | Token::CloseCurlyBracket => {
                let delimiter = parser.slice_from(start).chars().next().unwrap_or(')');
                return Err(parser.new_custom_error(ValueError::Unbalanced {
                    delimiter,
                    line,
                    column,
                }));
            }
            Token::Ident(_)
            | Token::AtKeyword(_)
            | Token::Hash(_)
            | Token::IDHash(_)
            | Token::UnquotedUrl(_)
            | Token::Delim(_)
            | Token::Number { .. }
            | Token::Percentage { .. }
            | Token::Dimension { .. }
            | Token::IncludeMatch
            | Token::DashMatch
            | Token::PrefixMatch
            | Token::SuffixMatch
            | Token::SubstringMatch
            | Token::CDO
            | Token::CDC => ValueComponent::Word(parser.slice_from(start).to_owned()),
        };
        // Tokens with nothing between them form one word, e.g. `--scale-0.5`.
        if let (ValueComponent::Word(next), Some(ValueComponent::Word(previous))) =
            (&component, out.last_mut())
        {
            previous.push_str(next);
            continue;
        }
        out.push(component);
    }
    Ok(out)
}

/// Parse the contents of the block that was just opened.
fn parse_group<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Vec<ValueComponent>, ParseError<'i, ValueError>> {
    parser.parse_nested_block(parse_components)
}
