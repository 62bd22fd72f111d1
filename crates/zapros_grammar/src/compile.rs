//! Syntax string compiler.
//!
//! Compiles a small textual syntax into a [`Part`] tree. The syntax uses
//! word tokens naming chunk types, three bracket pairs and `|`:
//!
//! - `( ... )` - required group, every member of a variant must match
//! - `{ ... }` - required group, at least one member must match
//! - `[ ... ]` - optional group, every member of a variant must match
//! - `|` - separates alternative variants within a group
//!
//! Whitespace is insignificant. The whole string is wrapped in an implicit
//! required all-members group. A malformed string is a construction-time
//! error; the offending token is marked as `>token<` in the error context.

use std::ops::Range;

use zapros_foundation::{ChunkType, Error, Result};

use crate::part::{Part, Quantifier};

/// One of the three bracket pairs of the syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bracket {
    Paren,
    Brace,
    Square,
}

impl Bracket {
    fn opened_by(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Square),
            _ => None,
        }
    }

    fn closed_by(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Square),
            _ => None,
        }
    }

    fn required(self) -> bool {
        !matches!(self, Self::Square)
    }

    fn quantifier(self) -> Quantifier {
        match self {
            Self::Brace => Quantifier::Any,
            Self::Paren | Self::Square => Quantifier::All,
        }
    }
}

/// A scanned syntax token with its byte range in the source.
#[derive(Clone, Debug)]
enum SyntaxToken<'src> {
    Open(Bracket),
    Close(Bracket),
    Pipe,
    Word(&'src str),
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '|' || "(){}[]".contains(c)
}

/// Splits the source into bracket, pipe and word tokens.
fn scan(source: &str) -> Vec<(SyntaxToken<'_>, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if let Some(bracket) = Bracket::opened_by(c) {
            chars.next();
            tokens.push((SyntaxToken::Open(bracket), start..start + c.len_utf8()));
            continue;
        }
        if let Some(bracket) = Bracket::closed_by(c) {
            chars.next();
            tokens.push((SyntaxToken::Close(bracket), start..start + c.len_utf8()));
            continue;
        }
        if c == '|' {
            chars.next();
            tokens.push((SyntaxToken::Pipe, start..start + c.len_utf8()));
            continue;
        }
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if is_delimiter(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        tokens.push((SyntaxToken::Word(&source[start..end]), start..end));
    }
    tokens
}

/// Rebuilds the source with the token at `range` marked as `>token<`.
fn mark(source: &str, range: &Range<usize>) -> String {
    format!(
        "{}>{}<{}",
        &source[..range.start],
        &source[range.start..range.end],
        &source[range.end..]
    )
}

/// An in-progress group during compilation.
struct Frame {
    required: bool,
    quantifier: Quantifier,
    /// `None` for the implicit root group.
    bracket: Option<Bracket>,
    variants: Vec<Vec<Part>>,
    current: Vec<Part>,
}

impl Frame {
    fn root() -> Self {
        Self {
            required: true,
            quantifier: Quantifier::All,
            bracket: None,
            variants: Vec::new(),
            current: Vec::new(),
        }
    }

    fn open(bracket: Bracket) -> Self {
        Self {
            required: bracket.required(),
            quantifier: bracket.quantifier(),
            bracket: Some(bracket),
            variants: Vec::new(),
            current: Vec::new(),
        }
    }

    fn finish(mut self) -> Part {
        self.variants.push(self.current);
        Part::Group {
            required: self.required,
            quantifier: self.quantifier,
            variants: self.variants,
        }
    }
}

/// Compiles a syntax string into its grammar tree.
///
/// The returned root is always a required all-members group.
///
/// # Errors
/// Returns a configuration error for a closing bracket whose kind does not
/// match the innermost open one, a closing bracket at the top level, open
/// brackets left unclosed at end of input, or a word naming no chunk type.
pub fn compile(source: &str) -> Result<Part> {
    let mut stack = vec![Frame::root()];
    for (token, range) in scan(source) {
        match token {
            SyntaxToken::Open(bracket) => stack.push(Frame::open(bracket)),
            SyntaxToken::Close(bracket) => {
                if stack.len() == 1 {
                    return Err(Error::UnexpectedClosing {
                        context: mark(source, &range),
                    });
                }
                // The length check above guarantees a non-root frame on top.
                let frame = stack.pop().expect("stack holds at least the root frame");
                if frame.bracket != Some(bracket) {
                    return Err(Error::MismatchedBracket {
                        context: mark(source, &range),
                    });
                }
                let group = frame.finish();
                let top = stack.last_mut().expect("stack holds at least the root frame");
                top.current.push(group);
            }
            SyntaxToken::Pipe => {
                let top = stack.last_mut().expect("stack holds at least the root frame");
                let variant = std::mem::take(&mut top.current);
                top.variants.push(variant);
            }
            SyntaxToken::Word(word) => {
                let Some(chunk_type) = ChunkType::from_name(word) else {
                    return Err(Error::UnknownChunkType {
                        name: word.to_string(),
                        context: mark(source, &range),
                    });
                };
                let top = stack.last_mut().expect("stack holds at least the root frame");
                top.current.push(Part::Leaf(chunk_type));
            }
        }
    }
    if stack.len() > 1 {
        return Err(Error::UnclosedGroups {
            count: stack.len() - 1,
            source_str: source.to_string(),
        });
    }
    let root = stack.pop().expect("stack holds at least the root frame");
    Ok(root.finish())
}
