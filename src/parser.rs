use std::fmt;

use tracing::trace;

use crate::error::MatchError;
use crate::lexer::{classify, AtomKind};
use crate::splitter::split_enclosed;
use crate::value::Number;

const RESERVED: [&str; 2] = ["true", "false"];

/// Parsed form of a pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Wildcard,
    Ident(String),
    Bool(bool),
    Number(Number),
    Str(String),
    Array(Vec<Pattern>),
    Cons {
        heads: Vec<Pattern>,
        tail: Box<Pattern>,
    },
    As {
        name: String,
        inner: Box<Pattern>,
    },
}

impl Pattern {
    /// Parses pattern text with no nesting limit.
    pub fn parse(text: &str) -> Result<Pattern, MatchError> {
        Parser::new(None).parse_pattern(text)
    }
}

fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(word))
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) && !is_reserved(word)
}

pub(crate) struct Parser {
    max_depth: Option<usize>,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(max_depth: Option<usize>) -> Self {
        Parser {
            max_depth,
            depth: 0,
        }
    }

    /// Classifies `text` in a fixed order: number, boolean, string,
    /// identifier, wildcard, array, cons, as-binding. The first shape that
    /// fits decides the form.
    pub(crate) fn parse_pattern(&mut self, text: &str) -> Result<Pattern, MatchError> {
        let text = text.trim();
        if let Some(limit) = self.max_depth {
            if self.depth > limit {
                return Err(MatchError::DepthLimit { limit });
            }
        }

        if let Some(kind) = classify(text) {
            let atom = parse_atom(kind, text)?;
            trace!(pattern = text, ?atom, "classified atom");
            return Ok(atom);
        }
        if let Some(body) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            trace!(pattern = text, "classified array");
            return self.parse_array(text, body);
        }
        if let Some(body) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            if body.contains(':') {
                trace!(pattern = text, "classified cons");
                return self.parse_cons(text, body);
            }
        }
        if let Some((name, rest)) = text.split_once('@') {
            if is_identifier(name) && !rest.trim().is_empty() {
                trace!(pattern = text, name, "classified as-binding");
                let inner = self.nested(rest)?;
                return Ok(Pattern::As {
                    name: name.to_string(),
                    inner: Box::new(inner),
                });
            }
        }
        Err(MatchError::invalid(text))
    }

    fn parse_array(&mut self, text: &str, body: &str) -> Result<Pattern, MatchError> {
        let fields = split_enclosed(',', '[', ']', body).map_err(|_| MatchError::invalid(text))?;
        let items = fields
            .iter()
            .map(|f| self.nested(f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pattern::Array(items))
    }

    fn parse_cons(&mut self, text: &str, body: &str) -> Result<Pattern, MatchError> {
        let mut fields =
            split_enclosed(':', '(', ')', body).map_err(|_| MatchError::invalid(text))?;
        if fields.len() < 2 {
            return Err(MatchError::invalid(text));
        }
        let tail = match fields.pop() {
            Some(f) => self.nested(&f)?,
            None => return Err(MatchError::invalid(text)),
        };
        let heads = fields
            .iter()
            .map(|f| self.nested(f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pattern::Cons {
            heads,
            tail: Box::new(tail),
        })
    }

    fn nested(&mut self, text: &str) -> Result<Pattern, MatchError> {
        self.depth += 1;
        let result = self.parse_pattern(text);
        self.depth -= 1;
        result
    }
}

fn parse_atom(kind: AtomKind, text: &str) -> Result<Pattern, MatchError> {
    Ok(match kind {
        AtomKind::Number => Pattern::Number(parse_number(text)?),
        AtomKind::Word if text.eq_ignore_ascii_case("true") => Pattern::Bool(true),
        AtomKind::Word if text.eq_ignore_ascii_case("false") => Pattern::Bool(false),
        AtomKind::Word => Pattern::Ident(text.to_string()),
        AtomKind::Str => Pattern::Str(text[1..text.len() - 1].to_string()),
        AtomKind::Wildcard => Pattern::Wildcard,
        AtomKind::Error => return Err(MatchError::invalid(text)),
    })
}

fn parse_number(text: &str) -> Result<Number, MatchError> {
    if !text.contains('.') {
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Number::Int(i));
        }
    }
    text.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| MatchError::invalid(text))
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => f.write_str("_"),
            Pattern::Ident(name) => f.write_str(name),
            Pattern::Bool(b) => write!(f, "{}", b),
            Pattern::Number(n) => write!(f, "{}", n),
            Pattern::Str(s) => {
                let quote = if s.contains('"') { '\'' } else { '"' };
                write!(f, "{quote}{s}{quote}")
            }
            Pattern::Array(items) => {
                let parts: Vec<String> = items.iter().map(|p| p.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Pattern::Cons { heads, tail } => {
                let mut parts: Vec<String> = heads.iter().map(|p| p.to_string()).collect();
                parts.push(tail.to_string());
                write!(f, "({})", parts.join(":"))
            }
            Pattern::As { name, inner } => write!(f, "{}@{}", name, inner),
        }
    }
}
