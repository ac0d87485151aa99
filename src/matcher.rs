use std::collections::HashMap;

use tracing::{debug, trace};

use crate::bindings::Bindings;
use crate::error::MatchError;
use crate::parser::{Parser, Pattern};
use crate::value::Value;

/// Bounds on untrusted pattern text. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_depth: Option<usize>,
    pub max_len: Option<usize>,
}

/// Compiles and matches patterns under a set of [`Limits`].
///
/// Holds no state between calls; `Matcher::default()` applies no limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    limits: Limits,
}

impl Matcher {
    pub fn with_limits(limits: Limits) -> Self {
        Matcher { limits }
    }

    pub fn compile(&self, text: &str) -> Result<Pattern, MatchError> {
        if let Some(limit) = self.limits.max_len {
            if text.len() > limit {
                debug!(len = text.len(), limit, "pattern rejected: too long");
                return Err(MatchError::LengthLimit {
                    limit,
                    len: text.len(),
                });
            }
        }
        let result = Parser::new(self.limits.max_depth).parse_pattern(text);
        if let Err(MatchError::DepthLimit { limit }) = &result {
            debug!(limit, "pattern rejected: nested too deep");
        }
        result
    }

    /// Parses `text` and matches it against `value`.
    ///
    /// `Ok(None)` is a structural mismatch. Invalid pattern text and
    /// duplicate binding names are errors.
    pub fn parse(&self, text: &str, value: &Value) -> Result<Option<Bindings>, MatchError> {
        self.compile(text)?.matches(value)
    }
}

/// Matches `text` against `value` with a default [`Matcher`].
pub fn parse(text: &str, value: &Value) -> Result<Option<Bindings>, MatchError> {
    Matcher::default().parse(text, value)
}

/// Like [`parse`], but hands back the bindings keyed by name.
pub fn extract(text: &str, value: &Value) -> Result<Option<HashMap<String, Value>>, MatchError> {
    Ok(parse(text, value)?.map(|b| b.to_map()))
}

impl Pattern {
    pub fn matches(&self, value: &Value) -> Result<Option<Bindings>, MatchError> {
        trace!(pattern = %self, %value, "match");
        Ok(match self {
            Pattern::Wildcard => Some(Bindings::new()),
            Pattern::Ident(name) => Some(Bindings::single(name, value.clone())),
            Pattern::Bool(b) => matches!(value, Value::Bool(v) if v == b).then(Bindings::new),
            Pattern::Number(n) => matches!(value, Value::Number(v) if v == n).then(Bindings::new),
            Pattern::Str(s) => matches!(value, Value::Str(v) if v == s).then(Bindings::new),
            Pattern::Array(items) => match value {
                Value::List(values) if values.len() == items.len() => {
                    match_each(items, values)?
                }
                _ => None,
            },
            Pattern::Cons { heads, tail } => match value {
                Value::List(values) if values.len() >= heads.len() => {
                    let (front, rest) = values.split_at(heads.len());
                    let Some(bound) = match_each(heads, front)? else {
                        return Ok(None);
                    };
                    match tail.matches(&Value::List(rest.to_vec()))? {
                        Some(more) => Some(bound.merge(more)?),
                        None => None,
                    }
                }
                _ => None,
            },
            Pattern::As { name, inner } => match inner.matches(value)? {
                Some(bound) => Some(Bindings::single(name, value.clone()).merge(bound)?),
                None => None,
            },
        })
    }
}

// Pairwise match, folding bindings left to right.
fn match_each(patterns: &[Pattern], values: &[Value]) -> Result<Option<Bindings>, MatchError> {
    let mut acc = Bindings::new();
    for (p, v) in patterns.iter().zip(values) {
        match p.matches(v)? {
            Some(bound) => acc = acc.merge(bound)?,
            None => return Ok(None),
        }
    }
    Ok(Some(acc))
}
