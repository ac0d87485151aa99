use tracing::{debug, trace};

use crate::bindings::Bindings;
use crate::error::MatchError;
use crate::matcher::Matcher;
use crate::value::Value;

/// What a dispatcher arm produces once its pattern matches.
pub enum Arm<'a, T> {
    /// Invoked with the bindings. Use `into_values` for positional
    /// arguments or `get` for lookup by name.
    Call(Box<dyn Fn(Bindings) -> T + 'a>),
    /// Returned as-is; the bindings are dropped.
    Value(T),
}

/// Ordered list of `(pattern, arm)` pairs. The first pattern that matches
/// wins.
pub struct Dispatcher<'a, T> {
    matcher: Matcher,
    arms: Vec<(String, Arm<'a, T>)>,
}

impl<'a, T: Clone> Dispatcher<'a, T> {
    pub fn new() -> Self {
        Self::with_matcher(Matcher::default())
    }

    pub fn with_matcher(matcher: Matcher) -> Self {
        Dispatcher {
            matcher,
            arms: Vec::new(),
        }
    }

    pub fn on(mut self, pattern: &str, handler: impl Fn(Bindings) -> T + 'a) -> Self {
        self.arms
            .push((pattern.to_string(), Arm::Call(Box::new(handler))));
        self
    }

    pub fn on_value(mut self, pattern: &str, value: T) -> Self {
        self.arms.push((pattern.to_string(), Arm::Value(value)));
        self
    }

    pub fn push(&mut self, pattern: &str, arm: Arm<'a, T>) {
        self.arms.push((pattern.to_string(), arm));
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Runs the first arm whose pattern matches `value`.
    ///
    /// Patterns are tried in order and parsed lazily, so a malformed pattern
    /// after the winning arm is never seen. An error from any arm tried
    /// before that stops the dispatch.
    pub fn dispatch(&self, value: &Value) -> Result<T, MatchError> {
        for (index, (pattern, arm)) in self.arms.iter().enumerate() {
            let Some(bindings) = self.matcher.parse(pattern, value)? else {
                trace!(index, pattern = pattern.as_str(), "arm skipped");
                continue;
            };
            debug!(index, pattern = pattern.as_str(), bound = bindings.len(), "arm selected");
            return Ok(match arm {
                Arm::Call(handler) => handler(bindings),
                Arm::Value(v) => v.clone(),
            });
        }
        Err(MatchError::NonExhaustive)
    }
}

impl<'a, T: Clone> Default for Dispatcher<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
