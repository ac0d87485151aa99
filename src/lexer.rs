use logos::Logos;

/// Lexemes that can make up a whole atomic pattern. Compound forms
/// (arrays, cons groups, as-bindings) never lex as a single token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum AtomKind {
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    // Covers identifiers and the boolean words; the parser tells them apart.
    #[regex(r"[A-Za-z]+")]
    Word,
    // No escaping: a literal ends at the next occurrence of its own quote.
    #[regex(r#""[^"\n]*""#)]
    #[regex(r#"'[^'\n]*'"#)]
    Str,
    #[token("_")]
    Wildcard,

    #[error]
    Error,
}

/// Classifies `text` (already trimmed) as a single atom, or `None` when it
/// is not exactly one token.
pub fn classify(text: &str) -> Option<AtomKind> {
    let mut lex = AtomKind::lexer(text);
    let kind = lex.next()?;
    if kind == AtomKind::Error || lex.span() != (0..text.len()) {
        return None;
    }
    Some(kind)
}
