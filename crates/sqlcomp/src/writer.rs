//! Ordered token accumulator for statement text.
//!
//! Every piece of a statement goes through [`SqlWriter`] so spacing and
//! punctuation live in one place: tokens are joined with a single space and a
//! finished statement ends with `;`.

/// Accumulates SQL tokens and joins them at the end.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlWriter {
    tokens: Vec<String>,
}

impl SqlWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one token.
    ///
    /// Empty tokens are kept and still get their separating space.
    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    /// Append `items` joined by `sep` as a single token.
    pub fn push_list<I, S>(&mut self, items: I, sep: &str) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                joined.push_str(sep);
            }
            joined.push_str(item.as_ref());
        }
        self.push(joined)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens joined with single spaces, no terminator.
    pub fn to_sql(&self) -> String {
        self.tokens.join(" ")
    }

    /// Tokens joined with single spaces and terminated with `;`.
    pub fn finish(&self) -> String {
        let mut sql = self.to_sql();
        sql.push(';');
        sql
    }
}
