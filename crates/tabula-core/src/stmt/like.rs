use super::Condition;
use crate::{schema::Model, Error, Result};

/// The character used to escape wildcards in an escaped pattern.
pub const ESCAPE_CHAR: char = '\\';

/// Characters with a special meaning inside a SQL `LIKE` pattern.
const SPECIAL: [char; 3] = ['%', '_', ESCAPE_CHAR];

/// Where a [`Like`] pattern is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The value starts with the pattern: `pattern%`.
    PrefixOnly,

    /// The value ends with the pattern: `%pattern`.
    SuffixOnly,

    /// The value contains the pattern: `%pattern%`.
    BothEnds,
}

/// Tests if a string-typed or key-typed column matches a literal pattern.
///
/// The pattern is always a literal. Without escaping it must not contain
/// `%`, `_` or `\`; with escaping those characters match themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Like {
    column: String,
    pattern: String,
    mode: MatchMode,
    escape: bool,
}

impl Like {
    /// Builds a pattern match on `column`, rejecting patterns that contain
    /// wildcard characters.
    pub fn new(
        model: &Model,
        column: &str,
        pattern: impl Into<String>,
        mode: MatchMode,
    ) -> Result<Like> {
        Like::build(model, column, pattern.into(), mode, false)
    }

    /// Builds a pattern match on `column` that matches wildcard characters
    /// in `pattern` literally.
    pub fn escaped(
        model: &Model,
        column: &str,
        pattern: impl Into<String>,
        mode: MatchMode,
    ) -> Result<Like> {
        Like::build(model, column, pattern.into(), mode, true)
    }

    fn build(
        model: &Model,
        column: &str,
        pattern: String,
        mode: MatchMode,
        escape: bool,
    ) -> Result<Like> {
        let Some(target) = model.column(column) else {
            return Err(Error::incompatible_operand(
                column,
                format!("no such column in `{}`", model.table_name),
            ));
        };

        if !target.is_pattern_matchable() {
            return Err(Error::incompatible_operand(
                column,
                format!("pattern match on a {} column", target.describe()),
            ));
        }

        if !escape && pattern.contains(SPECIAL) {
            return Err(Error::incompatible_operand(
                column,
                format!("pattern {pattern:?} contains wildcard characters; use an escaped match"),
            ));
        }

        Ok(Like {
            column: column.to_string(),
            pattern,
            mode,
            escape,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// The literal text being matched, without wildcards.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// True if the SQL form needs an `ESCAPE` clause.
    pub fn is_escaped(&self) -> bool {
        self.escape
    }

    /// The pattern as bound to a SQL `LIKE`: escaped if requested, with `%`
    /// affixed on the unanchored end(s).
    pub fn sql_pattern(&self) -> String {
        let mut literal = String::with_capacity(self.pattern.len() + 2);

        for c in self.pattern.chars() {
            if self.escape && SPECIAL.contains(&c) {
                literal.push(ESCAPE_CHAR);
            }
            literal.push(c);
        }

        match self.mode {
            MatchMode::PrefixOnly => format!("{literal}%"),
            MatchMode::SuffixOnly => format!("%{literal}"),
            MatchMode::BothEnds => format!("%{literal}%"),
        }
    }

    /// Matches a value's string form the way SQL `LIKE` does with
    /// case-sensitive matching.
    pub(super) fn matches_text(&self, text: &str) -> bool {
        match self.mode {
            MatchMode::PrefixOnly => text.starts_with(&self.pattern),
            MatchMode::SuffixOnly => text.ends_with(&self.pattern),
            MatchMode::BothEnds => text.contains(&self.pattern),
        }
    }
}

impl From<Like> for Condition {
    fn from(value: Like) -> Self {
        Self::Like(value)
    }
}
