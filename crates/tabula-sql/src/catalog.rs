//! Maps field kinds to SQL column type clauses.
//!
//! The catalog is a registry keyed by [`FieldKindTag`]. Supporting a new
//! kind means registering a template for it; the statement builders only
//! ever look kinds up.

use tabula_core::schema::{FieldKind, FieldKindTag};

use std::{collections::HashMap, fmt};

/// Placeholder replaced by the field's precision when a template is rendered.
pub const PRECISION: &str = "{precision}";

/// A column type clause, optionally parameterized by `{precision}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTemplate(String);

/// Field-kind to column-type registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    types: HashMap<FieldKindTag, TypeTemplate>,
}

impl TypeTemplate {
    pub fn new(template: impl Into<String>) -> TypeTemplate {
        TypeTemplate(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the template for `kind`.
    ///
    /// Returns `None` when the template needs a precision the kind does
    /// not carry.
    pub fn render(&self, kind: &FieldKind) -> Option<String> {
        if !self.0.contains(PRECISION) {
            return Some(self.0.clone());
        }

        let precision = kind.precision()?;
        Some(self.0.replace(PRECISION, &precision.to_string()))
    }
}

impl From<&str> for TypeTemplate {
    fn from(value: &str) -> Self {
        TypeTemplate::new(value)
    }
}

impl From<String> for TypeTemplate {
    fn from(value: String) -> Self {
        TypeTemplate(value)
    }
}

impl fmt::Display for TypeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Catalog {
    /// A catalog with no registered kinds.
    pub fn empty() -> Catalog {
        Catalog {
            types: HashMap::new(),
        }
    }

    /// Registers the type clause for `tag`, returning the template it replaces.
    pub fn register(
        &mut self,
        tag: FieldKindTag,
        template: impl Into<TypeTemplate>,
    ) -> Option<TypeTemplate> {
        self.types.insert(tag, template.into())
    }

    pub fn with(mut self, tag: FieldKindTag, template: impl Into<TypeTemplate>) -> Catalog {
        self.register(tag, template);
        self
    }

    pub fn get(&self, tag: FieldKindTag) -> Option<&TypeTemplate> {
        self.types.get(&tag)
    }

    pub fn contains(&self, tag: FieldKindTag) -> bool {
        self.types.contains_key(&tag)
    }

    /// The SQL type clause for `kind`, or `None` if the kind is unmapped.
    pub fn type_clause(&self, kind: &FieldKind) -> Option<String> {
        self.get(kind.tag())?.render(kind)
    }
}

impl Default for Catalog {
    /// Text, decimal and link columns. Boolean and date columns need a
    /// registered template.
    fn default() -> Self {
        Catalog::empty()
            .with(FieldKindTag::Text, "varchar(255)")
            .with(FieldKindTag::Decimal, "float(10, {precision})")
            .with(FieldKindTag::Link, "int")
    }
}
