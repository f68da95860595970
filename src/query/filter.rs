use std::fmt;

use crate::models::{Category, Record, RecordKind};

/// Restricts results to one record kind.
///
/// Parsing never fails: a value that names no kind becomes `Unrecognized`,
/// which matches no record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(RecordKind),
    Unrecognized(String),
}

impl TypeFilter {
    /// Parses one of `all`, `note`, `task` or `event`, matched exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifeorg::{RecordKind, TypeFilter};
    ///
    /// assert_eq!(TypeFilter::parse("task"), TypeFilter::Only(RecordKind::Task));
    /// assert_eq!(TypeFilter::parse("Task"), TypeFilter::Unrecognized("Task".to_string()));
    /// ```
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return Self::All;
        }
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .map_or_else(|| Self::Unrecognized(value.to_string()), Self::Only)
    }

    /// Returns whether a record of `kind` passes this filter.
    pub fn accepts(&self, kind: RecordKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == kind,
            Self::Unrecognized(_) => false,
        }
    }

    /// Cycles `All -> note -> task -> event -> All`.
    ///
    /// An unrecognized value restarts the cycle at `All`.
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(RecordKind::Note),
            Self::Only(RecordKind::Note) => Self::Only(RecordKind::Task),
            Self::Only(RecordKind::Task) => Self::Only(RecordKind::Event),
            Self::Only(RecordKind::Event) | Self::Unrecognized(_) => Self::All,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => write!(f, "{kind}"),
            Self::Unrecognized(value) => f.write_str(value),
        }
    }
}

/// Restricts results to one category.
///
/// Like [`TypeFilter`], unknown values parse to `Unrecognized` and match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    /// Parses `All` or a category name, matched exactly.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            return Self::All;
        }
        Category::from_name(value)
            .map_or_else(|| Self::Unrecognized(value.to_string()), Self::Only)
    }

    /// Returns whether a record in `category` passes this filter.
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
            Self::Unrecognized(_) => false,
        }
    }

    /// Cycles through `All` and then each category in display order.
    pub fn next(&self) -> Self {
        match self {
            Self::All | Self::Unrecognized(_) => Self::Only(Category::ALL[0]),
            Self::Only(current) => Category::ALL
                .iter()
                .position(|category| category == current)
                .and_then(|index| Category::ALL.get(index + 1))
                .map_or(Self::All, |category| Self::Only(*category)),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => write!(f, "{category}"),
            Self::Unrecognized(value) => f.write_str(value),
        }
    }
}

/// Free text plus type and category filters.
///
/// The text is kept as given, surrounding whitespace included; only an
/// empty text matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
    kind: TypeFilter,
    category: CategoryFilter,
}

impl Query {
    /// Creates a query for `text` with both filters set to `All`.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().to_string(),
            kind: TypeFilter::All,
            category: CategoryFilter::All,
        }
    }

    /// Builds a query from untyped input.
    ///
    /// Missing text becomes the empty string and missing filters mean `All`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifeorg::{CategoryFilter, Query, TypeFilter};
    ///
    /// let query = Query::from_raw(None, Some("task"), None);
    /// assert_eq!(query.text(), "");
    /// assert_eq!(query.category(), &CategoryFilter::All);
    /// assert_ne!(query.kind(), &TypeFilter::All);
    /// ```
    pub fn from_raw(text: Option<&str>, kind: Option<&str>, category: Option<&str>) -> Self {
        Self::new(text.unwrap_or_default())
            .with_kind(kind.map_or(TypeFilter::All, TypeFilter::parse))
            .with_category(category.map_or(CategoryFilter::All, CategoryFilter::parse))
    }

    /// Sets the type filter.
    pub fn with_kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &TypeFilter {
        &self.kind
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Returns whether the record passes both filters, ignoring the text.
    pub fn accepts_filters(&self, record: &Record) -> bool {
        self.kind.accepts(record.kind()) && self.category.accepts(record.category())
    }
}
