//! Search / filter / sort intent.
//!
//! ViewQuery is replaced wholesale on every edit. Unknown or empty inputs degrade to
//! "not applied" rather than failing.

use std::cmp::Ordering;

/// Field the view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Keep filter order.
    #[default]
    None,
    /// Case-insensitive `first_name`.
    FirstName,
    /// Case-insensitive `email`.
    Email,
}

impl SortField {
    /// Parse a sort key as the sort selector submits it.
    ///
    /// `""` and unrecognised keys mean no sort.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "first_name" => SortField::FirstName,
            "email" => SortField::Email,
            _ => SortField::None,
        }
    }

    /// Key accepted by [`SortField::from_key`].
    pub fn key(self) -> &'static str {
        match self {
            SortField::None => "",
            SortField::FirstName => "first_name",
            SortField::Email => "email",
        }
    }
}

/// Sort order applied to the chosen field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// A to Z.
    #[default]
    Asc,
    /// Z to A.
    Desc,
}

impl SortDirection {
    /// The other direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Flip an ascending comparison for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Arrow shown next to the sorted column.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Current search / filter / sort intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Matched against the full name and the email.
    pub search_text: String,
    /// Email suffix, such as `@reqres.in`.
    pub domain_filter: String,
    /// At most one character when set through [`ViewQuery::with_first_letter`].
    pub first_letter_filter: String,
    /// Field to sort by.
    pub sort_field: SortField,
    /// Order for [`ViewQuery::sort_field`].
    pub sort_direction: SortDirection,
}

impl ViewQuery {
    /// Query that applies nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the domain suffix filter.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain_filter = domain.into();
        self
    }

    /// Keep only the first character of `letter`, as the one-character input does.
    pub fn with_first_letter(mut self, letter: &str) -> Self {
        self.first_letter_filter = letter.chars().take(1).collect();
        self
    }

    /// Set sort field and direction.
    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// True when no filter and no sort would be applied.
    pub fn is_passthrough(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.domain_filter.trim().is_empty()
            && self.first_letter_filter.trim().is_empty()
            && self.sort_field == SortField::None
    }
}
