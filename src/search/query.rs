/// A normalized search query.
///
/// `Empty` is a distinct state rather than an error: the live surface maps
/// it to "no results shown" while the HTTP surface maps it to "no text
/// filter". Callers never hand `Empty` to the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Empty,
    Term(String),
}

impl Query {
    /// Trims and lowercases `raw`.
    ///
    /// Lowercasing is `str::to_lowercase`, i.e. Unicode simple case folding
    /// with no locale tailoring and no diacritic stripping: a query carrying
    /// diacritics only matches text carrying the same diacritics.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Query::Empty
        } else {
            Query::Term(trimmed.to_lowercase())
        }
    }

    pub fn as_term(&self) -> Option<&str> {
        match self {
            Query::Empty => None,
            Query::Term(term) => Some(term),
        }
    }
}
