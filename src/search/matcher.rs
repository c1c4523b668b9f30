use crate::store::snapshot::Article;

/// Containment strategy applied per article.
///
/// Both strategies test literal case-insensitive substring containment; no
/// wildcard or regex metacharacters are interpreted. Which one applies
/// depends on the shape of the backing data: the precomputed corpus carries
/// answers and tags worth searching, while the live browsing tree only
/// pre-searches question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Question OR answer OR any tag contains the term.
    MultiField,
    /// Only the question text contains the term.
    QuestionOnly,
}

impl MatchStrategy {
    /// `term` must already be normalized (see [`crate::search::query::Query`]).
    pub fn matches(self, term: &str, article: &Article) -> bool {
        if article.question.to_lowercase().contains(term) {
            return true;
        }

        match self {
            MatchStrategy::QuestionOnly => false,
            MatchStrategy::MultiField => {
                if let Some(answer) = &article.answer {
                    if answer.to_lowercase().contains(term) {
                        return true;
                    }
                }
                article
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(term))
            }
        }
    }
}
