//! Filter predicates and text search over carousel items.

use std::sync::Arc;

use vitrine_net::{EntryKind, Repository, TimelineEntry};

/// A visibility predicate. Returns `true` to keep the item.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Items that expose text for searching.
pub trait Searchable {
    /// Every text fragment a query may match against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl Searchable for &str {
    fn search_fields(&self) -> Vec<&str> {
        vec![*self]
    }
}

impl Searchable for Repository {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.language.as_deref());
        fields.extend(self.topics.iter().map(String::as_str));
        fields
    }
}

impl Searchable for TimelineEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.organization.as_str(),
            self.date.as_str(),
        ];
        fields.extend(self.location.as_deref());
        fields.extend(self.description.iter().map(String::as_str));
        fields
    }
}

/// Whether every term appears in at least one field, ignoring case.
pub fn matches_terms(fields: &[&str], terms: &[String]) -> bool {
    let fields: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    terms
        .iter()
        .all(|term| fields.iter().any(|field| field.contains(term.as_str())))
}

/// Build a case-insensitive text search predicate.
///
/// The query is split on whitespace and every term must match some field.
/// A blank query yields `None`, which shows every item.
pub fn text_filter<T: Searchable + 'static>(query: &str) -> Option<FilterFn<T>> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return None;
    }
    Some(Arc::new(move |item: &T| {
        matches_terms(&item.search_fields(), &terms)
    }))
}

/// Keep repositories tagged with `topic`.
pub fn topic_filter(topic: impl Into<String>) -> FilterFn<Repository> {
    let topic = topic.into();
    Arc::new(move |repo: &Repository| repo.has_topic(&topic))
}

/// Keep timeline entries from one list.
pub fn kind_filter(kind: EntryKind) -> FilterFn<TimelineEntry> {
    Arc::new(move |entry: &TimelineEntry| entry.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_identity() {
        assert!(text_filter::<String>("").is_none());
        assert!(text_filter::<String>("   \t ").is_none());
    }

    #[test]
    fn test_all_terms_must_match() {
        let filter = text_filter::<String>("Python data").unwrap();
        assert!(filter(&"Data Analysis with Python".to_string()));
        assert!(!filter(&"Generative AI Fundamentals".to_string()));
    }

    #[test]
    fn test_terms_may_match_different_fields() {
        let repo = Repository {
            name: "portfolio".into(),
            description: Some("Personal site".into()),
            topics: vec!["react".into()],
            html_url: "https://github.com/u/portfolio".into(),
            updated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            language: Some("JavaScript".into()),
            homepage: None,
        };

        assert!(text_filter::<Repository>("REACT personal").unwrap()(&repo));
        assert!(text_filter::<Repository>("javascript").unwrap()(&repo));
        assert!(!text_filter::<Repository>("rust").unwrap()(&repo));
        assert!(topic_filter("React")(&repo));
    }
}
