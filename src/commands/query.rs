//! Dictionary query commands
//!
//! Runs one lexical query against an index and packages the answer for display.

use crate::core::scramble;
use crate::index::{DictionaryIndex, SearchCriteria};

/// A single dictionary query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Exists(String),
    Prefix(String),
    Search(SearchCriteria),
    SubWords {
        word: String,
        min_length: Option<usize>,
    },
    Anagrams(String),
    Palindromes,
    Random {
        length: Option<usize>,
    },
    Scramble(String),
}

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Membership answer
    Exists { word: String, exists: bool },
    /// A set of words, already in display order
    Words { title: String, words: Vec<String> },
    /// A single word, or `None` if nothing matched
    Word {
        title: String,
        word: Option<String>,
    },
}

/// Run a query against the index
#[must_use]
pub fn run_query(index: &DictionaryIndex, query: &Query) -> QueryResult {
    match query {
        Query::Exists(word) => QueryResult::Exists {
            word: word.clone(),
            exists: index.exists(word),
        },
        Query::Prefix(prefix) => QueryResult::Words {
            title: format!("Words starting with '{prefix}'"),
            words: index.words_with_prefix(prefix).into_iter().collect(),
        },
        Query::Search(criteria) => QueryResult::Words {
            title: describe_search(criteria),
            words: index.search(*criteria).into_iter().collect(),
        },
        Query::SubWords { word, min_length } => QueryResult::Words {
            title: format!(
                "Sub-words of '{word}' (min length {})",
                min_length.unwrap_or(crate::index::DEFAULT_MIN_LENGTH)
            ),
            words: index.sub_words(word, *min_length).into_iter().collect(),
        },
        Query::Anagrams(word) => QueryResult::Words {
            title: format!("Anagrams of '{word}'"),
            words: index.anagrams(word).into_iter().collect(),
        },
        Query::Palindromes => QueryResult::Words {
            title: "Palindromes".to_string(),
            words: index.palindromes().iter().cloned().collect(),
        },
        Query::Random { length } => QueryResult::Word {
            title: length.map_or_else(
                || "Random word".to_string(),
                |len| format!("Random word of length {len}"),
            ),
            word: index.random_word(*length).map(str::to_string),
        },
        Query::Scramble(word) => QueryResult::Word {
            title: format!("Scrambled '{word}'"),
            word: Some(scramble(word)),
        },
    }
}

fn describe_search(criteria: &SearchCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(c) = criteria.start {
        parts.push(format!("start '{c}'"));
    }
    if let Some(c) = criteria.end {
        parts.push(format!("end '{c}'"));
    }
    if let Some(len) = criteria.length {
        parts.push(format!("length {len}"));
    }
    if parts.is_empty() {
        "Search (no criteria)".to_string()
    } else {
        format!("Search: {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> DictionaryIndex {
        DictionaryIndex::from_words(["yellow", "low", "owl", "level", "yell", "apple"])
    }

    #[test]
    fn exists_query() {
        let result = run_query(&index(), &Query::Exists("Owl".to_string()));
        assert_eq!(
            result,
            QueryResult::Exists {
                word: "Owl".to_string(),
                exists: true
            }
        );
    }

    #[test]
    fn sub_words_query() {
        let query = Query::SubWords {
            word: "yellow".to_string(),
            min_length: None,
        };
        match run_query(&index(), &query) {
            QueryResult::Words { title, words } => {
                assert!(title.contains("min length 3"));
                assert_eq!(words, ["low", "owl", "yell"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn search_query_title() {
        let criteria = SearchCriteria::default().starting_with('y').of_length(4);
        match run_query(&index(), &Query::Search(criteria)) {
            QueryResult::Words { title, words } => {
                assert_eq!(title, "Search: start 'y', length 4");
                assert_eq!(words, ["yell"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn palindromes_query() {
        match run_query(&index(), &Query::Palindromes) {
            QueryResult::Words { words, .. } => assert_eq!(words, ["level"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn random_query_missing_length() {
        let result = run_query(&index(), &Query::Random { length: Some(9) });
        assert!(matches!(result, QueryResult::Word { word: None, .. }));
    }

    #[test]
    fn scramble_query() {
        match run_query(&index(), &Query::Scramble("yellow".to_string())) {
            QueryResult::Word { word: Some(word), .. } => assert_ne!(word, "yellow"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
