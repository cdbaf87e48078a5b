// src/search/parser.rs

use crate::domain::Purpose;
use crate::search::lexicon::{Lexicon, PORTUGUESE};
use crate::search::normalize_text;
use serde::Serialize;

/// Result of parsing one free-text query. Replaces the previous state
/// entirely; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub intent: Option<Purpose>,
    pub tokens: Vec<String>,
}

impl SearchState {
    /// A search is active when it carries an intent or at least one token.
    pub fn is_active(&self) -> bool {
        self.intent.is_some() || !self.tokens.is_empty()
    }
}

/// Parse with the default Portuguese lexicon.
pub fn parse_search_query(text: &str) -> SearchState {
    parse_with_lexicon(&PORTUGUESE, text)
}

/// Words are checked in order: rental word, sale word, stopword, token.
/// Intent words are consumed and the last one wins.
pub fn parse_with_lexicon(lexicon: &Lexicon, text: &str) -> SearchState {
    let normalized = normalize_text(text);
    let mut state = SearchState::default();

    for word in normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
    {
        if lexicon.is_rental(word) {
            state.intent = Some(Purpose::Rental);
        } else if lexicon.is_sale(word) {
            state.intent = Some(Purpose::Sale);
        } else if !lexicon.is_stopword(word) {
            state.tokens.push(word.to_string());
        }
    }

    state
}
