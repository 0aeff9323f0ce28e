pub mod dictionary;
pub mod suggestions;

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::session::Session;
use crate::SpellingError;
use dictionary::{DictionarySource, PrimaryDictionary};

lazy_static! {
    static ref WORD_BOUNDARY: Regex = Regex::new(r"\b\w+\b").expect("static pattern compiles");
}

/// Resolves word validity and suggestions across the configured sources and
/// scans texts for misspelled tokens.
///
/// Exactly one of the primary dictionary and the external source is
/// authoritative at a time; the primary is preferred when both are set.
/// Per-session state (ignore list, user dictionary) is passed in by
/// reference so several sessions can share one loaded dictionary.
pub struct SpellChecker {
    primary: Option<PrimaryDictionary>,
    external: Option<Box<dyn DictionarySource>>,
    word_pattern: Regex,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    pub fn new() -> Self {
        Self {
            primary: None,
            external: None,
            word_pattern: WORD_BOUNDARY.clone(),
        }
    }

    pub fn set_primary(&mut self, dictionary: PrimaryDictionary) {
        self.primary = Some(dictionary);
    }

    pub fn set_external(&mut self, source: Box<dyn DictionarySource>) {
        self.external = Some(source);
    }

    /// Overrides the token pattern used by [`scan`](Self::scan).
    pub fn set_word_pattern(&mut self, pattern: Regex) {
        self.word_pattern = pattern;
    }

    fn dictionary_check(&self, word: &str) -> bool {
        match (&self.primary, &self.external) {
            (Some(primary), _) => primary.check(word),
            (None, Some(external)) => external.check(word),
            (None, None) => false,
        }
    }

    fn dictionary_suggest(&self, word: &str) -> Vec<String> {
        match (&self.primary, &self.external) {
            (Some(primary), _) => primary.suggest(word),
            (None, Some(external)) => external.suggest(word),
            (None, None) => Vec::new(),
        }
    }

    /// Whether the word is acceptable: the session ignore list
    /// (case-insensitive) first, then the user dictionary (exact case),
    /// then the primary or external dictionary.
    pub fn is_valid(&self, session: &Session, word: &str) -> bool {
        if session.is_ignored(word) {
            return true;
        }

        if session.user_dictionary().check(word) {
            return true;
        }

        self.dictionary_check(word)
    }

    /// Merged correction suggestions for a word: the primary or external
    /// dictionary's, unioned with near matches from the user dictionary.
    /// With no user dictionary the engine's own ranking is kept as-is;
    /// once two sources contribute, the merged list is sorted
    /// case-insensitively. Lookup problems degrade to an empty list.
    pub fn suggest_words(&self, session: &Session, word: &str) -> Vec<String> {
        let primary = self.dictionary_suggest(word);

        if session.user_dictionary().is_empty() {
            return primary;
        }

        let user = session.user_dictionary().suggest(word);
        suggestions::merge(primary, user)
    }

    /// Finds misspelled tokens and their byte offsets, ascending by start
    /// location.
    ///
    /// A transient validity cache keeps repeated words from hitting the
    /// dictionary more than once per scan: a word already judged bad is
    /// emitted straight away, a word judged good is skipped. The cache
    /// never outlives the call.
    pub fn scan(&self, session: &Session, text: &str) -> Vec<SpellingError> {
        let mut result = Vec::new();

        // known-bad words, so repeats skip straight to "emit as error"
        let mut failed_words: HashSet<String> = HashSet::new();
        // known-good words, so repeats skip the dictionary entirely
        let mut word_ok_list: HashSet<String> = HashSet::new();

        for token in self.word_pattern.find_iter(text) {
            let word = token.as_str();

            if word_ok_list.contains(word) {
                continue;
            }

            if failed_words.contains(word) {
                result.push(SpellingError {
                    start_location: token.start(),
                    end_location: token.end(),
                    word: word.to_string(),
                    ..Default::default()
                });
                continue;
            }

            if self.is_valid(session, word) {
                word_ok_list.insert(word.to_string());
                continue;
            }

            failed_words.insert(word.to_string());
            result.push(SpellingError {
                start_location: token.start(),
                end_location: token.end(),
                word: word.to_string(),
                ..Default::default()
            });
        }

        result
    }
}
