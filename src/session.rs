use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::checker::suggestions;

/// Maximum edit distance for a user-dictionary word to count as a
/// suggestion for a misspelled word.
const USER_SUGGESTION_DISTANCE: usize = 2;

/// User-added words, distinct from the primary loaded dictionary.
///
/// Keeps the insertion-ordered word list so the dictionary can be rebuilt
/// or persisted exactly as entered, alongside an exact-case membership
/// index for lookups.
#[derive(Debug, Clone, Default)]
pub struct UserDictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl UserDictionary {
    /// Rebuild the dictionary from a word list, replacing any prior content.
    pub fn load<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.clear();
        self.index.clear();
        for word in words {
            let word = word.into();
            if self.index.insert(word.clone()) {
                self.words.push(word);
            }
        }
    }

    /// Exact-case membership check; "Teh" does not validate "teh".
    pub fn check(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn add(&mut self, word: &str) -> bool {
        if self.index.contains(word) {
            return false;
        }
        self.index.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    /// User-dictionary suggestions for a misspelled word: entries within a
    /// small edit distance, nearest first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::nearest_words(word, &self.words, USER_SUGGESTION_DISTANCE)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.index.clear();
    }
}

/// Per-user spell-check session state: the user dictionary and the ignore
/// list. Outlives any single correction run; callers using a session from
/// more than one thread must serialize access externally.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user_dictionary: UserDictionary,
    ignore_list: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_dictionary(&self) -> &UserDictionary {
        &self.user_dictionary
    }

    /// Adds a word to the ignore list unless an identical entry exists.
    pub fn add_ignore_word(&mut self, word: &str) {
        if self.can_add_to_ignore_list(word) {
            self.ignore_list.push(word.to_string());
        }
    }

    pub fn add_user_dictionary_word(&mut self, word: &str) {
        self.add_to_user_dictionary(word);
    }

    /// Adds a word to the user dictionary, reporting whether it was new.
    pub fn add_to_user_dictionary(&mut self, word: &str) -> bool {
        self.user_dictionary.add(word)
    }

    /// Byte-wise comparison: a differently-cased duplicate is still addable.
    pub fn can_add_to_user_dictionary(&self, word: &str) -> bool {
        !self.user_dictionary.check(word)
    }

    pub fn can_add_to_ignore_list(&self, word: &str) -> bool {
        !self.ignore_list.iter().any(|w| w == word)
    }

    /// Case-insensitive ignore-list match: ignoring "Teh" also accepts "teh".
    pub fn is_ignored(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.ignore_list.iter().any(|w| w.to_lowercase() == word)
    }

    pub fn ignore_list(&self) -> &[String] {
        &self.ignore_list
    }

    pub fn clear(&mut self) {
        self.user_dictionary.clear();
        self.ignore_list.clear();
    }

    /// The user dictionary as a tab-delimited line, the standard save format.
    pub fn user_dictionary_save_value(&self) -> String {
        self.user_dictionary.words().join("\t")
    }

    /// The ignore list as a tab-delimited line, the standard save format.
    pub fn ignore_list_save_value(&self) -> String {
        self.ignore_list.join("\t")
    }

    /// Rebuilds the user dictionary from a tab-delimited line. A blank
    /// value leaves the current dictionary untouched.
    pub fn set_user_dictionary_save_value(&mut self, save_value: &str) {
        if save_value.trim().is_empty() {
            return;
        }
        self.user_dictionary.load(save_value.split('\t'));
    }

    /// Rebuilds the ignore list from a tab-delimited line. A blank value
    /// leaves the current list untouched.
    pub fn set_ignore_list_save_value(&mut self, save_value: &str) {
        if save_value.trim().is_empty() {
            return;
        }
        self.ignore_list = save_value.split('\t').map(str::to_string).collect();
    }

    /// Saves the session to a file: line 1 the user dictionary, line 2 the
    /// ignore list, both tab-delimited. I/O failures are reported as
    /// `false`, never raised.
    pub fn save(&self, path: &Path) -> bool {
        let contents = format!(
            "{}\n{}\n",
            self.user_dictionary_save_value(),
            self.ignore_list_save_value()
        );
        fs::write(path, contents).is_ok()
    }

    /// Loads the session from a file in the two-line tab-delimited format.
    /// I/O failures are reported as `false`, never raised.
    pub fn load(&mut self, path: &Path) -> bool {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return false,
        };
        let mut lines = contents.lines();
        if let Some(line) = lines.next() {
            self.set_user_dictionary_save_value(line);
        }
        if let Some(line) = lines.next() {
            self.set_ignore_list_save_value(line);
        }
        true
    }
}
