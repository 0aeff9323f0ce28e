use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to compile dictionary: {0}")]
    Parse(String),
}

/// A pluggable word-validity source that can stand in for the loaded
/// primary dictionary, e.g. a remote service or a different engine.
pub trait DictionarySource {
    /// Whether the word is spelled correctly.
    fn check(&self, word: &str) -> bool;

    /// Correction suggestions for a misspelled word.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// The primary dictionary: a Hunspell-compatible word list and affix file
/// compiled by the `spellbook` engine.
pub struct PrimaryDictionary {
    dict: spellbook::Dictionary,
}

impl PrimaryDictionary {
    /// Compiles a dictionary from `.aff` and `.dic` file contents.
    pub fn compile(affix: &str, wordlist: &str) -> Result<Self, DictionaryError> {
        let dict = spellbook::Dictionary::new(affix, wordlist)
            .map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Ok(Self { dict })
    }

    /// Reads and compiles a dictionary from `.dic` and `.aff` file paths.
    pub fn load(wordlist_path: &Path, affix_path: &Path) -> Result<Self, DictionaryError> {
        let wordlist = fs::read_to_string(wordlist_path)?;
        let affix = fs::read_to_string(affix_path)?;
        Self::compile(&affix, &wordlist)
    }

    pub fn check(&self, word: &str) -> bool {
        self.dict.check(word)
    }

    pub fn suggest(&self, word: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        self.dict.suggest(word, &mut suggestions);
        suggestions
    }
}
