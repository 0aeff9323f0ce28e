pub mod checker;
pub mod cli;
pub mod config;
pub mod corrector;
pub mod session;

pub use checker::SpellChecker;
pub use config::Config;
pub use corrector::{Corrector, DecisionProvider, Verdict};
pub use session::Session;

/// One possibly-misspelled token found by a scan, carrying its pending
/// decision state for the lifetime of a single correction run.
///
/// Locations are byte offsets into the original text snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellingError {
    pub start_location: usize,
    pub end_location: usize,
    pub word: String,
    pub corrected_word: Option<String>,
    pub ignore: bool,
    pub ignore_all: bool,
    pub replace_all: bool,
}

impl SpellingError {
    pub fn length(&self) -> usize {
        self.end_location - self.start_location
    }

    pub fn corrected(&self) -> bool {
        self.corrected_word
            .as_deref()
            .is_some_and(|w| !w.trim().is_empty())
    }
}

/// The finalized outcome for one error instance that was actually corrected.
///
/// `end_location` is always `start_location` plus the length of the
/// *original* token, so the patcher knows exactly which span to remove
/// regardless of the replacement's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingCorrection {
    pub start_location: usize,
    pub end_location: usize,
    pub word: String,
    pub corrected_word: String,
    pub replace_all: bool,
}

impl SpellingCorrection {
    pub fn length(&self) -> usize {
        self.end_location - self.start_location
    }
}
