pub mod patcher;

use std::collections::{HashMap, HashSet};

use crate::checker::SpellChecker;
use crate::session::Session;
use crate::{SpellingCorrection, SpellingError};

/// The outcome of one provider decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Correct this occurrence; with `all` set, every later occurrence of
    /// the same word in this run is corrected the same way without asking.
    Replace { replacement: String, all: bool },
    /// Skip this occurrence.
    Ignore,
    /// Skip this and every later occurrence of the same word in this run.
    IgnoreAll,
    /// Stop the run.
    Abort,
}

/// Where in a candidate's handling an observer event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPhase {
    /// Processing reached the error; no decision yet. A live presentation
    /// layer can highlight the location here.
    BeforeDecision,
    /// The error was resolved with a correction.
    AfterDecision,
}

/// Session operations the orchestrator hands to the decision provider for
/// the duration of one decision.
pub struct DecisionContext<'a> {
    checker: &'a SpellChecker,
    session: &'a mut Session,
}

impl DecisionContext<'_> {
    pub fn add_ignore_word(&mut self, word: &str) {
        self.session.add_ignore_word(word);
    }

    pub fn add_user_dictionary_word(&mut self, word: &str) {
        self.session.add_user_dictionary_word(word);
    }

    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.checker.suggest_words(self.session, word)
    }

    pub fn can_add_to_user_dictionary(&self, word: &str) -> bool {
        self.session.can_add_to_user_dictionary(word)
    }

    pub fn can_add_to_ignore_list(&self, word: &str) -> bool {
        self.session.can_add_to_ignore_list(word)
    }
}

/// Resolves one candidate error at a time, typically by presenting it to a
/// human and blocking until a choice is made.
pub trait DecisionProvider {
    /// Decide what to do about `error`. `position` is 1-based within the
    /// run's `total` candidates.
    fn decide(
        &mut self,
        ctx: &mut DecisionContext<'_>,
        error: &SpellingError,
        suggestions: &[String],
        position: usize,
        total: usize,
    ) -> Verdict;
}

type Observer<'a> = Box<dyn FnMut(&SpellingError, CheckPhase) + 'a>;

/// Drives the per-word correction decision loop over one text.
///
/// Candidates are processed in ascending position order. Batch directives
/// (replace-all, ignore-all) recorded by earlier decisions resolve later
/// occurrences of the same word without invoking the provider again; the
/// first directive recorded for a word wins and is never overwritten.
pub struct Corrector<'a> {
    checker: &'a SpellChecker,
    session: &'a mut Session,
    observer: Option<Observer<'a>>,
    checks_performed: bool,
}

impl<'a> Corrector<'a> {
    pub fn new(checker: &'a SpellChecker, session: &'a mut Session) -> Self {
        Self {
            checker,
            session,
            observer: None,
            checks_performed: false,
        }
    }

    /// Registers a callback fired as the loop moves through the text. For a
    /// given candidate the `BeforeDecision` event always precedes its
    /// `AfterDecision` event, and events follow processing order.
    pub fn set_observer(&mut self, observer: impl FnMut(&SpellingError, CheckPhase) + 'a) {
        self.observer = Some(Box::new(observer));
    }

    /// Whether the previous run invoked the provider at all. `false` means
    /// no unresolved spelling errors were found.
    pub fn checks_performed(&self) -> bool {
        self.checks_performed
    }

    fn notify(&mut self, error: &SpellingError, phase: CheckPhase) {
        if let Some(observer) = self.observer.as_mut() {
            observer(error, phase);
        }
    }

    /// Runs the decision loop and returns the accepted corrections sorted
    /// descending by start location (ties broken by descending original
    /// length), ready for [`patcher::apply`].
    ///
    /// When the provider aborts the run, the result is `None` if
    /// `abort_returns_none` is set, otherwise the corrections accepted
    /// strictly before the stop.
    pub fn run(
        &mut self,
        provider: &mut dyn DecisionProvider,
        text: &str,
        abort_returns_none: bool,
    ) -> Option<Vec<SpellingCorrection>> {
        self.checks_performed = false;

        let mut errors = self.checker.scan(self.session, text);
        let total = errors.len();

        // Batch directives recorded this run; first decision for a word wins.
        let mut replace_all: HashMap<String, String> = HashMap::new();
        let mut ignore_all: HashSet<String> = HashSet::new();

        let mut result = Vec::new();
        let mut interrupted = false;

        for (index, error) in errors.iter_mut().enumerate() {
            // Words accepted into the ignore list, possibly mid-run, are
            // skipped without consulting the provider.
            if self.session.is_ignored(&error.word) {
                continue;
            }

            if let Some(replacement) = replace_all.get(&error.word) {
                error.replace_all = true;
                error.corrected_word = Some(replacement.clone());
                result.push(SpellingCorrection {
                    start_location: error.start_location,
                    end_location: error.start_location + error.length(),
                    word: error.word.clone(),
                    corrected_word: replacement.clone(),
                    replace_all: true,
                });
                self.notify(error, CheckPhase::AfterDecision);
                continue;
            }

            if ignore_all.contains(&error.word) {
                continue;
            }

            self.notify(error, CheckPhase::BeforeDecision);

            let suggestions = self.checker.suggest_words(self.session, &error.word);
            self.checks_performed = true;

            let mut ctx = DecisionContext {
                checker: self.checker,
                session: &mut *self.session,
            };
            let verdict = provider.decide(&mut ctx, error, &suggestions, index + 1, total);

            match verdict {
                Verdict::Abort => {
                    interrupted = true;
                    break;
                }
                Verdict::Ignore => {
                    error.ignore = true;
                }
                Verdict::IgnoreAll => {
                    error.ignore_all = true;
                    ignore_all.insert(error.word.clone());
                }
                Verdict::Replace { replacement, all } => {
                    error.corrected_word = Some(replacement.clone());

                    // A blank replacement resolves nothing: skip the
                    // occurrence and record no directive, so later
                    // occurrences are not patched with blank text either.
                    if !error.corrected() {
                        continue;
                    }

                    if all {
                        error.replace_all = true;
                        replace_all
                            .entry(error.word.clone())
                            .or_insert(replacement.clone());
                    }

                    self.notify(error, CheckPhase::AfterDecision);
                    result.push(SpellingCorrection {
                        start_location: error.start_location,
                        end_location: error.start_location + error.length(),
                        word: error.word.clone(),
                        corrected_word: replacement,
                        replace_all: all,
                    });
                }
            }
        }

        if interrupted && abort_returns_none {
            return None;
        }

        // Highest offsets first: splicing a replacement of a different
        // length never perturbs the offsets of corrections still pending
        // at lower offsets.
        result.sort_by(|a, b| {
            b.start_location
                .cmp(&a.start_location)
                .then(b.length().cmp(&a.length()))
        });

        Some(result)
    }

    /// Runs the decision loop and applies the accepted corrections to the
    /// text. `None` when the run was aborted and `abort_returns_none` is
    /// set; no patching is attempted in that case.
    pub fn run_on_text(
        &mut self,
        provider: &mut dyn DecisionProvider,
        text: &str,
        abort_returns_none: bool,
    ) -> Option<String> {
        let corrections = self.run(provider, text, abort_returns_none)?;
        Some(patcher::apply(text, &corrections))
    }
}
