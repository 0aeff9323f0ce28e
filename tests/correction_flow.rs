use spellfix::checker::dictionary::PrimaryDictionary;
use spellfix::corrector::{DecisionContext, DecisionProvider, Verdict};
use spellfix::{Corrector, Session, SpellChecker, SpellingError};

const TEST_AFF: &str = "SET UTF-8\nTRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ\n";
const TEST_DIC: &str = "9\nthe\ncat\nsat\non\nmat\nthis\nis\na\ntest\n";

fn engine_checker() -> SpellChecker {
    let mut checker = SpellChecker::new();
    checker.set_primary(PrimaryDictionary::compile(TEST_AFF, TEST_DIC).unwrap());
    checker
}

struct Scripted(Vec<Verdict>);

impl DecisionProvider for Scripted {
    fn decide(
        &mut self,
        _ctx: &mut DecisionContext<'_>,
        _error: &SpellingError,
        _suggestions: &[String],
        _position: usize,
        _total: usize,
    ) -> Verdict {
        if self.0.is_empty() {
            Verdict::Ignore
        } else {
            self.0.remove(0)
        }
    }
}

#[test]
fn clean_text_produces_no_errors_and_no_provider_calls() {
    let checker = engine_checker();
    let mut session = Session::new();

    assert!(checker.scan(&session, "the cat sat on the mat").is_empty());

    let mut provider = Scripted(vec![Verdict::Abort]);
    let mut corrector = Corrector::new(&checker, &mut session);
    let corrected = corrector
        .run_on_text(&mut provider, "the cat sat on the mat", true)
        .unwrap();

    assert_eq!(corrected, "the cat sat on the mat");
    assert!(!corrector.checks_performed());
}

#[test]
fn replace_all_corrects_every_occurrence_end_to_end() {
    let checker = engine_checker();
    let mut session = Session::new();
    let mut provider = Scripted(vec![Verdict::Replace {
        replacement: "the".to_string(),
        all: true,
    }]);

    let mut corrector = Corrector::new(&checker, &mut session);
    let corrected = corrector
        .run_on_text(&mut provider, "teh cat sat on teh mat", false)
        .unwrap();

    assert_eq!(corrected, "the cat sat on the mat");
}

#[test]
fn different_length_replacements_do_not_corrupt_offsets() {
    let checker = engine_checker();
    let mut session = Session::new();
    let mut provider = Scripted(vec![
        Verdict::Replace {
            replacement: "This".to_string(),
            all: false,
        },
        Verdict::Replace {
            replacement: "test".to_string(),
            all: false,
        },
    ]);

    let mut corrector = Corrector::new(&checker, &mut session);
    let corrected = corrector
        .run_on_text(&mut provider, "Ths is a tst.", false)
        .unwrap();

    assert_eq!(corrected, "This is a test.");
}

#[test]
fn ignored_and_user_dictionary_words_survive_session_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.txt");

    let mut session = Session::new();
    session.add_ignore_word("Teh");
    session.add_user_dictionary_word("Spellfix");
    assert!(session.save(&path));

    let mut restored = Session::new();
    assert!(restored.load(&path));

    let checker = engine_checker();
    // "teh" accepted case-insensitively via the ignore list; "Spellfix"
    // only in its exact case via the user dictionary.
    assert!(checker.scan(&restored, "teh cat").is_empty());
    assert!(checker.scan(&restored, "Spellfix is the test").is_empty());
    assert_eq!(checker.scan(&restored, "spellfix is the test").len(), 1);
}

#[test]
fn merged_suggestions_are_sorted_and_unique() {
    let checker = engine_checker();
    let mut session = Session::new();
    session.add_user_dictionary_word("tet");

    let suggestions = checker.suggest_words(&session, "tst");

    let mut sorted = suggestions.clone();
    sorted.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    assert_eq!(suggestions, sorted);

    for (i, a) in suggestions.iter().enumerate() {
        assert!(
            !suggestions[i + 1..].contains(a),
            "duplicate suggestion: {a}"
        );
    }
    assert!(suggestions.contains(&"tet".to_string()));
}

#[test]
fn aborted_run_discards_everything() {
    let checker = engine_checker();
    let mut session = Session::new();
    let mut provider = Scripted(vec![Verdict::Abort]);

    let mut corrector = Corrector::new(&checker, &mut session);
    assert!(corrector
        .run_on_text(&mut provider, "teh cat zat on teh mat", true)
        .is_none());
}
