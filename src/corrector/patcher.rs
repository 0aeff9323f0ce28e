use crate::SpellingCorrection;

/// Splices corrections into `text`.
///
/// Corrections must be non-overlapping and sorted descending by start
/// location, the order [`Corrector::run`](super::Corrector::run) produces:
/// patching from the highest offset down means a replacement of a different
/// length never shifts the spans still pending at lower offsets.
pub fn apply(text: &str, corrections: &[SpellingCorrection]) -> String {
    debug_assert!(
        corrections
            .windows(2)
            .all(|pair| pair[1].end_location <= pair[0].start_location),
        "corrections must be non-overlapping and sorted descending by start"
    );

    let mut patched = text.to_string();
    for correction in corrections {
        patched.replace_range(
            correction.start_location..correction.start_location + correction.length(),
            &correction.corrected_word,
        );
    }
    patched
}
