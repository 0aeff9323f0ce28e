/// Merge primary-dictionary and user-dictionary suggestions.
///
/// User suggestions not already present (byte-wise comparison) are appended,
/// then the whole list is sorted case-insensitively so that entries from the
/// two sources interleave alphabetically. Deterministic for a fixed
/// dictionary state.
pub fn merge(mut primary: Vec<String>, user: Vec<String>) -> Vec<String> {
    for suggestion in user {
        if !primary.iter().any(|s| *s == suggestion) {
            primary.push(suggestion);
        }
    }

    primary.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    primary
}

/// Words from `candidates` within `max_distance` edits of `word`, nearest
/// first. Candidate order breaks distance ties, keeping results stable.
pub fn nearest_words(word: &str, candidates: &[String], max_distance: usize) -> Vec<String> {
    let mut matches: Vec<&String> = candidates
        .iter()
        .filter(|candidate| edit_distance(word, candidate) <= max_distance)
        .collect();

    matches.sort_by_key(|candidate| edit_distance(word, candidate));
    matches.into_iter().cloned().collect()
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(a_len + 1) {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate().take(b_len + 1) {
        *item = j;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[a_len][b_len]
}
