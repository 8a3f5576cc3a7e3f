//! Surface-form checks that keep trivial variants of agent words out of
//! the clue pool.

/// Levenshtein distance over characters (insert, delete, substitute; all cost 1).
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// True when one word is the other plus "ing".
#[must_use]
pub fn is_ing_variant(a: &str, b: &str) -> bool {
    a.strip_suffix("ing") == Some(b) || b.strip_suffix("ing") == Some(a)
}

/// True when `candidate` is too close in spelling to `agent` to be a fair clue.
#[must_use]
pub fn too_similar(candidate: &str, agent: &str, max_edit_distance: usize) -> bool {
    edit_distance(candidate, agent) <= max_edit_distance || is_ing_variant(candidate, agent)
}
