pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut cur = vec![0; b_chars.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            cur[j + 1] = (prev[j + 1] + 1).min(cur[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b_chars.len()]
}

/// Closest candidate within half the length of `name` (at least 1 edit).
/// Ties keep the later candidate.
pub fn find_best_match<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut best = None;
    let mut limit = (name.chars().count() / 2).max(1);
    for candidate in candidates {
        let distance = levenshtein_distance(name, candidate);
        if distance <= limit {
            limit = distance;
            best = Some(candidate);
        }
    }
    best
}
