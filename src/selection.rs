pub type CardId = u64;

/// Cards to select after a search.
///
/// With `one_card` only the match following `current` is picked, wrapping
/// around to the first match at the end of the list or when `current` is not
/// one of the matches. Otherwise every match is selected.
pub fn select_matching(matches: &[CardId], current: Option<CardId>, one_card: bool) -> Vec<CardId> {
    if !one_card {
        return matches.to_vec();
    }

    let next = current
        .and_then(|cur| matches.iter().position(|&cid| cid == cur))
        .map(|idx| idx + 1)
        .filter(|&idx| idx < matches.len())
        .unwrap_or(0);

    matches.get(next).copied().into_iter().collect()
}
