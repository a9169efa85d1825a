//! Smooth weighted round-robin step.
//!
//! Every pass raises each accumulator by its entry's weight, picks the
//! largest accumulator, then lowers the winner by the total weight. The
//! winner sinks below the others by exactly the pool's weight, so heavy
//! entries come back often but never in weight-sized bursts.

use super::entry::Entry;

/// Advance every accumulator by one step and return the winner's index.
///
/// Returns `None` only for an empty slice. Comparison is strict `>`, so
/// among equal accumulators the earliest entry keeps the selection.
pub(crate) fn advance(entries: &mut [Entry]) -> Option<usize> {
    let mut total: i64 = 0;
    let mut best: Option<(usize, i64)> = None;

    for (idx, entry) in entries.iter_mut().enumerate() {
        let weight = i64::from(entry.weight);
        entry.current += weight;
        total += weight;

        if best.map_or(true, |(_, max)| entry.current > max) {
            best = Some((idx, entry.current));
        }
    }

    let (winner, _) = best?;
    entries[winner].current -= total;
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(weights: &[(&str, u32)]) -> Vec<Entry> {
        weights.iter().map(|(id, w)| Entry::new((*id).to_string(), *w)).collect()
    }

    fn run(entries: &mut [Entry], n: usize) -> Vec<String> {
        (0..n)
            .filter_map(|_| advance(entries).map(|idx| entries[idx].id.clone()))
            .collect()
    }

    #[test]
    fn test_empty_pool_has_no_winner() {
        let mut entries: Vec<Entry> = Vec::new();
        assert_eq!(advance(&mut entries), None);
    }

    #[test]
    fn test_interleaves_instead_of_bursting() {
        let mut entries = pool(&[("a", 5), ("b", 3), ("c", 2)]);
        let picks = run(&mut entries, 10);
        assert_eq!(picks, ["a", "b", "c", "a", "a", "b", "a", "c", "b", "a"]);
    }

    #[test]
    fn test_accumulators_return_to_zero_after_full_cycle() {
        let mut entries = pool(&[("a", 5), ("b", 3), ("c", 2)]);
        run(&mut entries, 10);
        assert!(entries.iter().all(|e| e.current == 0), "{entries:?}");
    }

    #[test]
    fn test_winner_is_reduced_by_total_not_own_weight() {
        let mut entries = pool(&[("a", 2), ("b", 1)]);
        assert_eq!(advance(&mut entries), Some(0));
        assert_eq!(entries[0].current, 2 - 3);
        assert_eq!(entries[1].current, 1);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let mut entries = pool(&[("a", 1), ("b", 1)]);
        assert_eq!(advance(&mut entries), Some(0));
    }

    #[test]
    fn test_all_zero_weights_pick_first_entry() {
        let mut entries = pool(&[("a", 0), ("b", 0)]);
        for _ in 0..5 {
            assert_eq!(advance(&mut entries), Some(0));
        }
        assert!(entries.iter().all(|e| e.current == 0));
    }

    #[test]
    fn test_zero_weight_never_wins_against_positive() {
        let mut entries = pool(&[("a", 0), ("b", 1), ("c", 1)]);
        let picks = run(&mut entries, 100);
        assert!(!picks.iter().any(|id| id == "a"));
    }

    #[test]
    fn test_no_long_gaps_for_light_entry() {
        // c has weight 1 out of 10: it must appear once in every 10 picks.
        let mut entries = pool(&[("a", 6), ("b", 3), ("c", 1)]);
        let picks = run(&mut entries, 100);
        for window in picks.chunks(10) {
            assert_eq!(window.iter().filter(|id| *id == "c").count(), 1);
        }
    }
}
