//! Generates the 5-card evaluator's perfect-hash constant tables
//! (`flushes`, `unique5`, `hash_adjust`, `hash_values`), treated by the
//! rest of this system as opaque inputs (spec.md §9). `lookup_tables.hpp`
//! in the original source ships these pre-computed; this module derives
//! them instead, the way `handrank_codegen` derives every other table.

use handrank_base::constants::PRIMES;
use handrank_base::find_fast_components;

const RANK_COUNT: usize = 13;
const Q_SPACE: usize = 1 << RANK_COUNT;
const HASH_BUCKETS: usize = 512;

/// The four constant tables consumed by the 5-card evaluator (C2).
pub struct CactusTables {
    /// Indexed by `q` (OR of the 5 cards' rank bits), valid when all 5
    /// cards share a suit. Rank in `1..=7462`, 0 where `q` has other than
    /// 5 bits set.
    pub flushes: Vec<u16>,
    /// Indexed by `q`, valid for hands with 5 distinct ranks and no flush.
    /// Covers straights and high-card hands; 0 elsewhere.
    pub unique5: Vec<u16>,
    /// Per-bucket adjustment applied to `a` before indexing `hash_values`.
    pub hash_adjust: Vec<u16>,
    /// Perfect-hash table for the remaining hands (pair, two pair, trips,
    /// full house, quads), addressed by `find_fast` of the prime product.
    pub hash_values: Vec<u16>,
}

/// A 5-card rank multiset: `counts[r]` is how many cards of rank `r` (0=2,
/// ..., 12=ace) the hand has. Sums to 5; no entry exceeds 4.
#[derive(Clone, Copy, Debug)]
struct RankPattern {
    counts: [u8; RANK_COUNT],
}

impl RankPattern {
    fn ranks_with_count(&self, count: u8) -> Vec<usize> {
        (0..RANK_COUNT)
            .filter(|&r| self.counts[r] == count)
            .collect()
    }

    fn is_five_distinct(&self) -> bool {
        self.counts.iter().all(|&c| c <= 1)
    }

    /// `q`: one bit per rank present, used to index `flushes`/`unique5`.
    fn q(&self) -> usize {
        let mut q = 0usize;
        for r in 0..RANK_COUNT {
            if self.counts[r] > 0 {
                q |= 1 << r;
            }
        }
        q
    }

    /// Prime product of the pattern's ranks (with multiplicity), used to
    /// key `hash_values` through `find_fast`.
    fn prime_product(&self) -> u32 {
        let mut p = 1u32;
        for r in 0..RANK_COUNT {
            for _ in 0..self.counts[r] {
                p *= PRIMES[r];
            }
        }
        p
    }

    /// The top rank of the straight this pattern forms, if it is one.
    /// The ace-low wheel (A-2-3-4-5) counts as topping out at "5" (rank
    /// index 3), below the 6-high straight, not above the broadway straight.
    fn straight_top(&self) -> Option<usize> {
        if !self.is_five_distinct() {
            return None;
        }
        let present = self.ranks_with_count(1);
        if present == [0, 1, 2, 3, 12] {
            return Some(3);
        }
        if present.len() == 5 && present[4] - present[0] == 4 {
            return Some(present[4]);
        }
        None
    }
}

fn enumerate_rank_patterns() -> Vec<RankPattern> {
    let mut result = Vec::new();
    let mut counts = [0u8; RANK_COUNT];
    enumerate_rank_patterns_rec(&mut counts, 0, 5, &mut result);
    result
}

fn enumerate_rank_patterns_rec(
    counts: &mut [u8; RANK_COUNT],
    rank: usize,
    remaining: u8,
    result: &mut Vec<RankPattern>,
) {
    if remaining == 0 {
        result.push(RankPattern { counts: *counts });
        return;
    }
    if rank == RANK_COUNT {
        return;
    }
    for c in 0..=remaining.min(4) {
        counts[rank] = c;
        enumerate_rank_patterns_rec(counts, rank + 1, remaining - c, result);
        counts[rank] = 0;
    }
}

/// Descending sort key within a category: a list of `(count, rank)` pairs
/// ordered count-major (quads before kickers, the higher pair before the
/// lower one, and so on), each group's ranks sorted high to low. Comparing
/// two keys lexicographically reproduces standard poker tie-breaking.
fn tiebreak_key(pattern: &RankPattern) -> Vec<(u8, usize)> {
    let mut groups: Vec<(u8, Vec<usize>)> = Vec::new();
    for count in (1..=4).rev() {
        let mut ranks = pattern.ranks_with_count(count);
        if !ranks.is_empty() {
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            groups.push((count, ranks));
        }
    }
    groups
        .into_iter()
        .flat_map(|(count, ranks)| ranks.into_iter().map(move |r| (count, r)))
        .collect()
}

/// Builds the four Cactus-Kev constant tables. Deterministic and pure:
/// every run produces the same internally-consistent perfect hash.
pub fn generate() -> CactusTables {
    let patterns = enumerate_rank_patterns();

    let mut straight_flush: Vec<&RankPattern> = Vec::new();
    let mut quads: Vec<&RankPattern> = Vec::new();
    let mut full_house: Vec<&RankPattern> = Vec::new();
    let mut flush: Vec<&RankPattern> = Vec::new();
    let mut straight: Vec<&RankPattern> = Vec::new();
    let mut trips: Vec<&RankPattern> = Vec::new();
    let mut two_pair: Vec<&RankPattern> = Vec::new();
    let mut pair: Vec<&RankPattern> = Vec::new();
    let mut high_card: Vec<&RankPattern> = Vec::new();

    for pattern in &patterns {
        if pattern.is_five_distinct() {
            if pattern.straight_top().is_some() {
                straight_flush.push(pattern);
                straight.push(pattern);
            } else {
                flush.push(pattern);
                high_card.push(pattern);
            }
            continue;
        }

        let shape = {
            let mut counts: Vec<u8> = pattern.counts.iter().copied().filter(|&c| c > 0).collect();
            counts.sort_unstable_by(|a, b| b.cmp(a));
            counts
        };

        match shape.as_slice() {
            [4, 1] => quads.push(pattern),
            [3, 2] => full_house.push(pattern),
            [3, 1, 1] => trips.push(pattern),
            [2, 2, 1] => two_pair.push(pattern),
            [2, 1, 1, 1] => pair.push(pattern),
            other => unreachable!("unexpected 5-card rank shape {other:?}"),
        }
    }

    // Straight/straight-flush sort by their special wheel-aware top rank;
    // every other category sorts by the generic count-major tiebreak key.
    straight_flush.sort_unstable_by_key(|p| std::cmp::Reverse(p.straight_top().unwrap()));
    straight.sort_unstable_by_key(|p| std::cmp::Reverse(p.straight_top().unwrap()));
    quads.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    full_house.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    flush.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    trips.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    two_pair.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    pair.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));
    high_card.sort_unstable_by_key(|p| std::cmp::Reverse(tiebreak_key(p)));

    let mut flushes = vec![0u16; Q_SPACE];
    let mut unique5 = vec![0u16; Q_SPACE];
    let mut pending: Vec<(u32, u16)> = Vec::new(); // (prime_product, rank)

    fn assign_q(patterns: &[&RankPattern], table: &mut [u16], next_rank: &mut u16) {
        for pattern in patterns {
            table[pattern.q()] = *next_rank;
            *next_rank += 1;
        }
    }

    let mut next_rank = 1u16;
    assign_q(&straight_flush, &mut flushes, &mut next_rank);
    next_rank = 11;
    for pattern in &quads {
        pending.push((pattern.prime_product(), next_rank));
        next_rank += 1;
    }
    for pattern in &full_house {
        pending.push((pattern.prime_product(), next_rank));
        next_rank += 1;
    }
    assign_q(&flush, &mut flushes, &mut next_rank);
    assign_q(&straight, &mut unique5, &mut next_rank);
    for pattern in &trips {
        pending.push((pattern.prime_product(), next_rank));
        next_rank += 1;
    }
    for pattern in &two_pair {
        pending.push((pattern.prime_product(), next_rank));
        next_rank += 1;
    }
    for pattern in &pair {
        pending.push((pattern.prime_product(), next_rank));
        next_rank += 1;
    }
    assign_q(&high_card, &mut unique5, &mut next_rank);

    let (hash_adjust, hash_values) = build_perfect_hash(&pending);

    CactusTables {
        flushes,
        unique5,
        hash_adjust,
        hash_values,
    }
}

/// Buckets `(prime_product, rank)` entries by `find_fast`'s fixed bucket
/// `b`, then for each bucket (largest first) searches increasing
/// `hash_adjust[b]` values until the bucket's `a ^ hash_adjust[b]` slots all
/// land inside `[0, table_size)` and collide with neither an earlier
/// bucket's assignment nor each other. The reader (`hash_values[a ^
/// hash_adjust[b]]`) never takes a modulo, so `table_size` is both the
/// slot count and the output range `a ^ hash_adjust[b]` must already fit
/// in — an out-of-range candidate is rejected the same way a collision is,
/// by trying the next `adjust`. The same construction `miniphf` uses for
/// its general PTHash parameters, specialized to the fixed, non-parametric
/// `find_fast` mixing function.
fn build_perfect_hash(entries: &[(u32, u16)]) -> (Vec<u16>, Vec<u16>) {
    let mut buckets: Vec<Vec<(u32, u16)>> = vec![Vec::new(); HASH_BUCKETS];
    for &(prime_product, rank) in entries {
        let (_, b) = find_fast_components(prime_product);
        buckets[b as usize].push((prime_product, rank));
    }

    let mut bucket_order: Vec<usize> = (0..HASH_BUCKETS).collect();
    bucket_order.sort_unstable_by_key(|&b| std::cmp::Reverse(buckets[b].len()));

    let table_size = entries.len();
    let mut slots: Vec<Option<u16>> = vec![None; table_size];
    let mut hash_adjust = vec![0u16; HASH_BUCKETS];

    for &b in &bucket_order {
        if buckets[b].is_empty() {
            continue;
        }

        let mut adjust = 0u32;
        'search: loop {
            let mut candidate_slots = Vec::with_capacity(buckets[b].len());
            for &(prime_product, _) in &buckets[b] {
                let (a, _) = find_fast_components(prime_product);
                // No modulo on the reader's side (`hash_values[a ^
                // hash_adjust[b]]`), so every candidate slot must already
                // land in range; out-of-range slots are rejected exactly
                // like colliding ones rather than wrapped.
                let slot = (a ^ adjust) as usize;
                if slot >= table_size || slots[slot].is_some() || candidate_slots.contains(&slot) {
                    adjust += 1;
                    continue 'search;
                }
                candidate_slots.push(slot);
            }

            for (&(_, rank), &slot) in buckets[b].iter().zip(candidate_slots.iter()) {
                slots[slot] = Some(rank);
            }
            hash_adjust[b] = adjust as u16;
            break;
        }
    }

    let hash_values = slots.into_iter().map(|s| s.unwrap_or(0)).collect();
    (hash_adjust, hash_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_7462_ranks() {
        let tables = generate();
        let mut seen = std::collections::HashSet::new();
        for &r in &tables.flushes {
            if r != 0 {
                seen.insert(r);
            }
        }
        for &r in &tables.unique5 {
            if r != 0 {
                seen.insert(r);
            }
        }
        for &r in &tables.hash_values {
            if r != 0 {
                seen.insert(r);
            }
        }
        assert_eq!(seen.len(), 7462);
        assert_eq!(*seen.iter().min().unwrap(), 1);
        assert_eq!(*seen.iter().max().unwrap(), 7462);
    }

    #[test]
    fn category_block_sizes_match_known_counts() {
        let patterns = enumerate_rank_patterns();
        let (mut sf, mut quads, mut fh, mut flush_ct, mut straight_ct) = (0, 0, 0, 0, 0);
        let (mut trips, mut two_pair, mut pair, mut high) = (0, 0, 0, 0);
        for pattern in &patterns {
            if pattern.is_five_distinct() {
                if pattern.straight_top().is_some() {
                    sf += 1;
                    straight_ct += 1;
                } else {
                    flush_ct += 1;
                    high += 1;
                }
                continue;
            }
            let mut counts: Vec<u8> = pattern.counts.iter().copied().filter(|&c| c > 0).collect();
            counts.sort_unstable_by(|a, b| b.cmp(a));
            match counts.as_slice() {
                [4, 1] => quads += 1,
                [3, 2] => fh += 1,
                [3, 1, 1] => trips += 1,
                [2, 2, 1] => two_pair += 1,
                [2, 1, 1, 1] => pair += 1,
                _ => unreachable!(),
            }
        }
        assert_eq!(sf, 10);
        assert_eq!(quads, 156);
        assert_eq!(fh, 156);
        assert_eq!(flush_ct, 1277);
        assert_eq!(straight_ct, 10);
        assert_eq!(trips, 858);
        assert_eq!(two_pair, 858);
        assert_eq!(pair, 2860);
        assert_eq!(high, 1277);
    }
}
