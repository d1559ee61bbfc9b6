//! Greedy longest-matching-blocks search over two sequences, the
//! `difflib.SequenceMatcher` class of algorithm without the junk or
//! popularity heuristics. Shared by the character-level scorer and the
//! word-level diff.

use std::collections::HashMap;
use std::hash::Hash;

/// A maximal run of equal elements: `a[a_start..a_start + len] ==
/// b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Returns all matching blocks between `a` and `b`, ordered by position
/// in both sequences.
///
/// The longest common contiguous run over the whole range is located
/// first (ties broken by lowest `a` index, then lowest `b` index), then
/// the regions before and after it are searched recursively.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchBlock> {
    let mut b_positions: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, element) in b.iter().enumerate() {
        b_positions.entry(element).or_default().push(j);
    }

    let mut blocks = Vec::new();
    collect_blocks(a, 0, a.len(), 0, b.len(), &b_positions, &mut blocks);
    blocks
}

fn collect_blocks<T: Eq + Hash>(
    a: &[T],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
    b_positions: &HashMap<&T, Vec<usize>>,
    blocks: &mut Vec<MatchBlock>,
) {
    let Some(block) = longest_match(a, a_lo, a_hi, b_lo, b_hi, b_positions) else {
        return;
    };

    if a_lo < block.a_start && b_lo < block.b_start {
        collect_blocks(a, a_lo, block.a_start, b_lo, block.b_start, b_positions, blocks);
    }
    blocks.push(block);
    let a_next = block.a_start + block.len;
    let b_next = block.b_start + block.len;
    if a_next < a_hi && b_next < b_hi {
        collect_blocks(a, a_next, a_hi, b_next, b_hi, b_positions, blocks);
    }
}

fn longest_match<T: Eq + Hash>(
    a: &[T],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
    b_positions: &HashMap<&T, Vec<usize>>,
) -> Option<MatchBlock> {
    let mut best = MatchBlock {
        a_start: a_lo,
        b_start: b_lo,
        len: 0,
    };

    // j2len[j] = length of the longest run ending at a[i] and b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in a_lo..a_hi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let run = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev).copied())
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, run);
                if run > best.len {
                    best = MatchBlock {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        len: run,
                    };
                }
            }
        }
        j2len = next_j2len;
    }

    (best.len > 0).then_some(best)
}
