//! Weighted draws without replacement, bracket by bracket.

use num_bigint::BigUint;
use num_traits::Zero;
use tide_random::{sample_below, RandomError, RandomSource};
use tide_types::{Bracket, Entry, Weight, Winner};

use crate::probability_percent;

/// Draw up to `bracket.winner_count` winners from the entries ranked inside
/// `bracket`, weighted by stake.
///
/// Algorithm: keep the eligible entries in their original order as the
/// remaining pool. For each draw, sample `r` uniformly below the pool's total
/// weight and pick the first entry whose running cumulative weight exceeds
/// `r`, then remove it from the pool.
///
/// An empty bracket yields no winners. Drawing stops early once the remaining
/// pool carries zero weight, even if the quota is unmet.
pub fn select_from_bracket(
    entries: &[Entry],
    bracket: &Bracket,
    source: &mut dyn RandomSource,
) -> Result<Vec<Winner>, RandomError> {
    let mut remaining: Vec<&Entry> = entries
        .iter()
        .filter(|entry| bracket.contains(entry.rank))
        .collect();

    if remaining.is_empty() {
        tracing::warn!(bracket = %bracket.name, "no participants in bracket");
        return Ok(Vec::new());
    }

    let to_select = (bracket.winner_count as usize).min(remaining.len());
    tracing::info!(
        bracket = %bracket.name,
        participants = remaining.len(),
        to_select,
        "drawing bracket"
    );

    let mut winners = Vec::with_capacity(to_select);
    while winners.len() < to_select {
        let total: Weight = remaining.iter().map(|entry| &entry.weight).sum();
        if total.is_zero() {
            tracing::warn!(
                bracket = %bracket.name,
                drawn = winners.len(),
                to_select,
                "no remaining weight in bracket, stopping selection"
            );
            break;
        }

        let target = sample_below(total.raw(), source)?;
        let selected = remaining.remove(cumulative_index(&remaining, &target));
        let probability = probability_percent(&selected.weight, &total);

        tracing::debug!(
            bracket = %bracket.name,
            draw = winners.len() + 1,
            rank = selected.rank,
            probability = format_args!("{probability:.4}%"),
            "winner drawn"
        );

        winners.push(Winner {
            address: selected.address.clone(),
            rank: selected.rank,
            weight: selected.weight.clone(),
            bracket: bracket.name.clone(),
            probability_percent: probability,
        });
    }

    Ok(winners)
}

/// Run [`select_from_bracket`] over `brackets` in order, sharing `source`.
///
/// Winners are returned grouped by bracket, in bracket order, each group in
/// draw order. Brackets must be drawn sequentially: every bracket starts
/// where the previous one left the source.
pub fn select_all(
    entries: &[Entry],
    brackets: &[Bracket],
    source: &mut dyn RandomSource,
) -> Result<Vec<Winner>, RandomError> {
    tracing::info!(
        participants = entries.len(),
        brackets = brackets.len(),
        source = source.name(),
        "starting winner selection"
    );

    let mut winners = Vec::new();
    for bracket in brackets {
        winners.extend(select_from_bracket(entries, bracket, source)?);
    }

    tracing::info!(total_winners = winners.len(), "winner selection complete");
    Ok(winners)
}

/// Index of the first entry whose cumulative weight exceeds `target`.
///
/// Zero-weight entries never raise the running sum past `target`, so they are
/// never picked. `target` is below the pool total, so the walk always stops
/// inside the pool; the last index is only a fallback.
fn cumulative_index(pool: &[&Entry], target: &BigUint) -> usize {
    let mut cumulative = BigUint::zero();
    for (index, entry) in pool.iter().enumerate() {
        cumulative += entry.weight.raw();
        if &cumulative > target {
            return index;
        }
    }
    pool.len() - 1
}
