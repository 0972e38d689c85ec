// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Top-N language distribution with integer percentages.
//!
//! Languages are ranked by raw weight, truncated to [`MAX_LANGUAGES`] and
//! apportioned with the largest-remainder method against the weight of the
//! retained subset, so the displayed percentages always sum to exactly 100.
//! Languages cut by the truncation do not count towards the denominator.
//!
//! All arithmetic is done on integers: the share of an entry is
//! `weight * 100 / subset_total`, its floor is the integer quotient and its
//! fractional part is ranked through the division remainder, which shares
//! the same denominator for every entry.

use tracing::trace;

use crate::model::{LanguageShare, WeightedLanguage};

/// Maximum number of languages shown on a card.
pub const MAX_LANGUAGES: usize = 5;

const PERCENT: u128 = 100;

/// Ranks weighted languages and returns at most [`MAX_LANGUAGES`] shares.
///
/// Ties in weight keep the input order. Returns an empty vector when the
/// weights sum to zero.
///
/// # Example
///
/// ```
/// use ghcard::{WeightedLanguage, distribute};
///
/// let weighted = vec![
///     WeightedLanguage { name: "C".into(), color: "#555555".into(), weight: 20 },
///     WeightedLanguage { name: "Rust".into(), color: "#dea584".into(), weight: 50 },
///     WeightedLanguage { name: "Go".into(), color: "#00ADD8".into(), weight: 30 },
/// ];
///
/// let shares = distribute(weighted,);
/// let percentages: Vec<u8,> = shares.iter().map(|share| share.percentage,).collect();
/// assert_eq!(shares[0].name, "Rust");
/// assert_eq!(percentages, [50, 30, 20]);
/// ```
pub fn distribute(mut weighted: Vec<WeightedLanguage,>,) -> Vec<LanguageShare,>
{
    let total: u128 = weighted.iter().map(|language| u128::from(language.weight,),).sum();
    if total == 0 {
        return Vec::new();
    }

    for language in &weighted {
        trace!(
            language = %language.name,
            weight = language.weight,
            rounded_up = rounded_up_percentage(language.weight, total,),
            "ranking language candidate"
        );
    }

    weighted.sort_by(|left, right| right.weight.cmp(&left.weight,),);
    weighted.truncate(MAX_LANGUAGES,);

    let weights: Vec<u64,> = weighted.iter().map(|language| language.weight,).collect();
    let percentages = largest_remainder(&weights,);

    weighted
        .into_iter()
        .zip(percentages,)
        .map(|(language, percentage,)| LanguageShare {
            name: language.name,
            color: language.color,
            percentage,
        },)
        .collect()
}

/// Apportions 100 percentage points among `weights`.
///
/// Every entry receives the floor of its proportional share; the points left
/// over go one each to the entries with the largest fractional parts, ties
/// resolved by position. The result sums to exactly 100 unless `weights` is
/// empty or sums to zero, in which case every entry is zero.
///
/// ```
/// use ghcard::largest_remainder;
///
/// assert_eq!(largest_remainder(&[1, 1, 1],), [34, 33, 33]);
/// assert_eq!(largest_remainder(&[7],), [100]);
/// ```
pub fn largest_remainder(weights: &[u64],) -> Vec<u8,>
{
    let total: u128 = weights.iter().copied().map(u128::from,).sum();
    if total == 0 {
        return vec![0; weights.len()];
    }

    let mut floors = Vec::with_capacity(weights.len(),);
    let mut fractions = Vec::with_capacity(weights.len(),);
    for &weight in weights {
        let scaled = u128::from(weight,) * PERCENT;
        floors.push(scaled / total,);
        fractions.push(scaled % total,);
    }

    // floors sum to at least 100 - (len - 1), so the gap is below len
    let assigned: u128 = floors.iter().sum();
    let gap = usize::try_from(PERCENT - assigned,).unwrap_or(usize::MAX,);

    let mut order: Vec<usize,> = (0..weights.len()).collect();
    order.sort_by(|&left, &right| fractions[right].cmp(&fractions[left],),);

    for &position in order.iter().take(gap,) {
        floors[position] += 1;
    }

    floors.into_iter().map(|value| u8::try_from(value,).unwrap_or(u8::MAX,),).collect()
}

/// Share of `weight` in `total` rounded up, as shown before normalization.
fn rounded_up_percentage(weight: u64, total: u128,) -> u128
{
    (u128::from(weight,) * PERCENT).div_ceil(total,)
}
