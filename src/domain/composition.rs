//! Recursive blend composition: spice closure and gradient color derivation.
//!
//! Both functions are pure and total over arbitrary blend graphs. Child blend
//! lists may contain duplicates, dangling ids, or cycles; traversals carry a
//! visited set so every call terminates, and dangling references simply
//! contribute nothing.

use crate::domain::model::{Blend, BlendId, Spice, SpiceId};
use std::collections::HashSet;

/// Fallback swatch color (indigo) for blends whose composition resolves to
/// no colors at all.
pub const DEFAULT_BLEND_COLOR: &str = "7e7ac0";

/// Resolves the full set of spice ids reachable from `blend`: its own
/// `spices` list first, then each child blend's contribution depth-first in
/// listed order. Deduplicated, first occurrence wins.
pub fn resolve_spice_ids(blend: &Blend, blends: &[Blend]) -> Vec<SpiceId> {
    let mut visited: HashSet<BlendId> = HashSet::new();
    visited.insert(blend.id);

    let mut seen: HashSet<SpiceId> = HashSet::new();
    let mut ordered = Vec::new();
    collect_spice_ids(blend, blends, &mut visited, &mut seen, &mut ordered);
    ordered
}

fn collect_spice_ids(
    blend: &Blend,
    blends: &[Blend],
    visited: &mut HashSet<BlendId>,
    seen: &mut HashSet<SpiceId>,
    ordered: &mut Vec<SpiceId>,
) {
    for &spice_id in &blend.spices {
        if seen.insert(spice_id) {
            ordered.push(spice_id);
        }
    }

    for &child_id in &blend.blends {
        // Cycle guard: a blend already on or below this path is skipped.
        if !visited.insert(child_id) {
            continue;
        }
        if let Some(child) = blends.iter().find(|b| b.id == child_id) {
            collect_spice_ids(child, blends, visited, seen, ordered);
        }
    }
}

/// Resolves `blend`'s composition closure to full spice records.
///
/// Ids with no matching entry in `spices` are dropped silently; order
/// follows [`resolve_spice_ids`].
pub fn resolve_all_spices(blend: &Blend, blends: &[Blend], spices: &[Spice]) -> Vec<Spice> {
    resolve_spice_ids(blend, blends)
        .iter()
        .filter_map(|id| spices.iter().find(|s| s.id == *id).cloned())
        .collect()
}

/// Derives the ordered gradient colors for a blend.
///
/// Three-tier fallback: colors of direct spices (in listed order); if none,
/// the concatenated colors of each child blend in listed order, each child
/// resolved with the same fallback; if still none, [`DEFAULT_BLEND_COLOR`].
/// The result is never empty.
pub fn derive_blend_colors(blend: &Blend, spices: &[Spice], blends: &[Blend]) -> Vec<String> {
    let mut visited: HashSet<BlendId> = HashSet::new();
    visited.insert(blend.id);
    tiered_colors(blend, spices, blends, &mut visited)
}

fn tiered_colors(
    blend: &Blend,
    spices: &[Spice],
    blends: &[Blend],
    visited: &mut HashSet<BlendId>,
) -> Vec<String> {
    // Tier 1: direct spice colors. Non-empty means we never descend.
    let direct: Vec<String> = blend
        .spices
        .iter()
        .filter_map(|id| spices.iter().find(|s| s.id == *id).map(|s| s.color.clone()))
        .collect();
    if !direct.is_empty() {
        return direct;
    }

    // Tier 2: child blends, each with the full fallback chain. The visited
    // set keeps a spice-less cycle from recursing forever.
    let mut from_children = Vec::new();
    for &child_id in &blend.blends {
        if !visited.insert(child_id) {
            continue;
        }
        if let Some(child) = blends.iter().find(|b| b.id == child_id) {
            from_children.extend(tiered_colors(child, spices, blends, visited));
        }
    }
    if !from_children.is_empty() {
        return from_children;
    }

    // Tier 3: nothing resolved anywhere below this blend.
    vec![DEFAULT_BLEND_COLOR.to_string()]
}

/// Joins swatch colors into a `#`-prefixed, comma-separated gradient stop
/// list, e.g. `"#ffa500, #ff0000"`.
pub fn format_colors_for_gradient(colors: &[String]) -> String {
    colors
        .iter()
        .map(|c| format!("#{}", c))
        .collect::<Vec<_>>()
        .join(", ")
}
