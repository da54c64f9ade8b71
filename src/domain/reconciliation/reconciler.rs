//! Multi-way set reconciliation.
//!
//! Every operation here reduces to one primitive, [`present_in_absent_from`]:
//! intersect the sets an asset must appear in, then subtract the union of
//! the sets it must not appear in. Subtraction is applied once, after the
//! intersection, so `X ∩ Y − Z` never turns into `X ∩ (Y − Z)`.

use super::asset_set::{AssetSet, ResultSet};
use crate::domain::errors::ReconcileError;
use crate::domain::trading::TradingPair;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Assets present in every set of `present` and in none of `absent`.
///
/// An empty `present` list selects nothing.
pub fn present_in_absent_from(
    label: impl Into<String>,
    present: &[&AssetSet],
    absent: &[&AssetSet],
) -> ResultSet {
    let Some((first, rest)) = present.split_first() else {
        return AssetSet::new(label);
    };

    let assets = first
        .iter()
        .filter(|asset| rest.iter().all(|set| set.contains(asset)))
        .filter(|asset| absent.iter().all(|set| !set.contains(asset)))
        .map(str::to_string);

    AssetSet::from_assets(label, assets)
}

/// `x` minus every set in `not_in`.
pub fn symmetric_exclusive(
    label: impl Into<String>,
    x: &AssetSet,
    not_in: &[&AssetSet],
) -> ResultSet {
    present_in_absent_from(label, &[x], not_in)
}

/// The pairs whose base asset belongs to `set`, in their original order.
pub fn select_pairs(pairs: &[TradingPair], set: &AssetSet) -> Vec<TradingPair> {
    pairs
        .iter()
        .filter(|pair| set.contains(&pair.base_asset))
        .cloned()
        .collect()
}

/// One Venn region: the assets found in exactly the `members` sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub members: Vec<String>,
    pub assets: ResultSet,
}

/// Set operations over a fixed group of labelled operands.
#[derive(Debug, Clone)]
pub struct Reconciler<'a> {
    sets: Vec<&'a AssetSet>,
}

impl<'a> Reconciler<'a> {
    pub const MIN_SETS: usize = 2;
    /// Regions are enumerated by bitmask, which bounds the operand count
    /// for [`Reconciler::regions`] only.
    pub const MAX_REGION_SETS: usize = 16;

    pub fn new(sets: &[&'a AssetSet]) -> Result<Self, ReconcileError> {
        if sets.len() < Self::MIN_SETS {
            return Err(ReconcileError::TooFewSets {
                required: Self::MIN_SETS,
                actual: sets.len(),
            });
        }
        let mut labels = HashSet::new();
        for set in sets {
            if !labels.insert(set.label()) {
                return Err(ReconcileError::DuplicateLabel {
                    label: set.label().to_string(),
                });
            }
        }

        Ok(Self {
            sets: sets.to_vec(),
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.label())
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Union of every operand.
    pub fn union(&self) -> ResultSet {
        AssetSet::union_all("Any", self.sets.iter().copied())
    }

    /// Assets listed in every operand.
    pub fn all_common(&self) -> ResultSet {
        present_in_absent_from("All", &self.sets, &[])
    }

    /// Assets listed in `label` and in no other operand.
    pub fn only_in(&self, label: &str) -> Result<ResultSet, ReconcileError> {
        let x = self.find(label)?;
        let others = self.others(&[label]);
        Ok(present_in_absent_from(format!("Only_{}", label), &[x], &others))
    }

    /// Assets listed in both `x` and `y` and in no other operand.
    pub fn exclusive_pair(&self, x: &str, y: &str) -> Result<ResultSet, ReconcileError> {
        if x == y {
            return Err(ReconcileError::SameSet {
                label: x.to_string(),
            });
        }
        let sx = self.find(x)?;
        let sy = self.find(y)?;
        let others = self.others(&[x, y]);
        Ok(present_in_absent_from(
            format!("{}_{}", x, y),
            &[sx, sy],
            &others,
        ))
    }

    /// Every non-empty combination of operands with the assets listed in
    /// exactly that combination.
    ///
    /// Regions are disjoint and together cover [`Reconciler::union`]. They
    /// are returned by ascending combination size, then in operand order;
    /// empty regions are included. Fails with more than
    /// [`Reconciler::MAX_REGION_SETS`] operands.
    pub fn regions(&self) -> Result<Vec<Region>, ReconcileError> {
        let n = self.sets.len();
        if n > Self::MAX_REGION_SETS {
            return Err(ReconcileError::TooManySets {
                max: Self::MAX_REGION_SETS,
                actual: n,
            });
        }

        let mut by_mask: HashMap<u32, BTreeSet<String>> = HashMap::new();
        for asset in self.union().into_sorted_vec() {
            let mask = self
                .sets
                .iter()
                .enumerate()
                .filter(|(_, set)| set.contains(&asset))
                .fold(0u32, |mask, (i, _)| mask | (1 << i));
            by_mask.entry(mask).or_default().insert(asset);
        }

        let mut masks: Vec<u32> = (1..(1u32 << n)).collect();
        masks.sort_by_key(|mask| {
            let indices: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
            (mask.count_ones(), indices)
        });

        Ok(masks
            .into_iter()
            .map(|mask| {
                let members: Vec<String> = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| self.sets[i].label().to_string())
                    .collect();
                let label = Self::region_label(&members, n);
                let assets = by_mask.remove(&mask).unwrap_or_default();
                Region {
                    members,
                    assets: AssetSet::from_assets(label, assets),
                }
            })
            .collect())
    }

    fn region_label(members: &[String], total: usize) -> String {
        match members.len() {
            1 => format!("Only_{}", members[0]),
            len if len == total => "All".to_string(),
            _ => members.join("_"),
        }
    }

    fn find(&self, label: &str) -> Result<&'a AssetSet, ReconcileError> {
        self.sets
            .iter()
            .copied()
            .find(|s| s.label() == label)
            .ok_or_else(|| ReconcileError::UnknownSet {
                label: label.to_string(),
            })
    }

    fn others(&self, excluded: &[&str]) -> Vec<&'a AssetSet> {
        self.sets
            .iter()
            .copied()
            .filter(|s| !excluded.contains(&s.label()))
            .collect()
    }
}
