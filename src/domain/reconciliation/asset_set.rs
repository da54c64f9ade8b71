use crate::domain::trading::TradingPair;
use std::collections::BTreeSet;

/// A labelled set of base-asset identifiers, e.g. every asset with a KRW
/// market on Upbit.
///
/// Iteration is always in ascending lexicographic order, which is also the
/// order set tables are written in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetSet {
    label: String,
    assets: BTreeSet<String>,
}

/// A set derived from other sets. It is an [`AssetSet`] in its own right and
/// can be fed into further operations.
pub type ResultSet = AssetSet;

impl AssetSet {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            assets: BTreeSet::new(),
        }
    }

    pub fn from_assets<I, S>(label: impl Into<String>, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }

    /// Collects the base assets of `pairs`. Pairs whose code yielded no base
    /// are left out.
    pub fn from_pairs(label: impl Into<String>, pairs: &[TradingPair]) -> Self {
        Self::from_assets(
            label,
            pairs
                .iter()
                .filter(|p| !p.base_asset.is_empty())
                .map(|p| p.base_asset.clone()),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn assets(&self) -> &BTreeSet<String> {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.assets.contains(asset)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(String::as_str)
    }

    pub fn renamed(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn insert(&mut self, asset: impl Into<String>) -> bool {
        self.assets.insert(asset.into())
    }

    pub fn union(&self, other: &AssetSet, label: impl Into<String>) -> ResultSet {
        Self::from_assets(label, self.assets.union(&other.assets).cloned())
    }

    pub fn intersection(&self, other: &AssetSet, label: impl Into<String>) -> ResultSet {
        Self::from_assets(label, self.assets.intersection(&other.assets).cloned())
    }

    pub fn difference(&self, other: &AssetSet, label: impl Into<String>) -> ResultSet {
        Self::from_assets(label, self.assets.difference(&other.assets).cloned())
    }

    /// Union of any number of sets.
    pub fn union_all<'a, I>(label: impl Into<String>, sets: I) -> ResultSet
    where
        I: IntoIterator<Item = &'a AssetSet>,
    {
        Self::from_assets(
            label,
            sets.into_iter().flat_map(|s| s.assets.iter().cloned()),
        )
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.assets.into_iter().collect()
    }
}
