use super::asset_set::{AssetSet, ResultSet};

/// Second-order comparison of two derived result sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossComparison {
    pub common_to_both: ResultSet,
    pub only_in_a: ResultSet,
    pub only_in_b: ResultSet,
}

impl CrossComparison {
    /// Compares `a` and `b`, naming the outputs after the operand labels.
    pub fn compare(a: &AssetSet, b: &AssetSet) -> Self {
        Self {
            common_to_both: a.intersection(b, format!("{}_and_{}", a.label(), b.label())),
            only_in_a: a.difference(b, format!("Only_{}", a.label())),
            only_in_b: b.difference(a, format!("Only_{}", b.label())),
        }
    }

    /// Every asset of either operand, each in exactly one of the three parts.
    pub fn total(&self) -> usize {
        self.common_to_both.len() + self.only_in_a.len() + self.only_in_b.len()
    }
}
