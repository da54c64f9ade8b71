use crate::domain::errors::ReconcileError;
use crate::domain::reconciliation::{AssetSet, Reconciler, ResultSet};
use crate::domain::report::{ASSET_COLUMN, Table};

pub const BINANCE: &str = "Binance";
pub const UPBIT: &str = "Upbit";
pub const BITHUMB: &str = "Bithumb";

/// The seven Venn regions of the Binance / Upbit / Bithumb asset sets.
#[derive(Debug, Clone)]
pub struct ExchangeOverlap {
    pub all: ResultSet,
    pub only_binance: ResultSet,
    pub only_upbit: ResultSet,
    pub only_bithumb: ResultSet,
    pub binance_upbit: ResultSet,
    pub binance_bithumb: ResultSet,
    pub bithumb_upbit: ResultSet,
}

impl ExchangeOverlap {
    /// Operands are relabelled, so callers may pass sets under any name.
    pub fn compute(
        binance: &AssetSet,
        upbit: &AssetSet,
        bithumb: &AssetSet,
    ) -> Result<Self, ReconcileError> {
        let binance = binance.clone().renamed(BINANCE);
        let upbit = upbit.clone().renamed(UPBIT);
        let bithumb = bithumb.clone().renamed(BITHUMB);
        let exchanges = Reconciler::new(&[&binance, &upbit, &bithumb])?;

        Ok(Self {
            all: exchanges.all_common(),
            only_binance: exchanges.only_in(BINANCE)?,
            only_upbit: exchanges.only_in(UPBIT)?,
            only_bithumb: exchanges.only_in(BITHUMB)?,
            binance_upbit: exchanges.exclusive_pair(BINANCE, UPBIT)?,
            binance_bithumb: exchanges.exclusive_pair(BINANCE, BITHUMB)?,
            bithumb_upbit: exchanges.exclusive_pair(BITHUMB, UPBIT)?,
        })
    }

    /// Single-column asset tables in region order: all, the three only-in
    /// regions, then Binance/Upbit, Binance/Bithumb, Bithumb/Upbit.
    pub fn tables(&self, names: [&str; 7]) -> Vec<Table> {
        let regions = [
            &self.all,
            &self.only_binance,
            &self.only_upbit,
            &self.only_bithumb,
            &self.binance_upbit,
            &self.binance_bithumb,
            &self.bithumb_upbit,
        ];
        names
            .iter()
            .zip(regions)
            .map(|(name, set)| Table::from_asset_set(*name, ASSET_COLUMN, set))
            .collect()
    }

    pub fn union_len(&self) -> usize {
        [
            &self.all,
            &self.only_binance,
            &self.only_upbit,
            &self.only_bithumb,
            &self.binance_upbit,
            &self.binance_bithumb,
            &self.bithumb_upbit,
        ]
        .iter()
        .map(|s| s.len())
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_partition_the_union() {
        let binance = AssetSet::from_assets("b", ["BTC", "ETH", "SOL", "PEPE"]);
        let upbit = AssetSet::from_assets("u", ["BTC", "ETH", "XRP", "SAND"]);
        let bithumb = AssetSet::from_assets("h", ["BTC", "SOL", "XRP", "KLAY"]);

        let overlap = ExchangeOverlap::compute(&binance, &upbit, &bithumb).unwrap();

        assert_eq!(overlap.all.into_sorted_vec(), vec!["BTC"]);
        assert_eq!(overlap.only_binance.clone().into_sorted_vec(), vec!["PEPE"]);
        assert_eq!(overlap.only_upbit.clone().into_sorted_vec(), vec!["SAND"]);
        assert_eq!(overlap.only_bithumb.clone().into_sorted_vec(), vec!["KLAY"]);
        assert_eq!(overlap.binance_upbit.clone().into_sorted_vec(), vec!["ETH"]);
        assert_eq!(overlap.binance_bithumb.clone().into_sorted_vec(), vec!["SOL"]);
        assert_eq!(overlap.bithumb_upbit.clone().into_sorted_vec(), vec!["XRP"]);
    }

    #[test]
    fn test_union_len_counts_each_asset_once() {
        let binance = AssetSet::from_assets("b", ["BTC", "ETH"]);
        let upbit = AssetSet::from_assets("u", ["BTC", "XRP"]);
        let bithumb = AssetSet::new("h");

        let overlap = ExchangeOverlap::compute(&binance, &upbit, &bithumb).unwrap();
        assert_eq!(overlap.union_len(), 3);

        let tables = overlap.tables(["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(tables.len(), 7);
        assert_eq!(tables[4].rows, vec![vec!["BTC".to_string()]]);
    }
}
