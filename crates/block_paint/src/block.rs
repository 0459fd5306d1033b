//! Host-supplied block data.
//!
//! A [`Block`] is the sole entropy and cardinality source for a render: its
//! hash seeds the shuffle bag, and its transaction count determines how many
//! shapes are painted. Both are immutable from the core's perspective.

/// An opaque transaction record.
///
/// Only its position in [`Block::transactions`] is consumed by the core; the
/// host may attach whatever payload it likes out-of-band.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {}

impl Transaction {
    pub fn new() -> Self {
        Self {}
    }
}

/// An immutable block record: identifying hash plus ordered transactions.
///
/// Transaction order is significant and must be preserved — it drives shape
/// count and visual layering (later transactions paint over earlier ones).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Hexadecimal block hash, optionally `0x`-prefixed.
    pub hash: String,
    /// Ordered transaction list.
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(hash: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        Self {
            hash: hash.into(),
            transactions,
        }
    }

    /// Builds a block with `count` empty transactions. Convenient for tests
    /// and demos where only cardinality matters.
    pub fn with_transaction_count(hash: impl Into<String>, count: usize) -> Self {
        Self::new(hash, vec![Transaction::new(); count])
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_transaction_count_sets_cardinality() {
        let block = Block::with_transaction_count("ff", 7);
        assert_eq!(block.transaction_count(), 7);
        assert_eq!(block.hash, "ff");
    }

    #[test]
    fn empty_transaction_list_is_valid() {
        let block = Block::new("00", Vec::new());
        assert_eq!(block.transaction_count(), 0);
    }
}
