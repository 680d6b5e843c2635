//! Persistence for transactions.

pub mod connection;
pub mod repository;

use crate::error::StoreError;
use crate::models::transaction::Transaction;

/// Handles the creation and retrieval of transactions.
///
/// Both the entry form and the dashboard go through the same store, so a
/// transaction created by one is listed by the other.
pub trait TransactionStore {
    /// Persist a new transaction. Returns once the write is confirmed.
    fn create(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Every stored transaction, in the order they were created.
    fn list(&self) -> Result<Vec<Transaction>, StoreError>;
}
