use super::TransactionStore;
use crate::error::StoreError;
use crate::models::transaction::Transaction;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A [TransactionStore] backed by a SQLite connection.
///
/// Amounts are stored as decimal text so no precision is lost on the way
/// through the database.
pub struct SqliteTransactionStore {
    conn: Connection,
}

impl SqliteTransactionStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl TransactionStore for SqliteTransactionStore {
    fn create(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO transactions (id, date, description, amount, category)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                &transaction.id,
                transaction.date.format("%Y-%m-%d").to_string(),
                &transaction.description,
                transaction.amount.to_string(),
                &transaction.category,
            ],
        )?;

        tracing::debug!("stored transaction {}", transaction.id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, description, amount, category FROM transactions ORDER BY seq ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                amount: row.get(3)?,
                category: row.get(4)?,
            })
        })?;

        let mut transactions = Vec::new();
        for row in rows {
            transactions.push(row?.into_transaction()?);
        }

        Ok(transactions)
    }
}

struct StoredRow {
    id: String,
    date: String,
    description: String,
    amount: String,
    category: String,
}

impl StoredRow {
    fn into_transaction(self) -> Result<Transaction, StoreError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| {
            StoreError::InvalidRow {
                id: self.id.clone(),
                reason: format!("bad date '{}': {}", self.date, e),
            }
        })?;
        let amount = Decimal::from_str(&self.amount).map_err(|e| StoreError::InvalidRow {
            id: self.id.clone(),
            reason: format!("bad amount '{}': {}", self.amount, e),
        })?;

        Ok(Transaction::new(
            self.id,
            date,
            self.description,
            amount,
            self.category,
        ))
    }
}
