use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Whether money came in or went out.
///
/// Only the entry form asks for a type. Stored transactions carry a signed
/// amount and the type is derived from that sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Applies this type's sign to a positive magnitude.
    pub fn sign(self, magnitude: Decimal) -> Decimal {
        match self {
            TransactionType::Income => magnitude,
            TransactionType::Expense => -magnitude,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!(
                "Invalid transaction type '{}'. Use 'income' or 'expense'.",
                other
            )),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single financial event. `amount` is signed: positive for income,
/// negative for expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(
        id: String,
        date: NaiveDate,
        description: String,
        amount: Decimal,
        category: String,
    ) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            category,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        if self.amount < Decimal::ZERO {
            TransactionType::Expense
        } else {
            TransactionType::Income
        }
    }
}
