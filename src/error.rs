//! Error types shared by the form, the store and the CLI.

/// A rule the entry form rejected. Only the first failing rule is reported.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("Description is required")]
    MissingDescription,

    /// The amount was empty, not a decimal number, or not greater than zero.
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// The amount is above the largest single entry the ledger accepts.
    #[error("Amount must be at most $1,000,000,000.00")]
    AmountTooLarge,

    #[error("Category is required")]
    MissingCategory,

    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,
}

/// Errors raised by a [crate::db::TransactionStore].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// A stored value could not be read back into a transaction.
    #[error("invalid stored transaction {id}: {reason}")]
    InvalidRow { id: String, reason: String },
}

/// The amounts add up to more than a `Decimal` can hold.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[error("balance is too large to compute")]
pub struct BalanceOverflow;

/// Errors raised while building the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Balance(#[from] BalanceOverflow),
}

/// The outcome of a failed form submission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The store did not confirm the write. The cause is logged, not shown.
    #[error("Failed to save transaction. Please try again.")]
    SaveFailed,
}
