use crate::db::TransactionStore;
use crate::error::{SubmitError, ValidationError};
use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionType};
use crate::navigation::{Navigator, Route};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

/// Raw field values of the add-transaction form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub transaction_type: TransactionType,
    pub date: String,
}

/// A change to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Description(String),
    Amount(String),
    Category(String),
    Type(TransactionType),
    Date(String),
}

impl FormState {
    /// An empty expense form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            transaction_type: TransactionType::Expense,
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Returns a new state with one field replaced.
    pub fn apply(self, update: FormUpdate) -> Self {
        match update {
            FormUpdate::Description(description) => Self { description, ..self },
            FormUpdate::Amount(amount) => Self { amount, ..self },
            FormUpdate::Category(category) => Self { category, ..self },
            FormUpdate::Type(transaction_type) => Self {
                transaction_type,
                ..self
            },
            FormUpdate::Date(date) => Self { date, ..self },
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// The largest amount a single entry may carry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Checks the form and builds the transaction it describes.
///
/// Rules run in a fixed order and the first failure is returned. The amount
/// is entered as a positive magnitude; expenses are stored negated.
pub fn validate(form: &FormState) -> Result<Transaction, ValidationError> {
    if form.description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    let magnitude = parse_amount(&form.amount)?;

    if form.category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }

    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)?;

    Ok(Transaction::new(
        Uuid::new_v4().to_string(),
        date,
        form.description.clone(),
        form.transaction_type.sign(magnitude),
        form.category.clone(),
    ))
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount > MAX_AMOUNT => Err(ValidationError::AmountTooLarge),
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// The add-transaction form: its field values plus the message from the last
/// failed submission.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    state: FormState,
    error: Option<String>,
    save_attempts: u32,
}

impl TransactionForm {
    pub fn new(state: FormState) -> Self {
        Self {
            state,
            error: None,
            save_attempts: 1,
        }
    }

    /// How many times a store write is tried before reporting a failure.
    /// Values below one are treated as one.
    pub fn with_save_attempts(mut self, attempts: u32) -> Self {
        self.save_attempts = attempts.max(1);
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn update(&mut self, update: FormUpdate) {
        self.state = std::mem::take(&mut self.state).apply(update);
    }

    /// Validates the form, saves the transaction and moves to the dashboard.
    ///
    /// Navigation only happens after the store confirms the write. On any
    /// failure the form keeps a single message describing it and nothing is
    /// navigated. The `&mut self` receiver means a form cannot be submitted
    /// again while an attempt is still running.
    pub fn submit<S, N>(
        &mut self,
        store: &S,
        navigator: &mut N,
    ) -> Result<Transaction, SubmitError>
    where
        S: TransactionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        self.error = None;

        let result = self.try_submit(store, navigator);
        if let Err(ref e) = result {
            self.error = Some(e.to_string());
        }
        result
    }

    fn try_submit<S, N>(&self, store: &S, navigator: &mut N) -> Result<Transaction, SubmitError>
    where
        S: TransactionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        let transaction = validate(&self.state).inspect_err(|e| {
            tracing::debug!("rejected transaction form: {}", e);
        })?;
        if Category::from_label(&transaction.category).is_none() {
            tracing::debug!(
                "category '{}' is not one of the standard categories",
                transaction.category
            );
        }

        let mut attempt = 1;
        loop {
            match store.create(&transaction) {
                Ok(()) => break,
                Err(e) if attempt < self.save_attempts => {
                    tracing::warn!(
                        "attempt {}/{} to save transaction {} failed: {}",
                        attempt,
                        self.save_attempts,
                        transaction.id,
                        e
                    );
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("failed to save transaction {}: {}", transaction.id, e);
                    return Err(SubmitError::SaveFailed);
                }
            }
        }

        tracing::info!(
            "saved {} of {} ({})",
            transaction.transaction_type(),
            transaction.amount,
            transaction.description
        );
        navigator.go_to(Route::Dashboard);
        Ok(transaction)
    }
}
