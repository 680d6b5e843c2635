use super::balance::{BalanceSummary, format_currency};
use crate::auth::AuthContext;
use crate::db::TransactionStore;
use crate::error::{BalanceOverflow, DashboardError};
use crate::models::transaction::Transaction;
use crate::navigation::{Navigator, Route};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

pub const EMPTY_MESSAGE: &str = "No transactions yet. Add your first transaction";

/// One line of the recent transactions list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount: String,
    /// `+` for money in, empty for money out.
    pub sign_cue: &'static str,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            category: transaction.category.clone(),
            date: format_date(transaction.date),
            amount: format_currency(transaction.amount),
            sign_cue: if transaction.amount >= Decimal::ZERO { "+" } else { "" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub greeting: String,
    pub balance: BalanceSummary,
    pub rows: Vec<TransactionRow>,
}

impl Dashboard {
    /// Builds the dashboard from everything currently in `store`.
    pub fn load<S, A>(store: &S, auth: &A) -> Result<Self, DashboardError>
    where
        S: TransactionStore + ?Sized,
        A: AuthContext + ?Sized,
    {
        let transactions = store.list()?;
        tracing::debug!("loaded {} transactions for the dashboard", transactions.len());
        Ok(Self::from_transactions(&transactions, auth)?)
    }

    pub fn from_transactions<A>(
        transactions: &[Transaction],
        auth: &A,
    ) -> Result<Self, BalanceOverflow>
    where
        A: AuthContext + ?Sized,
    {
        let greeting = match auth.current_user() {
            Some(user) => format!("Welcome back, {}", user.display_name()),
            None => "Welcome back".to_string(),
        };

        Ok(Self {
            greeting,
            balance: BalanceSummary::from_transactions(transactions)?,
            rows: transactions.iter().map(TransactionRow::from).collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quick Pay")?;
        writeln!(f, "{}", self.greeting)?;
        writeln!(f)?;
        writeln!(f, "Current Balance: {}", self.balance.formatted)?;
        writeln!(f)?;
        writeln!(f, "Recent Transactions")?;
        writeln!(f, "Your latest financial activity")?;

        if self.is_empty() {
            return writeln!(f, "  {} ({})", EMPTY_MESSAGE, Route::AddTransaction);
        }

        for row in &self.rows {
            writeln!(
                f,
                "  {:1} {:<30} {:<20} {:>10} {:>14}",
                row.sign_cue, row.description, row.category, row.date, row.amount
            )?;
        }
        Ok(())
    }
}

/// Signs the user out and sends them to the login view.
pub fn logout<A, N>(auth: &mut A, navigator: &mut N)
where
    A: AuthContext + ?Sized,
    N: Navigator + ?Sized,
{
    auth.logout();
    navigator.go_to(Route::Login);
}

/// US-style short date without padding, e.g. `1/15/2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::db::connection::establish_test_connection;
    use crate::db::repository::SqliteTransactionStore;
    use crate::models::transaction::TransactionType;
    use crate::models::user::User;
    use crate::navigation::ConsoleNavigator;
    use crate::operations::add::{FormState, TransactionForm};
    use crate::operations::balance::BalanceSign;

    fn create_test_transaction(
        id: &str,
        description: &str,
        amount: Decimal,
        day: u32,
    ) -> Transaction {
        Transaction::new(
            id.to_string(),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description.to_string(),
            amount,
            "Food".to_string(),
        )
    }

    fn ada() -> Session {
        Session::signed_in(User::new(Some("Ada".to_string()), "ada@example.com".to_string()))
    }

    #[test]
    fn test_dashboard_rows_and_balance() {
        let transactions = vec![
            create_test_transaction("1", "Coffee", Decimal::new(-550, 2), 15),
            create_test_transaction("2", "Salary", Decimal::new(300000, 2), 14),
            create_test_transaction("3", "Gas", Decimal::new(-4520, 2), 13),
            create_test_transaction("4", "Groceries", Decimal::new(-12075, 2), 12),
        ];

        let dashboard = Dashboard::from_transactions(&transactions, &ada()).unwrap();

        assert_eq!(dashboard.greeting, "Welcome back, Ada");
        assert_eq!(dashboard.balance.formatted, "$2,828.55");
        assert_eq!(dashboard.balance.sign, BalanceSign::NonNegative);
        assert_eq!(dashboard.rows.len(), 4);
        assert_eq!(
            dashboard.rows[0],
            TransactionRow {
                description: "Coffee".to_string(),
                category: "Food".to_string(),
                date: "1/15/2024".to_string(),
                amount: "-$5.50".to_string(),
                sign_cue: "",
            }
        );
        assert_eq!(dashboard.rows[1].sign_cue, "+");
        assert_eq!(dashboard.rows[1].amount, "$3,000.00");
    }

    #[test]
    fn test_dashboard_greeting_falls_back_to_email() {
        let session = Session::signed_in(User::new(None, "ada@example.com".to_string()));
        let dashboard = Dashboard::from_transactions(&[], &session).unwrap();
        assert_eq!(dashboard.greeting, "Welcome back, ada@example.com");

        let dashboard = Dashboard::from_transactions(&[], &Session::signed_out()).unwrap();
        assert_eq!(dashboard.greeting, "Welcome back");
    }

    #[test]
    fn test_dashboard_empty_state() {
        let store = SqliteTransactionStore::new(establish_test_connection().unwrap());

        let dashboard = Dashboard::load(&store, &ada()).unwrap();

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.balance.balance, Decimal::ZERO);
        let rendered = dashboard.to_string();
        assert!(rendered.contains("Current Balance: $0.00"));
        assert!(rendered.contains("Your latest financial activity"));
        assert!(rendered.contains(EMPTY_MESSAGE));
        assert!(rendered.contains("/add-transaction"));
    }

    #[test]
    fn test_dashboard_sees_transactions_created_by_form() {
        let store = SqliteTransactionStore::new(establish_test_connection().unwrap());
        let mut navigator = ConsoleNavigator::new();

        let mut form = TransactionForm::new(FormState {
            description: "Salary".to_string(),
            amount: "3000".to_string(),
            category: "Income".to_string(),
            transaction_type: TransactionType::Income,
            date: "2024-01-14".to_string(),
        });
        form.submit(&store, &mut navigator).unwrap();

        let mut form = TransactionForm::new(FormState {
            description: "Coffee".to_string(),
            amount: "5.50".to_string(),
            category: "Food & Dining".to_string(),
            transaction_type: TransactionType::Expense,
            date: "2024-01-15".to_string(),
        });
        form.submit(&store, &mut navigator).unwrap();

        let dashboard = Dashboard::load(&store, &ada()).unwrap();

        assert_eq!(navigator.current(), Some(Route::Dashboard));
        assert_eq!(dashboard.balance.balance, Decimal::new(299450, 2));
        assert_eq!(dashboard.rows[0].description, "Salary");
        assert_eq!(dashboard.rows[1].description, "Coffee");
        assert!(dashboard.to_string().contains("$2,994.50"));
    }

    #[test]
    fn test_dashboard_overflowing_balance_is_an_error() {
        let store = SqliteTransactionStore::new(establish_test_connection().unwrap());
        store
            .create(&create_test_transaction("1", "Windfall", Decimal::MAX, 14))
            .unwrap();
        store
            .create(&create_test_transaction("2", "Windfall", Decimal::MAX, 15))
            .unwrap();

        let result = Dashboard::load(&store, &ada());

        assert!(matches!(result, Err(DashboardError::Balance(BalanceOverflow))));
    }

    #[test]
    fn test_logout_signs_out_and_goes_to_login() {
        let mut session = ada();
        let mut navigator = ConsoleNavigator::new();

        logout(&mut session, &mut navigator);

        assert!(session.current_user().is_none());
        assert_eq!(navigator.current(), Some(Route::Login));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "1/5/2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()), "12/25/2024");
    }
}
