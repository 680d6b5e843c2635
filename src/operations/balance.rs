use crate::error::BalanceOverflow;
use crate::models::transaction::Transaction;
use rust_decimal::{Decimal, RoundingStrategy};

/// Sum of every transaction amount. An empty slice sums to zero.
pub fn compute_balance(transactions: &[Transaction]) -> Result<Decimal, BalanceOverflow> {
    transactions
        .iter()
        .try_fold(Decimal::ZERO, |total, t| total.checked_add(t.amount))
        .ok_or(BalanceOverflow)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSign {
    NonNegative,
    Negative,
}

impl BalanceSign {
    pub fn of(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            BalanceSign::Negative
        } else {
            BalanceSign::NonNegative
        }
    }
}

/// The balance card: the total, whether it is in the red, and how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    pub balance: Decimal,
    pub sign: BalanceSign,
    pub formatted: String,
}

impl BalanceSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self, BalanceOverflow> {
        let balance = compute_balance(transactions)?;
        Ok(Self {
            balance,
            sign: BalanceSign::of(balance),
            formatted: format_currency(balance),
        })
    }
}

/// Formats an amount as US dollars, e.g. `-$1,234.50`.
///
/// Always two fraction digits, rounded half away from zero. Anything that
/// rounds to zero is shown as `$0.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
