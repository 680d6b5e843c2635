pub mod add;
pub mod balance;
pub mod dashboard;
