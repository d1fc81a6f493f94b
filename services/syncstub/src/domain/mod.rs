pub mod ledger;
pub mod types;
