pub mod account;
pub mod ledger;
pub mod seed;
pub mod view;
