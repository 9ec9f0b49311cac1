//! Infrastructure layer: database bootstrap, transactions, state assembly and
//! database error translation.

pub mod db;
pub mod db_errors;
pub mod state;
