//! SeaORM adapters. Functions here speak `sea_orm::DbErr`; the `repos`
//! layer above maps to `DomainError`.

pub mod todos_sea;
pub mod users_sea;
