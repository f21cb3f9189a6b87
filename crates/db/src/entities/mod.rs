//! `SeaORM` entity definitions.

pub mod family_members;
pub mod households;
pub mod loans;
pub mod sea_orm_active_enums;
