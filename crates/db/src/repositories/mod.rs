//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every member and loan operation takes the authenticated household id as
//! an implicit scoping parameter: no query or mutation can touch a row owned
//! by another household, even when given that row's id directly.

pub mod household;
pub mod loan;
pub mod member;

pub use household::{HouseholdError, HouseholdRepository};
pub use loan::{CreateLoanInput, LoanError, LoanRepository};
pub use member::{MemberError, MemberRepository};
