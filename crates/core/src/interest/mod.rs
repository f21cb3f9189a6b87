//! The interest projection engine.
//!
//! Projects a loan's current value from its principal, annual rate, and
//! elapsed time. Pure and stateless so the same numbers come out wherever
//! the projection is rendered.

mod projection;

#[cfg(test)]
mod props;

pub use projection::{accrued, project};
