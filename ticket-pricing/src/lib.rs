//! Conference ticket pricing.
//!
//! Tickets are priced by attendee age tier and orders of more than three
//! tickets get 10% off the whole order. [`run_session`] drives the
//! interactive prompt over any reader/writer pair.

pub mod error;
pub mod pricing;
pub mod session;

pub use error::PricingError;
pub use pricing::{order_total, ticket_price, Order};
pub use session::run_session;
