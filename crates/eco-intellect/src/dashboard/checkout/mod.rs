//! Simulated food-app checkout that intercepts payment with an eco offer.

mod flow;
mod session;
pub mod summary;

pub use flow::CheckoutFlow;
pub use session::{CheckoutAction, CheckoutSession, CheckoutState, InterceptChoice, Transition};
pub use summary::{ConfirmationMessage, EcoOffer, LineItem, OrderSummary};
