//! Fixed copy and amounts shown by the mock checkout.
//!
//! The basket never depends on the dashboard order; only the delivery line
//! echoes the selected transport mode.

use serde::Serialize;

use super::session::InterceptChoice;
use crate::dashboard::order::{OrderInput, TransportMode};

pub const CURRENCY_SYMBOL: &str = "\u{20b9}";
const RESTAURANT: &str = "Delicious Food Restaurant";
const DELIVERY_FEE: u32 = 40;
const ECO_DISCOUNT: u32 = 10;
const ECO_SAVING_GRAMS: u32 = 320;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub quantity: u32,
    pub name: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub restaurant: &'static str,
    pub items: Vec<LineItem>,
    pub delivery_label: String,
    pub delivery_fee: u32,
    pub total: u32,
}

impl OrderSummary {
    pub fn mock(transport_mode: TransportMode) -> Self {
        let items = vec![
            LineItem {
                quantity: 1,
                name: "Margherita Pizza",
                price: 250,
            },
            LineItem {
                quantity: 1,
                name: "Garlic Bread",
                price: 100,
            },
        ];
        let subtotal: u32 = items.iter().map(|item| item.quantity * item.price).sum();

        Self {
            restaurant: RESTAURANT,
            items,
            delivery_label: format!("Delivery ({})", transport_mode.label()),
            delivery_fee: DELIVERY_FEE,
            total: subtotal + DELIVERY_FEE,
        }
    }

    pub fn pay_label(&self) -> String {
        format!("Proceed to Pay {CURRENCY_SYMBOL}{}", self.total)
    }
}

/// The eco-delivery offer shown at the intercept step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcoOffer {
    pub headline: &'static str,
    pub option_label: &'static str,
    pub saving_grams: u32,
    pub discount: u32,
    pub discounted_total: u32,
}

impl EcoOffer {
    pub fn standard(summary: &OrderSummary) -> Self {
        Self {
            headline: "Switch to Eco-Delivery",
            option_label: "Bike Delivery + Biodegradable Packaging",
            saving_grams: ECO_SAVING_GRAMS,
            discount: ECO_DISCOUNT,
            discounted_total: summary.total.saturating_sub(ECO_DISCOUNT),
        }
    }

    pub fn saving_text(&self) -> String {
        format!("Save ~{}g of CO\u{2082}!", self.saving_grams)
    }

    pub fn discount_text(&self) -> String {
        format!("{CURRENCY_SYMBOL}{} Eco-Discount Applied", self.discount)
    }

    pub fn accept_label(&self) -> String {
        format!(
            "Accept Eco-Option & Pay {CURRENCY_SYMBOL}{}",
            self.discounted_total
        )
    }
}

pub fn intercept_prompt(input: &OrderInput) -> String {
    format!(
        "Did you know your current choice ({}) emits significant CO\u{2082}?",
        input.choice_phrase()
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationMessage {
    pub headline: &'static str,
    pub detail: String,
}

/// Success copy; the choice only changes wording, nothing is recorded.
pub fn confirmation(
    choice: Option<InterceptChoice>,
    summary: &OrderSummary,
    offer: &EcoOffer,
) -> ConfirmationMessage {
    let detail = match choice {
        Some(InterceptChoice::AcceptEcoAlternative) => format!(
            "Your food is on its way by bike in biodegradable packaging. You paid {CURRENCY_SYMBOL}{} and saved ~{}g of CO\u{2082}.",
            offer.discounted_total, offer.saving_grams
        ),
        Some(InterceptChoice::KeepOriginal) | None => format!(
            "Your food is being prepared. You paid {CURRENCY_SYMBOL}{}.",
            summary.total
        ),
    };

    ConfirmationMessage {
        headline: "Order Confirmed!",
        detail,
    }
}
