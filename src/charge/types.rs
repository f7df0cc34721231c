//! Charge objects and request parameters

use crate::http::ListResponse;
use crate::params::{AppendTo, FormBody, ListParams, Params};
use crate::refund::RefundList;
use crate::types::{Currency, Expandable, HasId, Metadata, Transaction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Response Objects
// ============================================================================

/// A charge against a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub livemode: bool,
    pub amount: u64,
    #[serde(default)]
    pub captured: bool,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub currency: Currency,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub refunded: bool,
    #[serde(default)]
    pub refunds: Option<RefundList>,
    #[serde(default)]
    pub amount_refunded: u64,
    #[serde(default)]
    pub balance_transaction: Option<Expandable<Transaction>>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dispute: Option<serde_json::Value>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub failure_code: Option<String>,
    #[serde(default)]
    pub invoice: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub receipt_email: Option<String>,
    #[serde(default)]
    pub statement_description: Option<String>,
}

impl HasId for Charge {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Charge {
    /// Amount still capturable or refundable
    pub fn amount_remaining(&self) -> u64 {
        self.amount.saturating_sub(self.amount_refunded)
    }
}

/// Card details as returned on a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub exp_month: u8,
    pub exp_year: u16,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub cvc_check: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_city: Option<String>,
    #[serde(default)]
    pub address_state: Option<String>,
    #[serde(default)]
    pub address_zip: Option<String>,
    #[serde(default)]
    pub address_country: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
}

/// One page of charges
pub type ChargeList = ListResponse<Charge>;

// ============================================================================
// Request Parameters
// ============================================================================

/// Raw card details sent when creating a charge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardParams {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: Option<String>,
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_country: Option<String>,
}

impl CardParams {
    /// Card number and expiry
    pub fn new(
        number: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
            ..Default::default()
        }
    }

    /// Set the CVC
    #[must_use]
    pub fn cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Set the cardholder name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl AppendTo for CardParams {
    fn append_to(&self, body: &mut FormBody) {
        body.add("card[number]", self.number.clone());
        body.add("card[exp_month]", self.exp_month.clone());
        body.add("card[exp_year]", self.exp_year.clone());
        body.add_opt("card[cvc]", self.cvc.as_deref());
        body.add_opt("card[name]", self.name.as_deref());
        body.add_opt("card[address_line1]", self.address_line1.as_deref());
        body.add_opt("card[address_line2]", self.address_line2.as_deref());
        body.add_opt("card[address_city]", self.address_city.as_deref());
        body.add_opt("card[address_state]", self.address_state.as_deref());
        body.add_opt("card[address_zip]", self.address_zip.as_deref());
        body.add_opt("card[address_country]", self.address_country.as_deref());
    }
}

/// Parameters for creating or updating a charge
///
/// Only the fields that are set are sent, so the same type serves updates
/// (typically `description` and `metadata`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeParams {
    pub amount: Option<u64>,
    pub currency: Option<Currency>,
    pub customer: Option<String>,
    /// Card token; takes precedence over `card`
    pub token: Option<String>,
    pub card: Option<CardParams>,
    pub description: Option<String>,
    pub statement_description: Option<String>,
    pub receipt_email: Option<String>,
    pub application_fee: Option<u64>,
    /// Authorize only; capture later with [`Client::capture`](super::Client::capture)
    pub no_capture: bool,
    pub params: Params,
}

impl ChargeParams {
    /// Amount (in the smallest currency unit) and currency
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency),
            ..Default::default()
        }
    }

    /// Charge a card
    #[must_use]
    pub fn card(mut self, card: CardParams) -> Self {
        self.card = Some(card);
        self
    }

    /// Charge a card token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Charge a customer's default card
    #[must_use]
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the receipt email
    #[must_use]
    pub fn receipt_email(mut self, email: impl Into<String>) -> Self {
        self.receipt_email = Some(email.into());
        self
    }

    /// Authorize without capturing
    #[must_use]
    pub fn no_capture(mut self) -> Self {
        self.no_capture = true;
        self
    }
}

impl AppendTo for ChargeParams {
    fn append_to(&self, body: &mut FormBody) {
        body.add_opt("amount", self.amount);
        body.add_opt("currency", self.currency.as_ref());
        body.add_opt("customer", self.customer.as_deref());

        match (&self.token, &self.card) {
            (Some(token), _) => body.add("card", token.clone()),
            (None, Some(card)) => card.append_to(body),
            (None, None) => {}
        }

        body.add_opt("description", self.description.as_deref());
        body.add_opt("statement_description", self.statement_description.as_deref());
        body.add_opt("receipt_email", self.receipt_email.as_deref());
        body.add_opt("application_fee", self.application_fee);
        if self.no_capture {
            body.add("capture", "false");
        }
        self.params.append_to(body);
    }
}

/// Parameters for capturing an authorized charge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureParams {
    /// Capture less than the authorized amount; the rest is refunded
    pub amount: Option<u64>,
    pub application_fee: Option<u64>,
    pub receipt_email: Option<String>,
    pub params: Params,
}

impl AppendTo for CaptureParams {
    fn append_to(&self, body: &mut FormBody) {
        body.add_opt("amount", self.amount);
        body.add_opt("application_fee", self.application_fee);
        body.add_opt("receipt_email", self.receipt_email.as_deref());
        self.params.append_to(body);
    }
}

/// Parameters for listing charges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeListParams {
    pub list: ListParams,
    /// Exact creation timestamp; use `list.filters` for ranges
    pub created: Option<i64>,
    pub customer: Option<String>,
}

impl ChargeListParams {
    /// Default list params
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppendTo for ChargeListParams {
    /// Resource fields only; the iterator appends `list` on every fetch
    fn append_to(&self, body: &mut FormBody) {
        body.add_opt("created", self.created);
        body.add_opt("customer", self.customer.as_deref());
    }
}
