//! Refund objects and request parameters

use crate::http::ListResponse;
use crate::params::{AppendTo, FormBody, ListParams, Params};
use crate::types::{Currency, Expandable, HasId, Metadata, Transaction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Money returned from a charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub amount: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub currency: Currency,
    #[serde(default)]
    pub balance_transaction: Option<Expandable<Transaction>>,
    pub charge: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl HasId for Refund {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One page of refunds
pub type RefundList = ListResponse<Refund>;

/// Parameters for creating, retrieving or updating a refund
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundParams {
    /// Charge the refund belongs to; used in the path, never in the body
    pub charge: String,
    /// Partial refund amount; `None` refunds the remainder
    pub amount: Option<u64>,
    /// Also refund the application fee
    pub refund_application_fee: bool,
    pub params: Params,
}

impl RefundParams {
    /// Full refund of `charge`
    pub fn new(charge: impl Into<String>) -> Self {
        Self {
            charge: charge.into(),
            ..Default::default()
        }
    }

    /// Refund only `amount`
    #[must_use]
    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }
}

impl AppendTo for RefundParams {
    fn append_to(&self, body: &mut FormBody) {
        body.add_opt("amount", self.amount);
        if self.refund_application_fee {
            body.add("refund_application_fee", "true");
        }
        self.params.append_to(body);
    }
}

/// Parameters for listing a charge's refunds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundListParams {
    pub charge: String,
    pub list: ListParams,
}

impl RefundListParams {
    /// List refunds of `charge`
    pub fn new(charge: impl Into<String>) -> Self {
        Self {
            charge: charge.into(),
            list: ListParams::default(),
        }
    }
}
