//! # QR Payloads
//!
//! The text encoded into product and payment QR codes.
//!
//! ```text
//! Product  →  {"type":"product","id":"1"}
//! Payment  →  {"type":"payment","total":125,"ts":"2024-01-20T10:00:00Z"}
//! ```
//!
//! `total` is written in baht (`45.5` for a fractional amount), the unit a
//! customer's banking app reads. Payloads are display-only and never parsed
//! back.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::CoreResult;
use crate::money::{Money, MINOR_PER_MAJOR};
use crate::types::Product;

/// A QR code payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QrPayload {
    Product {
        id: String,
    },
    Payment {
        #[serde(serialize_with = "serialize_major")]
        total: Money,
        #[serde(rename = "ts")]
        timestamp: DateTime<Utc>,
    },
}

impl QrPayload {
    pub fn product(product: &Product) -> Self {
        QrPayload::Product {
            id: product.id.clone(),
        }
    }

    pub fn payment(total: Money, at: DateTime<Utc>) -> Self {
        QrPayload::Payment {
            total,
            timestamp: at,
        }
    }

    /// Serializes the payload to the compact JSON text put into the code.
    pub fn encode(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Whole amounts as JSON integers, anything else as a decimal number.
fn serialize_major<S>(total: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if total.minor_part() == 0 {
        serializer.serialize_i64(total.major())
    } else {
        serializer.serialize_f64(total.minor() as f64 / MINOR_PER_MAJOR as f64)
    }
}
