use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::query::MonthlySummary;

/// One line item of a payment as it appears in the input CSV.
/// A row with no item name and no prices carries only the payment header.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PaymentRow {
    pub payment_id: u64,
    pub payment_date: DateTime<FixedOffset>,
    pub user_email: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_4dp")]
    pub regular_price: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_4dp")]
    pub final_price: Option<Decimal>,
}

/// Parses the field text straight into a `Decimal`. Going through serde's
/// number path would let the CSV reader hand over an `f64`.
fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .filter(|s| !s.is_empty())
        .map(|s| {
            Decimal::from_str(&s)
                .map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero))
                .map_err(|err| D::Error::custom(format!("invalid price {:?}: {}", s, err)))
        })
        .transpose()
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

/// Output row of the monthly report.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummaryRow {
    pub month: String,
    pub payments: usize,
    pub items: usize,
    pub total: Decimal,
    pub discount: Decimal,
}

impl From<MonthlySummary> for MonthlySummaryRow {
    fn from(summary: MonthlySummary) -> Self {
        Self {
            month: summary.month.to_string(),
            payments: summary.payments,
            items: summary.items,
            total: summary.total,
            discount: summary.discount,
        }
    }
}
