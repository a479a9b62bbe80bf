//! Payment domain types.
//!
//! All types are immutable once built. [`Payment`] compares and hashes on its
//! [`PaymentId`] only, so collecting payments into a set never merges two
//! distinct payments that happen to carry identical contents.

use chrono::{DateTime, Datelike, FixedOffset};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaymentId(pub u64);

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentItem {
    pub name: String,
    pub regular_price: Decimal,
    pub final_price: Decimal,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, regular_price: Decimal, final_price: Decimal) -> Self {
        Self {
            name: name.into(),
            regular_price,
            final_price,
        }
    }

    /// Difference between regular and final price. Negative for a markup.
    pub fn discount(&self) -> Decimal {
        self.regular_price - self.final_price
    }
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub payment_date: DateTime<FixedOffset>,
    pub user: User,
    pub payment_items: Vec<PaymentItem>,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        payment_date: DateTime<FixedOffset>,
        user: User,
        payment_items: Vec<PaymentItem>,
    ) -> Self {
        Self {
            id,
            payment_date,
            user,
            payment_items,
        }
    }

    /// Sum of the final prices of all items.
    pub fn value(&self) -> Decimal {
        self.payment_items.iter().map(|item| item.final_price).sum()
    }

    /// Calendar month of the payment, read in the payment's own offset.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(&self.payment_date)
    }
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A calendar year and month. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidYearMonth(s.to_owned());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
