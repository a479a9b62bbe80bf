use chrono::Duration;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::clock::ClockSource;
use crate::model::{Payment, PaymentItem, YearMonth};
use crate::source::PaymentSource;

/// Per-month totals produced by [`PaymentQueryService::monthly_summaries`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub payments: usize,
    pub items: usize,
    pub total: Decimal,
    pub discount: Decimal,
}

/// Read-only queries over the payments of a [`PaymentSource`].
///
/// Holds no state of its own: every call reads a fresh snapshot from the
/// source and builds a new result. Sorting is stable, so payments with equal
/// keys keep their source order. Errors from the source are returned as-is.
pub struct PaymentQueryService<S, C> {
    source: S,
    clock: C,
}

impl<S, C> PaymentQueryService<S, C>
where
    S: PaymentSource,
    C: ClockSource,
{
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    fn payments(&self) -> Result<Vec<Payment>, S::Error> {
        let payments = self.source.get_all()?;
        debug!(count = payments.len(), "loaded payments");
        Ok(payments)
    }

    pub fn sorted_by_date_ascending(&self) -> Result<Vec<Payment>, S::Error> {
        let mut payments = self.payments()?;
        payments.sort_by_key(|p| p.payment_date);
        Ok(payments)
    }

    pub fn sorted_by_date_descending(&self) -> Result<Vec<Payment>, S::Error> {
        let mut payments = self.payments()?;
        payments.sort_by_key(|p| Reverse(p.payment_date));
        Ok(payments)
    }

    pub fn sorted_by_item_count_ascending(&self) -> Result<Vec<Payment>, S::Error> {
        let mut payments = self.payments()?;
        payments.sort_by_key(|p| p.payment_items.len());
        Ok(payments)
    }

    pub fn sorted_by_item_count_descending(&self) -> Result<Vec<Payment>, S::Error> {
        let mut payments = self.payments()?;
        payments.sort_by_key(|p| Reverse(p.payment_items.len()));
        Ok(payments)
    }

    /// Payments dated in `month`, judged in each payment's own offset.
    pub fn for_month(&self, month: YearMonth) -> Result<Vec<Payment>, S::Error> {
        let payments: Vec<_> = self
            .payments()?
            .into_iter()
            .filter(|p| month.contains(&p.payment_date))
            .collect();
        debug!(%month, matched = payments.len(), "payments for month");
        Ok(payments)
    }

    pub fn for_current_month(&self) -> Result<Vec<Payment>, S::Error> {
        self.for_month(self.clock.current_year_month())
    }

    /// Payments strictly inside the window `(now - days, now)`.
    /// Both ends are exclusive, so `days == 0` matches nothing. A window
    /// reaching past the earliest representable date is open-ended.
    pub fn for_last_days(&self, days: u32) -> Result<Vec<Payment>, S::Error> {
        let now = self.clock.now();
        let since = now.checked_sub_signed(Duration::days(i64::from(days)));
        Ok(self
            .payments()?
            .into_iter()
            .filter(|p| since.map_or(true, |since| p.payment_date > since))
            .filter(|p| p.payment_date < now)
            .collect())
    }

    pub fn with_exactly_one_item(&self) -> Result<HashSet<Payment>, S::Error> {
        Ok(self
            .payments()?
            .into_iter()
            .filter(|p| p.payment_items.len() == 1)
            .collect())
    }

    pub fn products_sold_this_month(&self) -> Result<HashSet<String>, S::Error> {
        Ok(self
            .for_current_month()?
            .into_iter()
            .flat_map(|p| p.payment_items)
            .map(|item| item.name)
            .collect())
    }

    pub fn total_for_month(&self, month: YearMonth) -> Result<Decimal, S::Error> {
        self.sum_items_for_month(month, |item| item.final_price)
    }

    pub fn regular_total_for_month(&self, month: YearMonth) -> Result<Decimal, S::Error> {
        self.sum_items_for_month(month, |item| item.regular_price)
    }

    pub fn discount_total_for_month(&self, month: YearMonth) -> Result<Decimal, S::Error> {
        self.sum_items_for_month(month, PaymentItem::discount)
    }

    fn sum_items_for_month(
        &self,
        month: YearMonth,
        amount: impl Fn(&PaymentItem) -> Decimal,
    ) -> Result<Decimal, S::Error> {
        Ok(self
            .for_month(month)?
            .iter()
            .flat_map(|p| &p.payment_items)
            .map(amount)
            .sum())
    }

    /// Items of every payment made by the user with exactly this email,
    /// in payment order then item order. Unknown emails yield no items.
    pub fn items_for_user_email(&self, email: &str) -> Result<Vec<PaymentItem>, S::Error> {
        Ok(self
            .payments()?
            .into_iter()
            .filter(|p| p.user.email == email)
            .flat_map(|p| p.payment_items)
            .collect())
    }

    /// Payments whose value is strictly greater than `threshold`.
    pub fn payments_over_value(&self, threshold: i64) -> Result<HashSet<Payment>, S::Error> {
        let threshold = Decimal::from(threshold);
        Ok(self
            .payments()?
            .into_iter()
            .filter(|p| self.payment_value(p) > threshold)
            .collect())
    }

    /// Sum of the final prices of the payment's items.
    pub fn payment_value(&self, payment: &Payment) -> Decimal {
        payment.value()
    }

    /// One summary per month that has payments, oldest month first.
    pub fn monthly_summaries(&self) -> Result<Vec<MonthlySummary>, S::Error> {
        let mut months: BTreeMap<YearMonth, MonthlySummary> = BTreeMap::new();
        for payment in self.payments()? {
            let month = payment.year_month();
            let summary = months.entry(month).or_insert_with(|| MonthlySummary {
                month,
                payments: 0,
                items: 0,
                total: Decimal::ZERO,
                discount: Decimal::ZERO,
            });
            summary.payments += 1;
            for item in &payment.payment_items {
                summary.items += 1;
                summary.total += item.final_price;
                summary.discount += item.discount();
            }
        }
        Ok(months.into_values().collect())
    }
}
