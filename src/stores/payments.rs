//! In-memory payment storage.
//!
//! Keeps payments in the order they were first seen and assembles them from
//! flat CSV rows, one row per line item:
//! - Rows sharing a payment id are merged into a single payment
//! - Every row for a payment must agree on its date and user
//! - Header-only rows create a payment without items

use std::collections::HashMap;
use std::convert::Infallible;

use tracing::debug;

use crate::dto::PaymentRow;
use crate::model::{Payment, PaymentId, PaymentItem, User};
use crate::source::PaymentSource;
use crate::Error;

#[derive(Debug, Default)]
pub struct PaymentStore {
    payments: Vec<Payment>,
    /// Position of each payment in `payments`
    index: HashMap<PaymentId, usize>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self {
            payments: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a complete payment.
    /// Returns an error if a payment with the same id is already stored.
    pub fn insert(&mut self, payment: Payment) -> Result<(), Error> {
        if self.index.contains_key(&payment.id) {
            return Err(Error::DuplicatePayment(payment.id));
        }
        self.index.insert(payment.id, self.payments.len());
        self.payments.push(payment);
        Ok(())
    }

    /// Merges one CSV row into the store, creating its payment on first sight.
    /// The row's item, if any, is appended after the payment's existing items.
    pub fn insert_row(&mut self, row: PaymentRow) -> Result<(), Error> {
        let id = PaymentId(row.payment_id);
        let item = match (row.item_name, row.regular_price, row.final_price) {
            (Some(name), Some(regular_price), Some(final_price)) => {
                Some(PaymentItem::new(name, regular_price, final_price))
            }
            (None, None, None) => None,
            _ => return Err(Error::IncompleteItem(id)),
        };

        match self.index.get(&id) {
            Some(&position) => {
                let payment = &mut self.payments[position];
                if payment.payment_date != row.payment_date
                    || payment.payment_date.offset() != row.payment_date.offset()
                    || payment.user.email != row.user_email
                {
                    return Err(Error::PaymentHeaderMismatch(id));
                }
                payment.payment_items.extend(item);
            }
            None => {
                debug!(payment_id = %id, "new payment");
                self.insert(Payment::new(
                    id,
                    row.payment_date,
                    User::new(row.user_email),
                    item.into_iter().collect(),
                ))?;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Payment> {
        self.payments.iter()
    }
}

impl FromIterator<Payment> for PaymentStore {
    /// Collects payments, keeping the first of any duplicated id.
    fn from_iter<I: IntoIterator<Item = Payment>>(iter: I) -> Self {
        let mut store = Self::new();
        for payment in iter {
            let id = payment.id;
            if let Err(err) = store.insert(payment) {
                debug!(payment_id = %id, %err, "skipping payment");
            }
        }
        store
    }
}

impl PaymentSource for PaymentStore {
    type Error = Infallible;

    fn get_all(&self) -> Result<Vec<Payment>, Self::Error> {
        Ok(self.payments.clone())
    }
}
