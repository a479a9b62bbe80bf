//! Where payment records come from.

use crate::model::Payment;

/// Provides a snapshot of every payment currently known.
///
/// The query service calls [`PaymentSource::get_all`] once per operation and
/// hands any error back to its caller untouched.
pub trait PaymentSource {
    type Error;

    fn get_all(&self) -> Result<Vec<Payment>, Self::Error>;
}

impl<T: PaymentSource + ?Sized> PaymentSource for &T {
    type Error = T::Error;

    fn get_all(&self) -> Result<Vec<Payment>, Self::Error> {
        (**self).get_all()
    }
}
