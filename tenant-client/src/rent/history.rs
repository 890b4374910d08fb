//! Payment-history grouping into calendar-month buckets.

use crate::models::Payment;
use crate::rent::status::RentStatus;

/// One calendar month of payment history.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// Human label of the bucket, e.g. `"March 2026"`.
    pub month: String,
    /// Expected total for the month. This is the amount of the FIRST
    /// payment seen for the month, not the rental's rent amount, so a
    /// bucket whose later payments exceed the first can show
    /// `paid > total` and still read PAID.
    pub total: f64,
    /// Sum of COMPLETED amounts in the bucket.
    pub paid: f64,
    pub status: RentStatus,
    pub payments: Vec<Payment>,
}

/// Group an unordered payment list by the `"Month Year"` of its paid
/// date; payments without one are skipped.
///
/// Buckets come back in reverse insertion order. Insertion order is
/// whatever order the API returned the payments in, so "most recent
/// first" holds only to the extent the backend sent chronological
/// order; no sort is applied.
pub fn group_by_month(payments: &[Payment]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();

    for payment in payments {
        let Some(paid_date) = payment.paid_date else {
            continue;
        };
        let month = paid_date.format("%B %Y").to_string();

        let index = match buckets.iter().position(|b| b.month == month) {
            Some(index) => index,
            None => {
                buckets.push(MonthBucket {
                    month,
                    total: payment.amount,
                    paid: 0.0,
                    status: RentStatus::Pending,
                    payments: Vec::new(),
                });
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[index];

        if payment.status.is_completed() {
            bucket.paid += payment.amount;
        }
        bucket.payments.push(payment.clone());
    }

    for bucket in &mut buckets {
        bucket.status = if bucket.paid >= bucket.total {
            RentStatus::Paid
        } else if bucket.paid > 0.0 {
            RentStatus::Partial
        } else {
            RentStatus::Pending
        };
    }

    buckets.reverse();
    buckets
}
