//! Monthly rent-status reconciliation.

use crate::models::{Payment, Rental};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentStatus {
    Paid,
    Partial,
    Pending,
    Restricted,
}

impl RentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Partial => "PARTIAL",
            Self::Pending => "PENDING",
            Self::Restricted => "RESTRICTED",
        }
    }
}

impl std::fmt::Display for RentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived view of the current month's rent position.
#[derive(Debug, Clone, PartialEq)]
pub struct RentSummary {
    pub total_rent: f64,
    /// Sum of COMPLETED payments dated in the current calendar month.
    pub paid_amount: f64,
    /// `total_rent - paid_amount`; negative when overpaid.
    pub remaining_balance: f64,
    /// Current-month payments in a non-COMPLETED status.
    pub pending_count: usize,
    pub status: RentStatus,
    pub is_late: bool,
}

impl RentSummary {
    /// Reconcile a rental against its payment list as of `today`
    /// (the device-local calendar date).
    ///
    /// Only payments with a paid date, a COMPLETED status, and the same
    /// month and year as `today` count toward `paid_amount`; other
    /// statuses in the month feed `pending_count` instead. A rent of
    /// zero never reads PAID. Once the due day has passed with a
    /// positive balance, any non-PAID status collapses to RESTRICTED.
    pub fn reconcile(rental: Option<&Rental>, payments: &[Payment], today: NaiveDate) -> Self {
        let total_rent = rental.map(|r| r.rent_amount).unwrap_or(0.0);

        let mut paid_amount = 0.0;
        let mut pending_count = 0;
        for payment in payments {
            let Some(paid_date) = payment.paid_date else {
                continue;
            };
            if !same_calendar_month(paid_date.date_naive(), today) {
                continue;
            }
            if payment.status.is_completed() {
                paid_amount += payment.amount;
            } else {
                pending_count += 1;
            }
        }

        let remaining_balance = total_rent - paid_amount;

        let due_day = rental.map(|r| r.due_day).unwrap_or(0);
        let is_late = today.day() > due_day && remaining_balance > 0.0;

        let mut status = if paid_amount >= total_rent && total_rent > 0.0 {
            RentStatus::Paid
        } else if paid_amount > 0.0 {
            RentStatus::Partial
        } else {
            RentStatus::Pending
        };
        if is_late && status != RentStatus::Paid {
            status = RentStatus::Restricted;
        }

        Self {
            total_rent,
            paid_amount,
            remaining_balance,
            pending_count,
            status,
            is_late,
        }
    }

    /// Reconcile against the device clock.
    pub fn reconcile_now(rental: Option<&Rental>, payments: &[Payment]) -> Self {
        Self::reconcile(rental, payments, chrono::Local::now().date_naive())
    }

    /// Raw paid-to-total ratio; 0 when no rent is set.
    pub fn progress(&self) -> f64 {
        if self.total_rent > 0.0 {
            self.paid_amount / self.total_rent
        } else {
            0.0
        }
    }

    /// Ratio clamped to `[0, 1]` for progress bars.
    pub fn progress_clamped(&self) -> f64 {
        self.progress().clamp(0.0, 1.0)
    }
}

fn same_calendar_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.month() == today.month() && date.year() == today.year()
}
