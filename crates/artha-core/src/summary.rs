//! # Dashboard Summary
//!
//! Pure reductions over a fetched invoice list for the dashboard cards.
//!
//! The remote API owns persistence and reporting; these helpers only fold
//! an already-fetched list into the headline numbers. `today` is always a
//! parameter — this crate takes no clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Invoice, InvoiceStatus};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSummary {
    /// Count of all fetched invoices.
    pub total_invoices: usize,

    /// Sum of totals over PAID invoices only.
    pub total_revenue: Money,

    /// Count of invoices still awaiting payment (DRAFT or SENT).
    pub pending_invoices: usize,
}

/// Folds a fetched invoice list into the dashboard summary.
pub fn summarize(invoices: &[Invoice]) -> DashboardSummary {
    let total_revenue = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .map(|i| i.total_amount)
        .sum();

    let pending_invoices = invoices
        .iter()
        .filter(|i| matches!(i.status, InvoiceStatus::Draft | InvoiceStatus::Sent))
        .count();

    DashboardSummary {
        total_invoices: invoices.len(),
        total_revenue,
        pending_invoices,
    }
}

/// Invoices that are unsettled and past due as of `today`.
///
/// Fallback for when the server-side overdue endpoint is unavailable.
/// Settled invoices (paid or cancelled) are never overdue; invoices without
/// a due date cannot be.
pub fn overdue<'a>(invoices: &'a [Invoice], today: NaiveDate) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|i| !i.status.is_settled())
        .filter(|i| matches!(i.due_date, Some(due) if due < today))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn invoice(id: i64, status: InvoiceStatus, total: Money, due: Option<NaiveDate>) -> Invoice {
        Invoice {
            id,
            invoice_number: format!("INV-{:03}", id),
            status,
            invoice_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            due_date: due,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
            tax_amount: Money::zero(),
            discount_amount: Money::zero(),
            total_amount: total,
            notes: String::new(),
            items: Vec::new(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[test]
    fn test_revenue_counts_paid_only() {
        let invoices = vec![
            invoice(1, InvoiceStatus::Paid, Money::new(dec!(100)), None),
            invoice(2, InvoiceStatus::Paid, Money::new(dec!(50.50)), None),
            invoice(3, InvoiceStatus::Sent, Money::new(dec!(999)), None),
            invoice(4, InvoiceStatus::Cancelled, Money::new(dec!(999)), None),
        ];

        let summary = summarize(&invoices);
        assert_eq!(summary.total_invoices, 4);
        assert_eq!(summary.total_revenue, Money::new(dec!(150.50)));
        assert_eq!(summary.pending_invoices, 1);
    }

    #[test]
    fn test_pending_counts_draft_and_sent() {
        let invoices = vec![
            invoice(1, InvoiceStatus::Draft, Money::zero(), None),
            invoice(2, InvoiceStatus::Sent, Money::zero(), None),
            invoice(3, InvoiceStatus::Overdue, Money::zero(), None),
        ];
        assert_eq!(summarize(&invoices).pending_invoices, 2);
    }

    #[test]
    fn test_overdue_detection() {
        let invoices = vec![
            invoice(1, InvoiceStatus::Sent, Money::zero(), Some(day(1))),
            invoice(2, InvoiceStatus::Paid, Money::zero(), Some(day(1))),
            invoice(3, InvoiceStatus::Cancelled, Money::zero(), Some(day(1))),
            invoice(4, InvoiceStatus::Sent, Money::zero(), Some(day(20))),
            invoice(5, InvoiceStatus::Sent, Money::zero(), None),
        ];

        let late = overdue(&invoices, day(10));
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].id, 1);

        // Due today is not yet overdue
        let today_due = overdue(&invoices, day(1));
        assert!(today_due.is_empty());
    }

    #[test]
    fn test_empty_list() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_invoices, 0);
        assert_eq!(summary.total_revenue, Money::zero());
        assert_eq!(summary.pending_invoices, 0);
    }
}
