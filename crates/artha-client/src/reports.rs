//! # Report Endpoints
//!
//! Server-computed reporting: the filtered dashboard report and the
//! PDF/Excel/CSV exports. Export bytes are passed through untouched —
//! formatting is entirely the backend's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use artha_core::InvoiceStatus;

use crate::client::ApiClient;
use crate::error::ClientResult;

// =============================================================================
// Filters
// =============================================================================

/// Report query filters; only set fields are sent.
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub customer: Option<String>,
}

impl ReportFilters {
    /// Date-range filter covering `start..=end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        ReportFilters {
            start_date: Some(start),
            end_date: Some(end),
            ..ReportFilters::default()
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start_date {
            query.push(("startDate", start.to_string()));
        }
        if let Some(end) = self.end_date {
            query.push(("endDate", end.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(customer) = &self.customer {
            query.push(("customer", customer.clone()));
        }
        query
    }
}

// =============================================================================
// DTOs
// =============================================================================

/// Headline numbers of the dashboard report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSummary {
    pub total_invoices: i64,
    pub total_revenue: Decimal,
    pub average_invoice_value: Decimal,
    pub pending_invoices: i64,
}

/// Revenue ranking entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub customer_name: String,
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub invoice_count: i64,
}

/// Recent activity feed entry. The date stays an opaque display string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
}

/// The filtered dashboard report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardReport {
    pub summary: Option<ReportSummary>,
    pub top_customers: Vec<TopCustomer>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Export file formats the backend can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ExportFormat {
    const fn path_segment(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
        }
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Report endpoints.
pub struct ReportsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ReportsApi<'_> {
    /// The filtered dashboard report.
    pub async fn dashboard(&self, filters: &ReportFilters) -> ClientResult<DashboardReport> {
        self.client
            .get_json_query("/reports/dashboard", &filters.to_query())
            .await
    }

    /// A rendered export, bytes passed through untouched.
    pub async fn export(
        &self,
        format: ExportFormat,
        filters: &ReportFilters,
    ) -> ClientResult<Vec<u8>> {
        self.client
            .get_bytes(
                &format!("/reports/export/{}", format.path_segment()),
                &filters.to_query(),
            )
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
