//! # Invoice Endpoints
//!
//! Invoice CRUD, status transitions, and PDF retrieval.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft → Invoice                                      │
//! │                                                                         │
//! │  editor.finish()  ──►  InvoiceDraft (validated)                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  InvoiceRequest::from(&draft)                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  POST /invoices (create)  or  PUT /invoices/{id} (edit)                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  The backend assigns the number and recomputes totals; the draft's     │
//! │  grand total was display-only and is not sent.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! PDF bytes are passed through untouched — layout and formatting are the
//! backend's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use artha_core::{
    Catalog, Invoice, InvoiceDraft, InvoiceId, InvoiceItem, InvoiceStatus, Money, ProductId,
};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::products::Page;

const FULL_PAGE_SIZE: u32 = 1000;

// =============================================================================
// DTOs
// =============================================================================

/// Invoice line as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemDto {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// Invoice as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItemDto>,
}

impl From<InvoiceDto> for Invoice {
    fn from(dto: InvoiceDto) -> Self {
        Invoice {
            id: dto.id,
            invoice_number: dto.invoice_number,
            status: dto.status,
            invoice_date: dto.invoice_date,
            due_date: dto.due_date,
            customer_name: dto.customer_name.unwrap_or_default(),
            customer_email: dto.customer_email.unwrap_or_default(),
            customer_phone: dto.customer_phone.unwrap_or_default(),
            customer_address: dto.customer_address.unwrap_or_default(),
            tax_amount: Money::new(dto.tax_amount),
            discount_amount: Money::new(dto.discount_amount),
            total_amount: Money::new(dto.total_amount),
            notes: dto.notes.unwrap_or_default(),
            items: dto
                .items
                .into_iter()
                .map(|item| InvoiceItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: Money::new(item.unit_price),
                    description: item.description.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl InvoiceDto {
    /// Opens this invoice for editing against the given catalog snapshot.
    pub fn into_draft(self, catalog: &Catalog) -> InvoiceDraft {
        InvoiceDraft::hydrate(&Invoice::from(self), catalog)
    }
}

/// One line of the submission payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemRequest {
    pub product_id: ProductId,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub description: String,
}

/// Invoice submission payload (create and update share the shape).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub notes: String,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItemRequest>,
}

impl From<&InvoiceDraft> for InvoiceRequest {
    fn from(draft: &InvoiceDraft) -> Self {
        InvoiceRequest {
            invoice_date: draft.invoice_date,
            due_date: draft.due_date,
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            customer_phone: draft.customer_phone.clone(),
            customer_address: draft.customer_address.clone(),
            tax_amount: draft.tax_amount.amount(),
            discount_amount: draft.discount_amount.amount(),
            notes: draft.notes.clone(),
            status: draft.status,
            items: draft
                .items()
                .iter()
                .map(|item| InvoiceItemRequest {
                    // A finished draft always carries a selection per line
                    product_id: item.product_id.unwrap_or_default(),
                    quantity: item.quantity.or_zero(),
                    unit_price: item.unit_price.amount(),
                    description: item.description.clone(),
                })
                .collect(),
        }
    }
}

impl InvoiceRequest {
    /// The same payload with the status forced to PAID
    /// ("create & mark paid" in one submit).
    pub fn marked_paid(mut self) -> Self {
        self.status = InvoiceStatus::Paid;
        self
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// Invoice endpoints.
pub struct InvoicesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl InvoicesApi<'_> {
    /// One page of invoices.
    pub async fn list(&self, page: u32, size: u32, sort: &str) -> ClientResult<Page<InvoiceDto>> {
        self.client
            .get_json_query(
                "/invoices",
                &[
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                    ("sort", sort.to_string()),
                ],
            )
            .await
    }

    /// The whole invoice list, newest first.
    pub async fn list_all(&self) -> ClientResult<Vec<InvoiceDto>> {
        Ok(self
            .list(0, FULL_PAGE_SIZE, "createdAt,desc")
            .await?
            .content)
    }

    /// Invoices the backend flags as overdue.
    pub async fn overdue(&self) -> ClientResult<Vec<InvoiceDto>> {
        self.client.get_json("/invoices/overdue").await
    }

    pub async fn create(&self, request: &InvoiceRequest) -> ClientResult<InvoiceDto> {
        self.client.post_json("/invoices", request).await
    }

    pub async fn update(&self, id: InvoiceId, request: &InvoiceRequest) -> ClientResult<InvoiceDto> {
        self.client
            .put_json(&format!("/invoices/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: InvoiceId) -> ClientResult<()> {
        self.client.delete(&format!("/invoices/{}", id)).await
    }

    /// Moves an invoice through its lifecycle (send / mark paid / cancel).
    pub async fn set_status(&self, id: InvoiceId, status: InvoiceStatus) -> ClientResult<()> {
        self.client
            .patch_query(
                &format!("/invoices/{}/status", id),
                &[("status", status.as_str().to_string())],
            )
            .await
    }

    /// The rendered PDF, bytes passed through untouched.
    pub async fn pdf(&self, id: InvoiceId) -> ClientResult<Vec<u8>> {
        self.client
            .get_bytes(&format!("/invoices/{}/pdf", id), &[])
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use artha_core::Quantity;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dto_to_core_invoice() {
        let dto: InvoiceDto = serde_json::from_str(
            r#"{
                "id": 42,
                "invoiceNumber": "INV-042",
                "status": "SENT",
                "invoiceDate": "2025-04-01",
                "dueDate": "2025-04-15",
                "customerName": "Asha",
                "taxAmount": "5",
                "totalAmount": "35",
                "items": [
                    {"productId": 7, "quantity": "3", "unitPrice": "10", "description": "Rice"}
                ]
            }"#,
        )
        .unwrap();

        let invoice = Invoice::from(dto);
        assert_eq!(invoice.invoice_number, "INV-042");
        assert_eq!(invoice.status, InvoiceStatus::Sent);
        assert_eq!(invoice.customer_name, "Asha");
        assert_eq!(invoice.customer_email, "");
        assert!(!invoice.has_customer_email());
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].unit_price, Money::new(dec!(10)));
        assert!(invoice.matches("asha"));
        assert!(invoice.matches("inv-042"));
        assert!(!invoice.matches("ravi"));
    }

    #[test]
    fn test_request_from_finished_draft() {
        let mut draft = InvoiceDraft::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        draft.customer_name = "Asha".to_string();
        draft.tax_amount = Money::new(dec!(5));

        let key = draft.add_item();
        let item = draft
            .item(key)
            .unwrap()
            .with_unit_price(Money::new(dec!(10)))
            .with_quantity(Quantity::Value(dec!(3)));
        let mut item = item;
        item.product_id = Some(7);
        item.description = "Rice".to_string();
        draft.set_item(item);

        let request = InvoiceRequest::from(&draft);
        assert_eq!(request.customer_name, "Asha");
        assert_eq!(request.status, InvoiceStatus::Draft);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].product_id, 7);
        assert_eq!(request.items[0].quantity, dec!(3));

        let paid = request.marked_paid();
        assert_eq!(paid.status, InvoiceStatus::Paid);
    }
}
