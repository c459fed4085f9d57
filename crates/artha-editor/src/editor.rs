//! # Invoice Editor
//!
//! State of one invoice editing session.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Editing Session Lifecycle                            │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Catalog  │────►│  Draft   │────►│  finish  │────►│  Submit  │       │
//! │  │  fetch   │     │ editing  │     │ (gate)   │     │  to API  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │   (client crate)      │                                (client crate)   │
//! │                  add_line                                               │
//! │                  select_product ──► stock advisory ──► sink            │
//! │                  set_quantity   ──► validator ──► apply or reject      │
//! │                  remove_line                                            │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │                  drop editor ──────────────► (cancel: nothing persists) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Each session exclusively owns its draft and per-line search state; there
//! is no concurrent writer and no locking discipline. Cancellation is just
//! dropping the editor — nothing is persisted until explicit submission.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use artha_core::draft::{InvoiceDraft, LineItem, LineKey};
use artha_core::types::{Invoice, Product, ProductId};
use artha_core::validation::validate_quantity;
use artha_core::{Catalog, DraftTotals, Money, StockAdvisory, ValidationError};
use chrono::NaiveDate;

use crate::notify::NotificationSink;

// =============================================================================
// Editor Error
// =============================================================================

/// Session operation errors.
///
/// All recoverable: the draft is never left in a partial state.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The referenced line no longer exists (e.g. it was removed).
    #[error("no line item with key {0}")]
    UnknownLine(LineKey),

    /// The referenced product is not in the catalog snapshot.
    #[error("product not found in catalog: {0}")]
    UnknownProduct(ProductId),

    /// A line item rule was violated; prior state was retained.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Invoice Editor
// =============================================================================

/// One invoice editing session.
///
/// Holds the catalog snapshot, the draft, and the per-line product search
/// terms. Search terms are keyed by the line's stable [`LineKey`], never by
/// array position, so removing a line cannot shift search state onto a
/// neighbouring row.
pub struct InvoiceEditor {
    catalog: Catalog,
    draft: InvoiceDraft,
    search_terms: HashMap<LineKey, String>,
    sink: Box<dyn NotificationSink>,
}

impl InvoiceEditor {
    /// Starts a session for a new, empty invoice dated `invoice_date`.
    pub fn create(
        invoice_date: NaiveDate,
        catalog: Catalog,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        debug!(products = catalog.len(), "starting new invoice session");
        InvoiceEditor {
            catalog,
            draft: InvoiceDraft::new(invoice_date),
            search_terms: HashMap::new(),
            sink,
        }
    }

    /// Starts a session editing a fetched invoice.
    pub fn edit(invoice: &Invoice, catalog: Catalog, sink: Box<dyn NotificationSink>) -> Self {
        debug!(
            invoice = %invoice.invoice_number,
            products = catalog.len(),
            "starting edit session"
        );
        let draft = InvoiceDraft::hydrate(invoice, &catalog);
        InvoiceEditor {
            catalog,
            draft,
            search_terms: HashMap::new(),
            sink,
        }
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    /// Mutable access to the draft header (dates, customer, tax, discount,
    /// notes, status). Lines stay behind the key-addressed operations.
    pub fn draft_mut(&mut self) -> &mut InvoiceDraft {
        &mut self.draft
    }

    fn line(&self, key: LineKey) -> Result<&LineItem, EditorError> {
        self.draft.item(key).ok_or(EditorError::UnknownLine(key))
    }

    // -------------------------------------------------------------------------
    // Line management
    // -------------------------------------------------------------------------

    /// Appends an empty line and returns its key.
    pub fn add_line(&mut self) -> LineKey {
        let key = self.draft.add_item();
        self.search_terms.insert(key, String::new());
        debug!(%key, "line added");
        key
    }

    /// Removes a line and its auxiliary search state.
    pub fn remove_line(&mut self, key: LineKey) -> Result<(), EditorError> {
        if !self.draft.remove_item(key) {
            return Err(EditorError::UnknownLine(key));
        }
        self.search_terms.remove(&key);
        debug!(%key, "line removed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Product search and selection
    // -------------------------------------------------------------------------

    /// Updates the product search text for one line.
    pub fn set_search_term(
        &mut self,
        key: LineKey,
        term: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.line(key)?;
        self.search_terms.insert(key, term.into());
        Ok(())
    }

    /// The line's current search text (empty when never typed in).
    pub fn search_term(&self, key: LineKey) -> &str {
        self.search_terms.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Catalog matches for the line's current search text.
    ///
    /// Over an empty catalog (fetch pending) this is simply empty — never
    /// an error.
    pub fn search_results(&self, key: LineKey) -> Result<Vec<&Product>, EditorError> {
        self.line(key)?;
        Ok(self.catalog.search(self.search_term(key)))
    }

    /// Binds a catalog product to the line, auto-filling price, description
    /// and captured unit, and clearing the line's search text.
    ///
    /// If the product is out of stock or low on stock a non-fatal advisory
    /// goes to the notification sink; it never blocks the selection.
    pub fn select_product(
        &mut self,
        key: LineKey,
        product_id: ProductId,
    ) -> Result<(), EditorError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(EditorError::UnknownProduct(product_id))?;

        let updated = self.line(key)?.selected(product);
        let advisory = StockAdvisory::for_product(product);

        self.draft.set_item(updated);
        self.search_terms.insert(key, String::new());
        debug!(%key, product_id, "product selected");

        if let Some(StockAdvisory { severity, message }) = advisory {
            self.sink.notify(severity, &message);
        }
        Ok(())
    }

    /// Clears the line's product binding so the user can search again.
    pub fn deselect_product(&mut self, key: LineKey) -> Result<(), EditorError> {
        let updated = self.line(key)?.deselected();
        self.draft.set_item(updated);
        self.search_terms.insert(key, String::new());
        debug!(%key, "product deselected");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Field edits
    // -------------------------------------------------------------------------

    /// Applies a raw quantity keystroke through the unit rule.
    ///
    /// The governing unit is the one captured on the line at selection
    /// time. A hydrated line whose product has vanished from the snapshot
    /// validates loosely until re-selected.
    ///
    /// On rejection the line keeps its previous quantity and the error
    /// carries the message to surface; the failed keystroke is not applied.
    pub fn set_quantity(&mut self, key: LineKey, raw: &str) -> Result<(), EditorError> {
        let item = self.line(key)?;
        let unit = item
            .product_id
            .filter(|id| self.catalog.get(*id).is_some())
            .map(|_| item.product_unit);

        match validate_quantity(unit, raw) {
            Ok(quantity) => {
                let updated = item.with_quantity(quantity);
                self.draft.set_item(updated);
                debug!(%key, raw, "quantity applied");
                Ok(())
            }
            Err(err) => {
                debug!(%key, raw, %err, "quantity rejected");
                Err(err.into())
            }
        }
    }

    /// Sets the unit price. Checked for completeness at submit time, not
    /// per keystroke.
    pub fn set_unit_price(&mut self, key: LineKey, price: Money) -> Result<(), EditorError> {
        let updated = self.line(key)?.with_unit_price(price);
        self.draft.set_item(updated);
        Ok(())
    }

    /// Sets the free-text description.
    pub fn set_description(
        &mut self,
        key: LineKey,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let updated = self.line(key)?.with_description(text);
        self.draft.set_item(updated);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Totals and submission
    // -------------------------------------------------------------------------

    /// Current display totals, recomputed against the catalog snapshot.
    pub fn totals(&self) -> DraftTotals {
        self.draft.totals(&self.catalog)
    }

    /// Runs the submit gate and yields the validated draft for submission.
    ///
    /// On failure the session (and its draft) stays intact so the user can
    /// fix the flagged line.
    pub fn finish(&self) -> Result<InvoiceDraft, ValidationError> {
        self.draft.validate()?;
        Ok(self.draft.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationSink;
    use artha_core::types::{Quantity, Unit};
    use artha_core::Severity;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test sink that records everything it receives.
    #[derive(Default)]
    struct RecordingSink {
        events: Rc<RefCell<Vec<(Severity, String)>>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, severity: Severity, message: &str) {
            self.events.borrow_mut().push((severity, message.to_string()));
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn product(id: ProductId, unit: Unit, price: i64, mrp: i64, stock: i64, min: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            code: format!("P-{:03}", id),
            category: "General".to_string(),
            unit,
            price: Money::from(price),
            mrp: Money::from(mrp),
            stock: stock.into(),
            min_stock_level: min.into(),
            active: true,
        }
    }

    fn editor_with(
        products: Vec<Product>,
    ) -> (InvoiceEditor, Rc<RefCell<Vec<(Severity, String)>>>) {
        let sink = RecordingSink::default();
        let events = Rc::clone(&sink.events);
        let editor = InvoiceEditor::create(date(), Catalog::new(products), Box::new(sink));
        (editor, events)
    }

    #[test]
    fn test_low_stock_selection_scenario() {
        // Pieces product at ₹10 (MRP ₹12), 5 in stock, minimum 10
        let (mut editor, events) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 5, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();
        editor.set_quantity(line, "3").unwrap();

        let totals = editor.totals();
        assert_eq!(totals.subtotal, Money::from(30));
        assert_eq!(totals.savings, Money::from(6));

        // 5 <= 10: a low-stock advisory fired, and only one
        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Severity::Info);
        assert!(events[0].1.contains("running low on stock"));
    }

    #[test]
    fn test_out_of_stock_advisory_never_blocks_selection() {
        let (mut editor, events) = editor_with(vec![product(1, Unit::Pieces, 10, 0, 0, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();

        assert!(editor.draft().item(line).unwrap().is_selected());
        assert_eq!(events.borrow()[0].0, Severity::Warning);

        // Still submittable once complete
        editor.set_quantity(line, "2").unwrap();
        assert!(editor.finish().is_ok());
    }

    #[test]
    fn test_rejected_quantity_keeps_prior_value() {
        let (mut editor, _) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 50, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();
        editor.set_quantity(line, "3").unwrap();

        // "0" violates the pieces rule; the edit must not be applied
        let err = editor.set_quantity(line, "0").unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(
            editor.draft().item(line).unwrap().quantity,
            Quantity::Value(dec!(3))
        );

        // Fractional keystrokes are rejected the same way
        assert!(editor.set_quantity(line, "2.5").is_err());
        assert_eq!(
            editor.draft().item(line).unwrap().quantity,
            Quantity::Value(dec!(3))
        );
    }

    #[test]
    fn test_fractional_unit_accepts_decimals() {
        let (mut editor, _) = editor_with(vec![product(1, Unit::Kilograms, 80, 95, 50, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();
        editor.set_quantity(line, "0.5").unwrap();

        assert_eq!(editor.totals().subtotal, Money::new(dec!(40)));
        assert!(editor.set_quantity(line, "0.0001").is_err());
    }

    #[test]
    fn test_search_state_survives_removal_of_other_lines() {
        let (mut editor, _) = editor_with(vec![
            product(1, Unit::Pieces, 10, 12, 50, 10),
            product(2, Unit::Pieces, 20, 0, 50, 10),
        ]);

        let first = editor.add_line();
        let second = editor.add_line();
        editor.set_search_term(second, "Product 2").unwrap();

        // Removing the first line must not shift search text off the second
        editor.remove_line(first).unwrap();
        assert_eq!(editor.search_term(second), "Product 2");
        assert_eq!(editor.search_results(second).unwrap()[0].id, 2);

        // The removed key is gone for good
        assert!(matches!(
            editor.set_search_term(first, "x"),
            Err(EditorError::UnknownLine(_))
        ));
    }

    #[test]
    fn test_selection_clears_search_and_deselect_allows_new_search() {
        let (mut editor, _) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 50, 10)]);

        let line = editor.add_line();
        editor.set_search_term(line, "prod").unwrap();
        editor.select_product(line, 1).unwrap();
        assert_eq!(editor.search_term(line), "");

        editor.deselect_product(line).unwrap();
        let item = editor.draft().item(line).unwrap();
        assert!(!item.is_selected());
        assert_eq!(item.unit_price, Money::zero());
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_unknown_product_selection_fails_cleanly() {
        let (mut editor, events) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 50, 10)]);
        let line = editor.add_line();

        assert!(matches!(
            editor.select_product(line, 99),
            Err(EditorError::UnknownProduct(99))
        ));
        assert!(!editor.draft().item(line).unwrap().is_selected());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_empty_catalog_degrades_to_no_results() {
        let (mut editor, _) = editor_with(Vec::new());
        let line = editor.add_line();
        editor.set_search_term(line, "anything").unwrap();
        assert!(editor.search_results(line).unwrap().is_empty());
    }

    #[test]
    fn test_finish_blocks_incomplete_lines_and_keeps_draft() {
        let (mut editor, _) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 50, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();
        // Quantity never entered → incomplete
        let err = editor.finish().unwrap_err();
        assert_eq!(err, ValidationError::IncompleteLineItem { field: "quantity" });

        // The draft survives the failed submit
        assert_eq!(editor.draft().item_count(), 1);

        editor.set_quantity(line, "2").unwrap();
        let draft = editor.finish().unwrap();
        assert_eq!(draft.subtotal(), Money::from(20));
    }

    #[test]
    fn test_header_edits_and_grand_total() {
        // Two lines with totals 30 and 20, tax 5, discount 10 → grand 45
        let (mut editor, _) = editor_with(vec![
            product(1, Unit::Pieces, 10, 0, 50, 10),
            product(2, Unit::Pieces, 20, 0, 50, 10),
        ]);

        let a = editor.add_line();
        editor.select_product(a, 1).unwrap();
        editor.set_quantity(a, "3").unwrap();

        let b = editor.add_line();
        editor.select_product(b, 2).unwrap();
        editor.set_quantity(b, "1").unwrap();

        editor.draft_mut().tax_amount = Money::from(5);
        editor.draft_mut().discount_amount = Money::from(10);
        editor.draft_mut().customer_name = "Asha".to_string();

        let totals = editor.totals();
        assert_eq!(totals.subtotal, Money::from(50));
        assert_eq!(totals.grand_total, Money::from(45));
    }

    #[test]
    fn test_edit_session_hydrates_and_keeps_unit_rules() {
        use artha_core::types::{Invoice, InvoiceItem, InvoiceStatus};

        let invoice = Invoice {
            id: 42,
            invoice_number: "INV-042".to_string(),
            status: InvoiceStatus::Sent,
            invoice_date: date(),
            due_date: None,
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: String::new(),
            customer_address: String::new(),
            tax_amount: Money::from(5),
            discount_amount: Money::zero(),
            total_amount: Money::from(45),
            notes: String::new(),
            items: vec![
                InvoiceItem {
                    product_id: Some(1),
                    quantity: dec!(0.5),
                    unit_price: Money::from(80),
                    description: "Basmati Rice".to_string(),
                },
                InvoiceItem {
                    product_id: Some(999), // vanished from the catalog
                    quantity: dec!(2),
                    unit_price: Money::from(4),
                    description: "Legacy".to_string(),
                },
            ],
        };

        let mut editor = InvoiceEditor::edit(
            &invoice,
            Catalog::new(vec![product(1, Unit::Kilograms, 80, 95, 50, 10)]),
            Box::new(RecordingSink::default()),
        );

        assert_eq!(editor.draft().status, InvoiceStatus::Sent);
        let keys: Vec<LineKey> = editor.draft().items().iter().map(|i| i.key).collect();

        // The kilogram line keeps its fractional rule
        editor.set_quantity(keys[0], "0.25").unwrap();
        assert!(editor.set_quantity(keys[0], "0.0001").is_err());

        // The vanished product validates loosely until re-selected
        editor.set_quantity(keys[1], "2.5").unwrap();
        assert_eq!(
            editor.draft().item(keys[1]).unwrap().quantity,
            Quantity::Value(dec!(2.5))
        );
    }

    #[test]
    fn test_manual_price_edit_after_selection() {
        let (mut editor, _) = editor_with(vec![product(1, Unit::Pieces, 10, 12, 50, 10)]);

        let line = editor.add_line();
        editor.select_product(line, 1).unwrap();
        editor.set_quantity(line, "2").unwrap();

        // Discount the line below catalog price: savings recompute live
        editor.set_unit_price(line, Money::from(9)).unwrap();
        assert_eq!(editor.totals().savings, Money::from(6));

        // Re-selecting overwrites the manual edit (auto-fill policy)
        editor.select_product(line, 1).unwrap();
        assert_eq!(editor.draft().item(line).unwrap().unit_price, Money::from(10));
    }
}
