//! # b3-storefront-quote
//!
//! View-model for the quote detail summary card.
//!
//! Given the quote's money figures ([`QuoteSummary`]), the quote detail
//! fields that drive visibility ([`QuoteContext`]) and the store's tax
//! display settings ([`TaxDisplay`]), [`build_summary`] decides which rows
//! the card shows and what each row's value is. Labels come back as
//! symbolic [`SummaryLabel`] keys; translation and currency formatting are
//! left to the caller.
//!
//! ## Design Principles
//!
//! - **Pure data**: No I/O, no async
//! - **Serde only**: Inputs deserialize from the backend's JSON, the card
//!   serializes for the UI layer
//!
//! ## Example
//!
//! ```rust
//! use b3_storefront_quote::{build_summary, QuoteContext, QuoteSummary, SummaryLabel, TaxDisplay};
//!
//! let summary = QuoteSummary {
//!     original_subtotal: 100.0,
//!     discount: 10.0,
//!     total_amount: 95.0,
//!     ..QuoteSummary::default()
//! };
//! let context = QuoteContext {
//!     allow_checkout: true,
//!     ..QuoteContext::default()
//! };
//!
//! let card = build_summary(&summary, &context, TaxDisplay::default());
//! assert_eq!(
//!     card.labels(),
//!     vec![SummaryLabel::QuotedSubtotal, SummaryLabel::GrandTotal]
//! );
//! ```

pub mod amount;
mod summary;

pub use summary::{
    build_summary, grand_total, quoted_subtotal, QuoteContext, QuoteSummary, ShippingMethod,
    SummaryCard, SummaryLabel, SummaryRow, SummaryValue, TaxDisplay, STATUS_OPEN, STATUS_PENDING,
};
