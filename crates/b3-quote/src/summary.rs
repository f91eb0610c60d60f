use serde::{Deserialize, Serialize};

use crate::amount::deserialize_amount;

// =============================================================================
// Inputs
// =============================================================================

/// Money figures of a quote, as returned by the quote detail query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub original_subtotal: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub discount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tax: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub shipping: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: f64,
    /// Tooltip shown next to prices that cannot be displayed.
    #[serde(default)]
    pub other_tips: Option<String>,
    #[serde(default)]
    pub need_hide_price: bool,
}

/// Store tax display settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxDisplay {
    /// Catalog prices were entered tax-inclusive.
    pub entered_inclusive_tax: bool,
    /// The shopper should see tax-inclusive prices.
    pub show_inclusive_tax_price: bool,
}

impl TaxDisplay {
    /// Convert a catalog price into the price the shopper sees.
    pub fn display_price(&self, price: f64, tax: f64) -> f64 {
        match (self.entered_inclusive_tax, self.show_inclusive_tax_price) {
            (true, false) => price - tax,
            (false, true) => price + tax,
            _ => price,
        }
    }
}

/// Status code of an open quote.
pub const STATUS_OPEN: u32 = 1;
/// Status code of a quote whose shipping is settled at quote checkout.
pub const STATUS_PENDING: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingMethod {
    pub id: String,
    pub description: String,
}

/// Quote detail fields and store flags that decide which rows appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteContext {
    pub status: u32,
    pub sales_rep_email: Option<String>,
    pub shipping_method: Option<ShippingMethod>,
    pub display_discount: bool,
    pub hide_quote_checkout: bool,
    pub allow_checkout: bool,
    /// Tax amount used to adjust subtotals for display.
    pub quote_tax: f64,
}

impl QuoteContext {
    fn has_sales_rep(&self) -> bool {
        self.sales_rep_email.as_deref().is_some_and(|e| !e.is_empty())
    }

    fn selected_shipping(&self) -> Option<&ShippingMethod> {
        self.shipping_method.as_ref().filter(|m| !m.id.is_empty())
    }
}

// =============================================================================
// Output
// =============================================================================

/// Symbolic row label, resolved to text by the caller's translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryLabel {
    OriginalSubtotal,
    DiscountAmount,
    QuotedSubtotal,
    Shipping,
    /// Shipping to be settled at quote checkout.
    ShippingQuoteCheckout,
    Tax,
    EstimatedTax,
    GrandTotal,
}

impl SummaryLabel {
    /// Translation key for this label.
    pub fn key(&self) -> &'static str {
        match self {
            Self::OriginalSubtotal => "quoteDetail.summary.originalSubtotal",
            Self::DiscountAmount => "quoteDetail.summary.discountAmount",
            Self::QuotedSubtotal => "quoteDetail.summary.quotedSubtotal",
            Self::Shipping => "quoteDetail.summary.shipping",
            Self::ShippingQuoteCheckout => "quoteDetail.summary.quoteCheckout",
            Self::Tax => "quoteDetail.summary.tax",
            Self::EstimatedTax => "quoteDetail.summary.estimatedTax",
            Self::GrandTotal => "quoteDetail.summary.grandTotal",
        }
    }
}

/// Value column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum SummaryValue {
    Amount(f64),
    /// "To be determined".
    Tbd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub label: SummaryLabel,
    /// Extra text after the label, e.g. the shipping method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub value: SummaryValue,
    /// Bold rows: quoted subtotal and grand total.
    pub emphasized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_tips: Option<String>,
    pub need_hide_price: bool,
}

impl SummaryRow {
    fn new(label: SummaryLabel, value: SummaryValue) -> Self {
        Self {
            label,
            detail: None,
            value,
            emphasized: false,
            other_tips: None,
            need_hide_price: false,
        }
    }

    fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    fn tips(mut self, summary: &QuoteSummary) -> Self {
        self.other_tips = summary.other_tips.clone();
        self.need_hide_price = summary.need_hide_price;
        self
    }
}

/// The rendered summary card, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryCard {
    pub rows: Vec<SummaryRow>,
}

impl SummaryCard {
    pub fn row(&self, label: SummaryLabel) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    pub fn labels(&self) -> Vec<SummaryLabel> {
        self.rows.iter().map(|row| row.label).collect()
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Subtotal after discount. The discount only applies when the quote can
/// be checked out.
pub fn quoted_subtotal(summary: &QuoteSummary, context: &QuoteContext) -> f64 {
    if context.allow_checkout {
        summary.original_subtotal - summary.discount
    } else {
        summary.original_subtotal
    }
}

/// Grand total: the backend total when the quote can be checked out,
/// otherwise the quoted subtotal.
pub fn grand_total(summary: &QuoteSummary, context: &QuoteContext) -> f64 {
    if context.allow_checkout {
        summary.total_amount
    } else {
        quoted_subtotal(summary, context)
    }
}

/// Shipping and tax rows, or nothing when they do not apply yet.
fn shipping_and_tax(summary: &QuoteSummary, context: &QuoteContext) -> Option<[SummaryRow; 2]> {
    use SummaryValue::{Amount, Tbd};

    if let Some(method) = context.selected_shipping() {
        return Some([
            SummaryRow::new(SummaryLabel::Shipping, Amount(summary.shipping))
                .detail(method.description.clone()),
            SummaryRow::new(SummaryLabel::Tax, Amount(summary.tax)),
        ]);
    }

    let has_sales_rep = context.has_sales_rep();
    if !has_sales_rep && context.status == STATUS_OPEN {
        return Some([
            SummaryRow::new(SummaryLabel::Shipping, Tbd),
            SummaryRow::new(SummaryLabel::EstimatedTax, Amount(summary.tax)),
        ]);
    }

    if has_sales_rep && matches!(context.status, STATUS_OPEN | STATUS_PENDING) {
        return Some([
            SummaryRow::new(SummaryLabel::ShippingQuoteCheckout, Tbd),
            SummaryRow::new(SummaryLabel::Tax, Tbd),
        ]);
    }

    None
}

/// Build the quote detail summary card.
pub fn build_summary(
    summary: &QuoteSummary,
    context: &QuoteContext,
    tax_display: TaxDisplay,
) -> SummaryCard {
    let mut rows = Vec::with_capacity(6);

    if context.display_discount {
        let price = tax_display.display_price(summary.original_subtotal, context.quote_tax);
        rows.push(
            SummaryRow::new(SummaryLabel::OriginalSubtotal, SummaryValue::Amount(price))
                .tips(summary),
        );
    }

    let hide_discount = !context.has_sales_rep() && context.status == STATUS_OPEN;
    if context.display_discount && !hide_discount {
        let discount = if summary.discount > 0.0 {
            -summary.discount
        } else {
            summary.discount
        };
        rows.push(
            SummaryRow::new(SummaryLabel::DiscountAmount, SummaryValue::Amount(discount))
                .tips(summary),
        );
    }

    let subtotal = tax_display.display_price(quoted_subtotal(summary, context), context.quote_tax);
    rows.push(
        SummaryRow::new(SummaryLabel::QuotedSubtotal, SummaryValue::Amount(subtotal)).emphasized(),
    );

    if let Some(shipping_and_tax) = shipping_and_tax(summary, context) {
        rows.extend(shipping_and_tax);
    }

    rows.push(
        SummaryRow::new(
            SummaryLabel::GrandTotal,
            SummaryValue::Amount(grand_total(summary, context)),
        )
        .emphasized(),
    );

    // The discount amount stays visible when checkout is hidden.
    if context.hide_quote_checkout {
        for row in rows
            .iter_mut()
            .filter(|row| row.label != SummaryLabel::DiscountAmount)
        {
            row.value = SummaryValue::Tbd;
        }
    }

    SummaryCard { rows }
}
