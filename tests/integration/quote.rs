use b3_storefront::quote::{
    build_summary, QuoteContext, QuoteSummary, ShippingMethod, SummaryLabel, SummaryValue,
    TaxDisplay, STATUS_OPEN,
};
use serde_json::json;

fn summary() -> QuoteSummary {
    serde_json::from_value(json!({
        "originalSubtotal": "250.00",
        "discount": "25",
        "tax": 18.5,
        "shipping": "12",
        "totalAmount": "255.50",
        "otherTips": "Contact your sales rep",
        "needHidePrice": false
    }))
    .unwrap()
}

#[test]
fn card_for_quote_with_shipping_method() {
    let context = QuoteContext {
        status: STATUS_OPEN,
        sales_rep_email: Some("rep@example.com".to_string()),
        shipping_method: Some(ShippingMethod {
            id: "ship-1".to_string(),
            description: "Flat rate".to_string(),
        }),
        display_discount: true,
        allow_checkout: true,
        ..QuoteContext::default()
    };

    let card = build_summary(&summary(), &context, TaxDisplay::default());
    let rendered = serde_json::to_value(&card).unwrap();

    assert_eq!(
        rendered["rows"][1],
        json!({
            "label": "discountAmount",
            "value": {"kind": "amount", "amount": -25.0},
            "emphasized": false,
            "otherTips": "Contact your sales rep",
            "needHidePrice": false
        })
    );
    assert_eq!(
        card.row(SummaryLabel::QuotedSubtotal).unwrap().value,
        SummaryValue::Amount(225.0)
    );
    assert_eq!(
        card.row(SummaryLabel::Shipping).unwrap().detail.as_deref(),
        Some("Flat rate")
    );
    assert_eq!(
        card.row(SummaryLabel::GrandTotal).unwrap().value,
        SummaryValue::Amount(255.5)
    );
}

#[test]
fn card_for_draft_quote_without_checkout() {
    let context = QuoteContext {
        status: STATUS_OPEN,
        ..QuoteContext::default()
    };

    let card = build_summary(&summary(), &context, TaxDisplay::default());

    assert_eq!(
        card.labels(),
        vec![
            SummaryLabel::QuotedSubtotal,
            SummaryLabel::Shipping,
            SummaryLabel::EstimatedTax,
            SummaryLabel::GrandTotal,
        ]
    );
    assert_eq!(
        card.row(SummaryLabel::GrandTotal).unwrap().value,
        SummaryValue::Amount(250.0)
    );
}
