//! Field maps and rules of the wizard steps.

use super::state::WizardPage;
use crate::domain::common::shipment::{normalize_shipment, validate_shipment};
use crate::shared::form::path::{text_at, value_at};
use crate::shared::form::{
    recall_hold_row_attrs, Attributes, ControlKind, ErrorKind, FieldConfig, FieldErrors, FieldMap,
    RowAttributes, RowSchema,
};
use crate::shared::page::PageRules;
use once_cell::sync::Lazy;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepContext {
    pub read_only: bool,
}

fn editable(ctx: &StepContext) -> Attributes {
    Attributes {
        disabled: Some(ctx.read_only),
        ..Default::default()
    }
}

fn line_row_attrs(row: &Value, _: &StepContext) -> RowAttributes {
    recall_hold_row_attrs(row)
}

fn label(key: &'static str, default_message: &'static str) -> FieldConfig<StepContext> {
    FieldConfig::new(ControlKind::Label, key, default_message)
}

fn product_columns() -> FieldMap<StepContext> {
    vec![
        (
            "product.productCode",
            label("react.stockMovement.productCode.label", "Code").flex("0.5"),
        ),
        (
            "product.name",
            label("react.stockMovement.product.label", "Product")
                .flex("2")
                .header_align("left")
                .with_attributes(Attributes {
                    show_value_tooltip: Some(true),
                    class_name: Some("text-left ml-1".to_string()),
                    ..Default::default()
                }),
        ),
    ]
}

fn line_items(columns: FieldMap<StepContext>) -> FieldConfig<StepContext> {
    FieldConfig::new(ControlKind::Array, "lineItems", "").with_rows(RowSchema {
        columns,
        row_attrs: Some(line_row_attrs),
    })
}

pub static EDIT_FIELDS: Lazy<FieldMap<StepContext>> = Lazy::new(|| {
    let mut columns = product_columns();
    columns.push((
        "quantityRequested",
        FieldConfig::new(
            ControlKind::Text,
            "react.stockMovement.quantityRequested.label",
            "Qty requested",
        )
        .flex("1")
        .with_dynamic(editable),
    ));

    vec![
        (
            "description",
            FieldConfig::new(ControlKind::Text, "react.stockMovement.description.label", "Description")
                .with_dynamic(editable),
        ),
        ("origin.label", label("react.stockMovement.origin.label", "Origin")),
        (
            "destination.label",
            label("react.stockMovement.destination.label", "Destination"),
        ),
        (
            "requestedBy.label",
            label("react.stockMovement.requestedBy.label", "Requested by"),
        ),
        (
            "dateRequested",
            FieldConfig::new(
                ControlKind::Date,
                "react.stockMovement.dateRequested.label",
                "Date requested",
            )
            .with_attributes(Attributes {
                date_format: Some("MM/DD/YYYY"),
                required: Some(true),
                auto_complete: Some("off"),
                ..Default::default()
            })
            .with_dynamic(editable),
        ),
        ("lineItems", line_items(columns)),
    ]
});

pub static PICK_FIELDS: Lazy<FieldMap<StepContext>> = Lazy::new(|| {
    let mut columns = product_columns();
    columns.extend([
        ("lotNumber", label("react.stockMovement.lot.label", "Lot").flex("1")),
        (
            "expirationDate",
            label("react.stockMovement.expiry.label", "Expiry").flex("1"),
        ),
        (
            "quantityRequested",
            label("react.stockMovement.quantityPicked.label", "Qty picked").flex("1"),
        ),
    ]);
    vec![("lineItems", line_items(columns))]
});

pub static PACK_FIELDS: Lazy<FieldMap<StepContext>> = Lazy::new(|| {
    let mut columns = product_columns();
    columns.extend([
        ("lotNumber", label("react.stockMovement.lot.label", "Lot").flex("1")),
        (
            "quantityRequested",
            label("react.stockMovement.quantityShipped.label", "Qty shipped").flex("1"),
        ),
        (
            "palletName",
            FieldConfig::new(ControlKind::Text, "react.stockMovement.packLevel1.label", "Pack level 1")
                .flex("1")
                .with_dynamic(editable),
        ),
        (
            "boxName",
            FieldConfig::new(ControlKind::Text, "react.stockMovement.packLevel2.label", "Pack level 2")
                .flex("1")
                .with_dynamic(editable),
        ),
    ]);
    vec![("lineItems", line_items(columns))]
});

/// Form values a step starts from. The Send step's select holds the
/// shipment type id rather than the `{id, name}` object of the record.
pub fn step_values(page: WizardPage, values: &Value) -> Value {
    let mut out = values.clone();
    if page == WizardPage::Send {
        if let (Some(Value::Object(_)), Value::Object(map)) =
            (value_at(values, "shipmentType"), &mut out)
        {
            let id = text_at(values, "shipmentType.id");
            let id = if id.is_empty() { Value::Null } else { Value::String(id) };
            map.insert("shipmentType".to_string(), id);
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct StepRules {
    pub page: WizardPage,
    /// Nothing on the page is editable, so nothing can be invalid
    pub show_only: bool,
    /// Earliest allowed shipment date, `MM/DD/YYYY`
    pub minimum_date: String,
}

impl PageRules for StepRules {
    fn validate(&self, values: &Value) -> FieldErrors {
        if self.show_only {
            return FieldErrors::new();
        }
        match self.page {
            WizardPage::Edit => {
                let mut errors = FieldErrors::new();
                if text_at(values, "dateRequested").trim().is_empty() {
                    errors.insert("dateRequested".to_string(), ErrorKind::Required);
                }
                errors
            }
            WizardPage::Pick | WizardPage::Pack => FieldErrors::new(),
            WizardPage::Send => validate_shipment(values, &self.minimum_date),
        }
    }

    fn normalize_for_save(&self, values: &Value) -> Value {
        match self.page {
            WizardPage::Send => normalize_shipment(values),
            _ => values.clone(),
        }
    }
}
