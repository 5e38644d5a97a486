use crate::shared::form::{
    format_bin_location, recall_hold_row_attrs, Attributes, ControlKind, FieldConfig, FieldMap,
    RowAttributes, RowSchema,
};
use once_cell::sync::Lazy;
use serde_json::Value;

fn label(key: &'static str, default_message: &'static str, flex: &'static str) -> FieldConfig<()> {
    FieldConfig::new(ControlKind::Label, key, default_message).flex(flex)
}

fn with_tooltip() -> Attributes {
    Attributes {
        show_value_tooltip: Some(true),
        ..Default::default()
    }
}

fn bin_location_attrs(_: &()) -> Attributes {
    Attributes {
        format_value: Some(format_bin_location),
        ..Default::default()
    }
}

fn picklist_row_attrs(row: &Value, _: &()) -> RowAttributes {
    recall_hold_row_attrs(row)
}

/// Read-only table of the items being returned
pub static PICKLIST_FIELDS: Lazy<FieldMap<()>> = Lazy::new(|| {
    let columns = vec![
        (
            "product.productCode",
            label("react.stockMovement.productCode.label", "Code", "0.5"),
        ),
        (
            "product.name",
            label("react.stockMovement.product.label", "Product", "2")
                .header_align("left")
                .with_attributes(Attributes {
                    show_value_tooltip: Some(true),
                    class_name: Some("text-left ml-1".to_string()),
                    ..Default::default()
                }),
        ),
        (
            "originZone",
            label("react.outboundReturn.zone.label", "Zone", "0.5").with_attributes(with_tooltip()),
        ),
        (
            "originBinLocation.name",
            label("react.outboundReturn.bin.label", "Bin Location", "1")
                .with_attributes(with_tooltip())
                .with_dynamic(bin_location_attrs),
        ),
        ("lotNumber", label("react.outboundReturn.lot.label", "Lot", "1")),
        (
            "expirationDate",
            label("react.outboundReturn.expiry.label", "Expiry", "1"),
        ),
        (
            "quantity",
            label("react.outboundReturn.quantity.label", "Qty to Return", "1"),
        ),
    ];

    vec![(
        "picklistItems",
        FieldConfig::new(ControlKind::Array, "picklistItems", "").with_rows(RowSchema {
            columns,
            row_attrs: Some(picklist_row_attrs),
        }),
    )]
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bin_column_formats_empty_as_default() {
        let (_, picklist) = &PICKLIST_FIELDS[0];
        let rows = picklist.rows.as_ref().unwrap();
        let (_, bin) = rows
            .columns
            .iter()
            .find(|(path, _)| *path == "originBinLocation.name")
            .unwrap();
        let format = bin.resolve(&()).format_value.unwrap();
        assert_eq!(format(""), "DEFAULT");
        assert_eq!(bin.flex_width, Some("1"));
    }

    #[test]
    fn test_rows_highlight_recalled_items() {
        let (_, picklist) = &PICKLIST_FIELDS[0];
        let rows = picklist.rows.as_ref().unwrap();
        let attrs = rows.resolve_row(&json!({"recalled": true, "onHold": true}), &());
        assert_eq!(attrs.class_name, "recalled-and-on-hold");
    }
}
