//! Declarative field configuration.
//!
//! A page describes its form as a [`FieldMap`]: field path → [`FieldConfig`].
//! Static attributes are fixed at declaration; `dynamic_attrs` is evaluated
//! against a page context `C` on every render and wins over the static ones.

use super::path::bool_at;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Date,
    Select,
    Label,
    /// Repeating rows rendered as a table; columns come from [`RowSchema`]
    Array,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Display transform for read-only cells
pub type ValueFormatter = fn(&str) -> String;

#[derive(Clone, Default)]
pub struct Attributes {
    pub disabled: Option<bool>,
    pub required: Option<bool>,
    pub date_format: Option<&'static str>,
    pub auto_complete: Option<&'static str>,
    pub show_value_tooltip: Option<bool>,
    pub class_name: Option<String>,
    pub options: Option<Vec<SelectOption>>,
    pub format_value: Option<ValueFormatter>,
}

impl Attributes {
    /// Fields set in `overlay` replace ours
    pub fn merged_with(&self, overlay: Attributes) -> Attributes {
        Attributes {
            disabled: overlay.disabled.or(self.disabled),
            required: overlay.required.or(self.required),
            date_format: overlay.date_format.or(self.date_format),
            auto_complete: overlay.auto_complete.or(self.auto_complete),
            show_value_tooltip: overlay.show_value_tooltip.or(self.show_value_tooltip),
            class_name: overlay.class_name.or_else(|| self.class_name.clone()),
            options: overlay.options.or_else(|| self.options.clone()),
            format_value: overlay.format_value.or(self.format_value),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAttributes {
    pub class_name: String,
    pub tooltip: String,
}

pub struct RowSchema<C> {
    pub columns: FieldMap<C>,
    pub row_attrs: Option<fn(&Value, &C) -> RowAttributes>,
}

pub struct FieldConfig<C> {
    pub kind: ControlKind,
    pub label: &'static str,
    pub default_message: &'static str,
    pub attributes: Attributes,
    pub dynamic_attrs: Option<fn(&C) -> Attributes>,
    /// Column width inside an array table (CSS `flex` value)
    pub flex_width: Option<&'static str>,
    pub header_align: Option<&'static str>,
    pub rows: Option<RowSchema<C>>,
}

pub type FieldMap<C> = Vec<(&'static str, FieldConfig<C>)>;

impl<C> FieldConfig<C> {
    pub fn new(kind: ControlKind, label: &'static str, default_message: &'static str) -> Self {
        Self {
            kind,
            label,
            default_message,
            attributes: Attributes::default(),
            dynamic_attrs: None,
            flex_width: None,
            header_align: None,
            rows: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_dynamic(mut self, dynamic: fn(&C) -> Attributes) -> Self {
        self.dynamic_attrs = Some(dynamic);
        self
    }

    pub fn flex(mut self, width: &'static str) -> Self {
        self.flex_width = Some(width);
        self
    }

    pub fn header_align(mut self, align: &'static str) -> Self {
        self.header_align = Some(align);
        self
    }

    pub fn with_rows(mut self, rows: RowSchema<C>) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Static attributes overlaid with the dynamic ones for this context
    pub fn resolve(&self, ctx: &C) -> Attributes {
        match self.dynamic_attrs {
            Some(dynamic) => self.attributes.merged_with(dynamic(ctx)),
            None => self.attributes.clone(),
        }
    }

    /// Message shown in place of the translated label
    pub fn label_text(&self) -> &'static str {
        if self.default_message.is_empty() {
            self.label
        } else {
            self.default_message
        }
    }
}

impl<C> RowSchema<C> {
    pub fn resolve_row(&self, row: &Value, ctx: &C) -> RowAttributes {
        self.row_attrs
            .map(|attrs| attrs(row, ctx))
            .unwrap_or_default()
    }
}

/// Highlighting for a line flagged `recalled` and/or `onHold`; the
/// combined flag takes precedence over either alone
pub fn recall_hold_row_attrs(row: &Value) -> RowAttributes {
    let recalled = bool_at(row, "recalled");
    let on_hold = bool_at(row, "onHold");
    let (class_name, tooltip) = match (recalled, on_hold) {
        (true, true) => ("recalled-and-on-hold", "Recalled and on hold"),
        (true, false) => ("recalled", "Recalled"),
        (false, true) => ("on-hold", "On hold"),
        (false, false) => return RowAttributes::default(),
    };
    RowAttributes {
        class_name: class_name.to_string(),
        tooltip: tooltip.to_string(),
    }
}

/// Empty bin location is the location's default bin
pub fn format_bin_location(value: &str) -> String {
    if value.trim().is_empty() {
        "DEFAULT".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Ctx {
        issued: bool,
    }

    fn disabled_when_issued(ctx: &Ctx) -> Attributes {
        Attributes {
            disabled: Some(ctx.issued),
            ..Default::default()
        }
    }

    #[test]
    fn test_dynamic_attributes_override_static() {
        let field = FieldConfig::<Ctx>::new(ControlKind::Text, "trackingNumber", "Tracking #")
            .with_attributes(Attributes {
                disabled: Some(false),
                required: Some(true),
                ..Default::default()
            })
            .with_dynamic(disabled_when_issued);

        let attrs = field.resolve(&Ctx { issued: true });
        assert!(attrs.is_disabled());
        assert!(attrs.is_required());
        assert!(!field.resolve(&Ctx { issued: false }).is_disabled());
    }

    #[test]
    fn test_row_highlight_precedence() {
        let both = recall_hold_row_attrs(&json!({"recalled": true, "onHold": true}));
        assert_eq!(both.class_name, "recalled-and-on-hold");
        assert_eq!(both.tooltip, "Recalled and on hold");

        assert_eq!(
            recall_hold_row_attrs(&json!({"recalled": true})).class_name,
            "recalled"
        );
        assert_eq!(
            recall_hold_row_attrs(&json!({"onHold": true})).tooltip,
            "On hold"
        );
        assert_eq!(
            recall_hold_row_attrs(&json!({"recalled": false})),
            RowAttributes::default()
        );
    }

    #[test]
    fn test_bin_location_defaults() {
        assert_eq!(format_bin_location(""), "DEFAULT");
        assert_eq!(format_bin_location("A-01"), "A-01");
    }

    #[test]
    fn test_label_falls_back_to_key() {
        let field = FieldConfig::<Ctx>::new(ControlKind::Label, "react.origin", "");
        assert_eq!(field.label_text(), "react.origin");
    }
}
