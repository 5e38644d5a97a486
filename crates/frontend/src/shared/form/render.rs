//! Leptos controls for a [`FieldMap`].
//!
//! Controls read and write the shared form values by dotted path, so a page
//! only owns one `RwSignal<Value>`. Field maps live in statics and are never
//! mutated; the context is cloned into the controls that need it.

use super::config::{Attributes, ControlKind, FieldConfig, FieldMap, RowSchema, SelectOption};
use super::errors::FieldErrors;
use super::path::{set_value_at, text_at, value_at};
use crate::shared::date_utils::{form_date_to_iso, iso_to_form_date};
use leptos::prelude::*;
use serde_json::Value;

/// Signals a rendered form is bound to
#[derive(Clone, Copy)]
pub struct FormBinding {
    pub values: RwSignal<Value>,
    pub errors: Signal<FieldErrors>,
}

/// All fields of a map, in declaration order
pub fn render_fields<C>(fields: &'static FieldMap<C>, ctx: C, form: FormBinding) -> AnyView
where
    C: Clone + Send + Sync + 'static,
{
    fields
        .iter()
        .map(|(path, config)| render_form_field(config, path, ctx.clone(), form))
        .collect_view()
        .into_any()
}

pub fn render_form_field<C>(
    config: &'static FieldConfig<C>,
    path: &'static str,
    ctx: C,
    form: FormBinding,
) -> AnyView
where
    C: Clone + Send + Sync + 'static,
{
    let attrs = config.resolve(&ctx);

    if config.kind == ControlKind::Array {
        return match &config.rows {
            Some(schema) => array_control(schema, path, ctx, form),
            None => {
                log::warn!("array field `{path}` has no row schema");
                ().into_any()
            }
        };
    }

    let group_class = if attrs.is_required() {
        "form-group required"
    } else {
        "form-group"
    };
    let errors = form.errors;
    let control = control_for(config.kind, path.to_string(), &attrs, form.values);

    view! {
        <div class=group_class>
            <label class="col-form-label" data-label-key=config.label>
                {config.label_text()}
            </label>
            {control}
            {move || {
                errors.with(|e| {
                    e.get(path).map(|kind| {
                        view! {
                            <div class="invalid-feedback" data-message-key=kind.message_key()>
                                {kind.default_message()}
                            </div>
                        }
                    })
                })
            }}
        </div>
    }
    .into_any()
}

fn control_for(kind: ControlKind, path: String, attrs: &Attributes, values: RwSignal<Value>) -> AnyView {
    match kind {
        ControlKind::Text => text_control(path, attrs, values),
        ControlKind::Date => date_control(path, attrs, values),
        ControlKind::Select => select_control(path, attrs, values),
        ControlKind::Label => label_control(path, attrs, values),
        ControlKind::Array => ().into_any(),
    }
}

fn text_control(path: String, attrs: &Attributes, values: RwSignal<Value>) -> AnyView {
    let read_path = path.clone();
    view! {
        <input
            type="text"
            class="form-control form-control-xs"
            name=path.clone()
            disabled=attrs.is_disabled()
            required=attrs.is_required()
            autocomplete=attrs.auto_complete.unwrap_or("on")
            prop:value=move || values.with(|v| text_at(v, &read_path))
            on:input=move |ev| {
                let text = event_target_value(&ev);
                values.update(|v| set_value_at(v, &path, Value::String(text)));
            }
        />
    }
    .into_any()
}

fn date_control(path: String, attrs: &Attributes, values: RwSignal<Value>) -> AnyView {
    let read_path = path.clone();
    view! {
        <input
            type="date"
            class="form-control form-control-xs"
            name=path.clone()
            disabled=attrs.is_disabled()
            required=attrs.is_required()
            autocomplete=attrs.auto_complete.unwrap_or("off")
            data-date-format=attrs.date_format.unwrap_or("MM/DD/YYYY")
            prop:value=move || values.with(|v| form_date_to_iso(&text_at(v, &read_path)))
            on:change=move |ev| {
                let picked = iso_to_form_date(&event_target_value(&ev));
                values.update(|v| set_value_at(v, &path, Value::String(picked)));
            }
        />
    }
    .into_any()
}

fn select_control(path: String, attrs: &Attributes, values: RwSignal<Value>) -> AnyView {
    let options: Vec<SelectOption> = attrs.options.clone().unwrap_or_default();
    let show_tooltip = attrs.show_value_tooltip.unwrap_or(false);
    let tooltip = {
        let read_path = path.clone();
        let options = options.clone();
        move || {
            if !show_tooltip {
                return None;
            }
            let selected = values.with(|v| text_at(v, &read_path));
            options
                .iter()
                .find(|o| o.value == selected)
                .map(|o| o.label.clone())
        }
    };

    let option_views = options
        .into_iter()
        .map(|option| {
            let read_path = path.clone();
            let value = option.value.clone();
            view! {
                <option
                    value=option.value
                    prop:selected=move || values.with(|v| text_at(v, &read_path) == value)
                >
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <select
            class="form-control form-control-xs"
            name=path.clone()
            disabled=attrs.is_disabled()
            required=attrs.is_required()
            title=tooltip
            on:change=move |ev| {
                let picked = event_target_value(&ev);
                let value = if picked.is_empty() { Value::Null } else { Value::String(picked) };
                values.update(|v| set_value_at(v, &path, value));
            }
        >
            <option value="">""</option>
            {option_views}
        </select>
    }
    .into_any()
}

fn label_control(path: String, attrs: &Attributes, values: RwSignal<Value>) -> AnyView {
    let format = attrs.format_value;
    let show_tooltip = attrs.show_value_tooltip.unwrap_or(false);
    let class = format!(
        "form-control-plaintext {}",
        attrs.class_name.as_deref().unwrap_or_default()
    );
    let display = move || {
        let raw = values.with(|v| text_at(v, &path));
        match format {
            Some(f) => f(&raw),
            None => raw,
        }
    };
    let title = {
        let display = display.clone();
        move || show_tooltip.then(|| display())
    };

    view! {
        <div class=class title=title>
            {display}
        </div>
    }
    .into_any()
}

fn array_control<C>(
    schema: &'static RowSchema<C>,
    path: &'static str,
    ctx: C,
    form: FormBinding,
) -> AnyView
where
    C: Clone + Send + Sync + 'static,
{
    let values = form.values;
    let row_count = Memo::new(move |_| {
        values.with(|v| value_at(v, path).and_then(Value::as_array).map_or(0, Vec::len))
    });

    let header = schema
        .columns
        .iter()
        .map(|(_, column)| {
            let style = format!(
                "flex: {}; text-align: {};",
                column.flex_width.unwrap_or("1"),
                column.header_align.unwrap_or("center")
            );
            view! {
                <div class="table-cell table-header-cell" style=style data-label-key=column.label>
                    {column.label_text()}
                </div>
            }
        })
        .collect_view();

    let body = move || {
        (0..row_count.get())
            .map(|index| render_row(schema, path, index, ctx.clone(), values))
            .collect_view()
    };

    view! {
        <div class="array-field">
            <div class="table-row table-header">{header}</div>
            <div class="table-body">{body}</div>
        </div>
    }
    .into_any()
}

fn render_row<C>(
    schema: &'static RowSchema<C>,
    path: &'static str,
    index: usize,
    ctx: C,
    values: RwSignal<Value>,
) -> AnyView
where
    C: Clone + Send + Sync + 'static,
{
    let row_path = format!("{path}.{index}");
    let row_attrs = {
        let ctx = ctx.clone();
        let row_path = row_path.clone();
        Memo::new(move |_| {
            values.with(|v| {
                value_at(v, &row_path)
                    .map(|row| schema.resolve_row(row, &ctx))
                    .unwrap_or_default()
            })
        })
    };

    let cells = schema
        .columns
        .iter()
        .map(|(column_path, column)| {
            let attrs = column.resolve(&ctx);
            let style = format!("flex: {};", column.flex_width.unwrap_or("1"));
            let cell_path = format!("{row_path}.{column_path}");
            let control = control_for(column.kind, cell_path, &attrs, values);
            view! { <div class="table-cell" style=style>{control}</div> }
        })
        .collect_view();

    view! {
        <div
            class=move || format!("table-row {}", row_attrs.get().class_name)
            title=move || row_attrs.get().tooltip
        >
            {cells}
        </div>
    }
    .into_any()
}
