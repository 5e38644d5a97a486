use crate::dashboards::d400_indicator_board::board::Card;
use contracts::dashboards::d400_indicator_board::NumberCardData;
use leptos::prelude::*;
use serde_json::Value;

/// Headline of a numeric card in its number type
pub fn format_card_number(data: &NumberCardData) -> String {
    let number = match &data.number {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    match data.number_type.as_deref() {
        Some("percentage") => format!("{number}%"),
        Some("dollars") => format!("${number}"),
        _ => number,
    }
}

#[component]
fn CardInfo(info: Option<String>) -> impl IntoView {
    info.map(|text| view! { <span class="card-info" title=text>"i"</span> })
}

#[component]
pub fn NumberCard(card: Card, data: Signal<Option<NumberCardData>>) -> impl IntoView {
    let title = card.title.clone();
    let link = card.link.clone().unwrap_or_default();

    view! {
        <div class="number-card">
            <div class="number-card-header">
                <span class="drag-handle">"⋮⋮"</span>
                <a class="number-card-title" href=link>{title}</a>
                <CardInfo info=card.info.clone() />
            </div>
            {move || match data.get() {
                Some(data) => view! {
                    <div class="number-card-body">
                        <span class="number-card-number">{format_card_number(&data)}</span>
                        <span class="number-card-subtitle">{data.subtitle.unwrap_or_default()}</span>
                    </div>
                }
                .into_any(),
                None => view! { <div class="number-card-body loading-numbers">"..."</div> }.into_any(),
            }}
        </div>
    }
}

/// Title and info only; the chart itself is drawn elsewhere
#[component]
pub fn GraphCard(card: Card) -> impl IntoView {
    let size_class = format!("graph-card graph-card-{}", card.widget_type);

    view! {
        <div class=size_class>
            <div class="graph-card-header">
                <span class="drag-handle">"⋮⋮"</span>
                <span class="graph-card-title">{card.title.clone()}</span>
                <CardInfo info=card.info.clone() />
            </div>
        </div>
    }
}
