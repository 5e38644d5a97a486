use crate::dashboards::IndicatorBoard;
use crate::domain::a002_stock_transfer::ui::send::SendOutboundReturn;
use crate::layout::Shell;
use crate::usecases::u501_verify_request::StockMovementVerifyRequest;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::{ParamSegment, StaticSegment};

fn route_param(name: &'static str) -> Option<String> {
    use_params_map()
        .read_untracked()
        .get(name)
        .filter(|value| !value.is_empty())
}

#[component]
fn VerifyRequestPage() -> impl IntoView {
    view! { <StockMovementVerifyRequest stock_movement_id=route_param("stockMovementId") /> }
}

#[component]
fn SendOutboundReturnPage() -> impl IntoView {
    match route_param("outboundReturnId") {
        Some(id) => view! { <SendOutboundReturn outbound_return_id=id /> }.into_any(),
        None => view! { <div class="error">"Outbound return id is missing"</div> }.into_any(),
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! { <IndicatorBoard config_id=route_param("configId") /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=(StaticSegment("stockMovement"), StaticSegment("verifyRequest"))
                        view=VerifyRequestPage
                    />
                    <Route
                        path=(
                            StaticSegment("stockMovement"),
                            StaticSegment("verifyRequest"),
                            ParamSegment("stockMovementId"),
                        )
                        view=VerifyRequestPage
                    />
                    <Route
                        path=(
                            StaticSegment("stockTransfer"),
                            StaticSegment("send"),
                            ParamSegment("outboundReturnId"),
                        )
                        view=SendOutboundReturnPage
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage />
                    <Route
                        path=(StaticSegment("dashboard"), ParamSegment("configId"))
                        view=DashboardPage
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
