use crate::dashboards::resumen::ui::ResumenCharts;
use crate::domain::agenda::ui::list::AgendaList;
use crate::domain::cupos::ui::contratos_list::ContratosList;
use crate::domain::cupos::ui::cupos_list::CuposList;
use crate::domain::fletes::ui::list::FletesList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Landing page: charts plus the two tables the quota workflow spans.
#[component]
fn ResumenPage() -> impl IntoView {
    view! {
        <ResumenCharts />
        <ContratosList />
        <CuposList />
    }
}

#[component]
fn FletesPage() -> impl IntoView {
    view! { <FletesList /> }
}

#[component]
fn AgendaPage() -> impl IntoView {
    view! { <AgendaList /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty">{"Página no encontrada"}</p> }>
                    <Route path=path!("/") view=ResumenPage />
                    <Route path=path!("/fletes") view=FletesPage />
                    <Route path=path!("/agenda") view=AgendaPage />
                </Routes>
            </Shell>
        </Router>
    }
}
