use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Application frame: top navigation plus the routed page content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <header class="shell__header">
                <div class="shell__brand">
                    {icon("grain")}
                    <span>{"Gestión de Granos"}</span>
                </div>
                <nav class="shell__nav">
                    <A href="/">{"Resumen"}</A>
                    <A href="/fletes">{"Fletes"}</A>
                    <A href="/agenda">{"Agenda"}</A>
                </nav>
            </header>
            <main class="shell__content">{children()}</main>
        </div>
    }
}
