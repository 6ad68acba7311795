use crate::domain::cupos::api;
use crate::domain::cupos::ui::solicitud_modal::{SolicitudContext, SolicitudCupoModal};
use crate::shared::icons::icon;
use contracts::domain::cupos::ContratoPendienteDto;
use leptos::prelude::*;

/// Contracts with undelivered kilos. Each row carries a "Pedir cupos"
/// button that captures the row's identifiers into a [`SolicitudContext`]
/// and opens the request modal with them.
#[component]
#[allow(non_snake_case)]
pub fn ContratosList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ContratoPendienteDto>::new());
    let (error, set_error) = signal(None::<String>);
    let (solicitud, set_solicitud) = signal(None::<SolicitudContext>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_contratos_pendientes().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_pedir = move |row: &ContratoPendienteDto| {
        set_solicitud.set(Some(SolicitudContext {
            contrato: row.contrato.clone(),
            comprador: row.comprador.clone(),
            grano: row.grano.clone(),
            cosecha: row.cosecha.clone(),
        }));
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{"Contratos Pendientes"}</h2>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped summary-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Contrato"}</th>
                            <th class="table__header-cell">{"Comprador"}</th>
                            <th class="table__header-cell">{"Grano"}</th>
                            <th class="table__header-cell">{"Cosecha"}</th>
                            <th class="table__header-cell">{"Kilos Liquidados"}</th>
                            <th class="table__header-cell">{"Kilos Pendientes"}</th>
                            <th class="table__header-cell">{"Camiones"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let row_for_click = row.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.contrato.clone()}</td>
                                    <td class="table__cell">{row.comprador.clone()}</td>
                                    <td class="table__cell">{row.grano.clone()}</td>
                                    <td class="table__cell">{row.cosecha.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.kilos_liquidados.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.kilos_pendientes.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.camiones_pendientes}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--primary"
                                            on:click=move |_| handle_pedir(&row_for_click)
                                        >
                                            {icon("plus")}
                                            {"Pedir cupos"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || solicitud.get().map(|ctx| view! {
                <SolicitudCupoModal
                    ctx=ctx
                    on_close=Callback::new(move |_| set_solicitud.set(None))
                />
            })}
        </div>
    }
}
