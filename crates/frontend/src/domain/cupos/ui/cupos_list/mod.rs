pub mod model;

use crate::domain::cupos::api;
use crate::domain::cupos::ui::asignar_modal::AsignarViajeModal;
use crate::shared::dialog;
use crate::shared::icons::icon;
use contracts::domain::cupos::CodigoCupoRequest;
use leptos::prelude::*;
use model::{CuposListado, EstadoFila};

/// Table of requested quotas awaiting a trip. Each row owns its three
/// operations: assign a trip, save the confirmation code on blur,
/// delete after a confirm dialog.
#[component]
#[allow(non_snake_case)]
pub fn CuposList() -> impl IntoView {
    let (listado, set_listado) = signal(CuposListado::default());
    let (error, set_error) = signal(None::<String>);
    // Quota id currently in the assignment modal, if any.
    let (asignando, set_asignando) = signal(None::<String>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_cupos_pendientes().await {
                Ok(v) => {
                    set_listado.set(CuposListado::cargar(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_asignar = move |id: String| {
        let mut abierto = false;
        set_listado.update(|l| abierto = l.comenzar_asignacion(&id));
        if abierto {
            set_asignando.set(Some(id));
        }
    };

    // Saved on focus loss, no debounce and no save button. A confirmed
    // value is written back into the model so later re-renders keep
    // it; a rejected value is not reverted, the next reload shows the
    // authoritative copy.
    let handle_blur_codigo = move |id: String, codigo: String| {
        wasm_bindgen_futures::spawn_local(async move {
            let req = CodigoCupoRequest {
                cupo_id: id.clone(),
                codigo_cupo: codigo.clone(),
            };
            match api::actualizar_codigo(&req).await {
                Ok(status) if status.success => {
                    set_listado.update(|l| l.codigo_guardado(&id, &codigo));
                }
                Ok(_) => dialog::alert("Error al guardar el código de cupo."),
                Err(e) => {
                    log::error!("actualizar_codigo: {}", e);
                    dialog::alert("Error al guardar el código de cupo.");
                }
            }
        });
    };

    let handle_eliminar = move |id: String| {
        if !dialog::confirm("¿Está seguro de que desea eliminar este pedido de cupo?") {
            return;
        }
        let mut comenzada = false;
        set_listado.update(|l| comenzada = l.comenzar_eliminacion(&id));
        if !comenzada {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::eliminar_cupo(&id).await {
                Ok(status) if status.success => {
                    set_listado.update(|l| l.remover(&id));
                }
                Ok(status) => {
                    dialog::alert(&format!(
                        "Error al eliminar el cupo: {}",
                        status.error_text()
                    ));
                    set_listado.update(|l| l.volver_a_listado(&id));
                }
                Err(e) => {
                    log::error!("eliminar_cupo: {}", e);
                    dialog::alert("Ocurrió un error de red.");
                    set_listado.update(|l| l.volver_a_listado(&id));
                }
            }
        });
    };

    let on_assigned = Callback::new(move |id: String| {
        set_listado.update(|l| l.remover(&id));
        set_asignando.set(None);
    });

    let on_assign_cancel = Callback::new(move |_| {
        if let Some(id) = asignando.get_untracked() {
            set_listado.update(|l| l.volver_a_listado(&id));
        }
        set_asignando.set(None);
    });

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{"Cupos Solicitados"}</h2>
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
                <table class="table__data table--striped" id="cupos-solicitados-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Contrato"}</th>
                            <th class="table__header-cell">{"Comprador"}</th>
                            <th class="table__header-cell">{"Grano"}</th>
                            <th class="table__header-cell">{"Cosecha"}</th>
                            <th class="table__header-cell">{"Cantidad"}</th>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Solicitado por"}</th>
                            <th class="table__header-cell">{"Código de cupo"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || listado.get().filas.into_iter().map(|fila| {
                            let ocupada = fila.estado != EstadoFila::Listado;
                            let id_asignar = fila.dto.id.clone();
                            let id_codigo = fila.dto.id.clone();
                            let id_eliminar = fila.dto.id.clone();
                            view! {
                                <tr class="table__row" data-cupo-id=fila.dto.id.clone()>
                                    <td class="table__cell">{fila.dto.contrato.clone()}</td>
                                    <td class="table__cell">{fila.dto.comprador.clone()}</td>
                                    <td class="table__cell">{fila.dto.grano.clone()}</td>
                                    <td class="table__cell">{fila.dto.cosecha.clone()}</td>
                                    <td class="table__cell table__cell--number">{fila.dto.cantidad}</td>
                                    <td class="table__cell">{fila.dto.fecha_solicitud.clone()}</td>
                                    <td class="table__cell">{fila.dto.nombre_persona.clone()}</td>
                                    <td class="table__cell">
                                        <input
                                            type="text"
                                            class="codigo-cupo-input"
                                            value=fila.dto.codigo_cupo.clone()
                                            on:blur=move |ev| {
                                                handle_blur_codigo(id_codigo.clone(), event_target_value(&ev))
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--primary"
                                            disabled=ocupada
                                            on:click=move |_| handle_asignar(id_asignar.clone())
                                        >
                                            {icon("truck")}
                                            {"Asignar viaje"}
                                        </button>
                                        <button
                                            class="button button--secondary"
                                            disabled=ocupada
                                            on:click=move |_| handle_eliminar(id_eliminar.clone())
                                        >
                                            {icon("delete")}
                                            {"Eliminar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || asignando.get().map(|cupo_id| view! {
                <AsignarViajeModal
                    cupo_id=cupo_id
                    on_assigned=on_assigned
                    on_cancel=on_assign_cancel
                />
            })}
        </div>
    }
}
