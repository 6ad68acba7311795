use crate::domain::fletes::api;
use crate::domain::fletes::ui::details::FleteDetails;
use crate::shared::date_utils::hoy_iso;
use crate::shared::dialog;
use crate::shared::format::{format_miles, solo_digitos};
use crate::shared::icons::icon;
use contracts::domain::fletes::{ActualizarKmRequest, FleteDto, FleteFormDto};
use leptos::prelude::*;

/// What the trip modal was opened for: a new trip or an existing one
/// already fetched from the server.
#[derive(Debug, Clone, PartialEq)]
struct FleteModalState {
    id: Option<String>,
    form: FleteFormDto,
}

#[component]
#[allow(non_snake_case)]
pub fn FletesList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<FleteDto>::new());
    let (error, set_error) = signal(None::<String>);
    let (modal, set_modal) = signal(None::<FleteModalState>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_fletes().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Running total over whatever is typed in the km column right now.
    let total_km = move || {
        let total: i64 = items
            .get()
            .iter()
            .filter_map(|f| f.g_kilomet.parse::<i64>().ok())
            .sum();
        format_miles(total)
    };

    let handle_km_input = move |id: String, value: String| {
        set_items.update(|v| {
            if let Some(item) = v.iter_mut().find(|f| f.id == id) {
                item.g_kilomet = solo_digitos(&value);
            }
        });
    };

    let handle_guardar_km = move |id: String, km: String| {
        wasm_bindgen_futures::spawn_local(async move {
            let req = ActualizarKmRequest { id, km };
            match api::actualizar_km(&req).await {
                Ok(status) if status.success => {
                    dialog::alert("Kilómetros actualizados correctamente.");
                }
                Ok(status) => {
                    dialog::alert(&format!(
                        "Error al actualizar los kilómetros: {}",
                        status.error_text()
                    ));
                }
                Err(e) => {
                    log::error!("actualizar_km: {}", e);
                    dialog::alert("Ocurrió un error de red.");
                }
            }
        });
    };

    let handle_nuevo = move |_| {
        set_modal.set(Some(FleteModalState {
            id: None,
            form: FleteFormDto {
                g_fecha: hoy_iso(),
                ..Default::default()
            },
        }));
    };

    // The edit modal only opens once the record arrived; a failed fetch
    // alerts and leaves the page as it was.
    let handle_editar = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_flete(&id).await {
                Ok(dto) => {
                    set_modal.set(Some(FleteModalState {
                        id: Some(dto.id.clone()),
                        form: dto.into_form(),
                    }));
                }
                Err(e) => {
                    log::error!("fetch_flete: {}", e);
                    dialog::alert("No se pudieron cargar los datos del flete.");
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        set_modal.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_| set_modal.set(None));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Fletes"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" id="new-flete-btn" on:click=handle_nuevo>
                        {icon("plus")}
                        {"Cargar Nuevo Flete"}
                    </button>
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
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"CTG"}</th>
                            <th class="table__header-cell">{"CUIL Chofer"}</th>
                            <th class="table__header-cell">{"Grano"}</th>
                            <th class="table__header-cell">{"Cosecha"}</th>
                            <th class="table__header-cell">{"Carta de Porte"}</th>
                            <th class="table__header-cell">{"Categoría"}</th>
                            <th class="table__header-cell">{"Peso"}</th>
                            <th class="table__header-cell">{"Neto"}</th>
                            <th class="table__header-cell">{"Tarifa"}</th>
                            <th class="table__header-cell">{"KM"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_km_input = row.id.clone();
                            let id_guardar = row.id.clone();
                            let km_actual = row.g_kilomet.clone();
                            let id_editar = row.id.clone();
                            view! {
                                <tr class="table__row" data-id=row.id.clone()>
                                    <td class="table__cell">{row.g_fecha.clone()}</td>
                                    <td class="table__cell">{row.g_ctg.clone()}</td>
                                    <td class="table__cell">{row.g_cuilchof.clone()}</td>
                                    <td class="table__cell">{row.g_codi.clone()}</td>
                                    <td class="table__cell">{row.g_cose.clone()}</td>
                                    <td class="table__cell">{row.g_ctaplade.clone()}</td>
                                    <td class="table__cell">{row.categoria.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.o_peso.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.o_neto.clone()}</td>
                                    <td class="table__cell table__cell--number">{row.g_tarflet.clone()}</td>
                                    <td class="table__cell">
                                        <input
                                            type="text"
                                            class="km-input"
                                            inputmode="numeric"
                                            prop:value=row.g_kilomet.clone()
                                            on:input=move |ev| {
                                                handle_km_input(id_km_input.clone(), event_target_value(&ev))
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary save-km"
                                            on:click=move |_| handle_guardar_km(id_guardar.clone(), km_actual.clone())
                                        >
                                            {icon("save")}
                                            {"Guardar KM"}
                                        </button>
                                        <button
                                            class="button button--secondary"
                                            on:click=move |_| handle_editar(id_editar.clone())
                                        >
                                            {icon("edit")}
                                            {"Editar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr class="table__row table__row--total">
                            <td class="table__cell" colspan="10">{"Total KM"}</td>
                            <td class="table__cell table__cell--number" id="total-km">
                                <strong>{total_km}</strong>
                            </td>
                            <td class="table__cell"></td>
                        </tr>
                    </tfoot>
                </table>
            </div>

            {move || modal.get().map(|m| view! {
                <FleteDetails
                    id=m.id
                    form_inicial=m.form
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            })}
        </div>
    }
}
