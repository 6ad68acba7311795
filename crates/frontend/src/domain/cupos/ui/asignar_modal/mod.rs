use crate::domain::cupos::api;
use crate::shared::components::Modal;
use crate::shared::dialog;
use crate::shared::icons::icon;
use contracts::domain::cupos::AsignarViajeRequest;
use contracts::domain::fletes::FleteOptionDto;
use leptos::prelude::*;

/// Assignment overlay: pick one of the available freight trips for the
/// quota the modal was opened with. Submit stays disabled until a trip
/// is selected; a rejected assignment keeps the modal open and the row
/// untouched.
#[component]
#[allow(non_snake_case)]
pub fn AsignarViajeModal(
    cupo_id: String,
    on_assigned: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (fletes, set_fletes) = signal(Vec::<FleteOptionDto>::new());
    let (flete_id, set_flete_id) = signal(String::new());
    let (cargando, set_cargando) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_fletes_disponibles().await {
            Ok(v) => set_fletes.set(v),
            Err(e) => log::error!("fetch_fletes_disponibles: {}", e),
        }
        set_cargando.set(false);
    });

    let id_for_submit = cupo_id.clone();
    let handle_confirmar = move |_| {
        let seleccionado = flete_id.get_untracked();
        if seleccionado.is_empty() {
            return;
        }
        let req = AsignarViajeRequest {
            cupo_id: id_for_submit.clone(),
            flete_id: seleccionado,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::asignar_viaje(&req).await {
                Ok(status) if status.success => on_assigned.run(req.cupo_id.clone()),
                Ok(_) => dialog::alert("Error al asignar el viaje."),
                Err(e) => {
                    log::error!("asignar_viaje: {}", e);
                    dialog::alert("Error al asignar el viaje.");
                }
            }
        });
    };

    view! {
        <Modal title="Asignar Viaje".to_string() on_close=on_cancel>
            <div class="details-form">
                <div class="form-group">
                    <label for="flete_select">{"Flete"}</label>
                    <select
                        id="flete_select"
                        required
                        on:change=move |ev| set_flete_id.set(event_target_value(&ev))
                    >
                        <option value="" selected>
                            {move || if cargando.get() { "Cargando fletes..." } else { "Seleccione un flete" }}
                        </option>
                        {move || fletes.get().into_iter().map(|f| view! {
                            <option value=f.id.clone()>{f.descripcion.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || flete_id.get().is_empty()
                    on:click=handle_confirmar
                >
                    {icon("truck")}
                    {"Confirmar"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </Modal>
    }
}
