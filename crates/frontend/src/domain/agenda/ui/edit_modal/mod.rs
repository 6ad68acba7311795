use crate::domain::agenda::api;
use crate::shared::components::Modal;
use crate::shared::icons::icon;
use contracts::domain::agenda::TareaEditDto;
use leptos::prelude::*;

pub fn validar(form: &TareaEditDto) -> Result<(), String> {
    if form.fecha_vencimiento.trim().is_empty() {
        return Err("La fecha de vencimiento es obligatoria.".to_string());
    }
    Ok(())
}

#[component]
#[allow(non_snake_case)]
pub fn EditTareaModal(
    id: String,
    form_inicial: TareaEditDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(form_inicial);
    let error = RwSignal::new(None::<String>);

    let handle_guardar = move |_| {
        let current = form.get();
        if let Err(e) = validar(&current) {
            error.set(Some(e));
            return;
        }
        error.set(None);

        let id = id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::editar_tarea(&id, &current).await {
                Ok(status) if status.success => on_saved.run(()),
                Ok(status) => error.set(Some(format!(
                    "No se pudo guardar la tarea: {}",
                    status.error_text()
                ))),
                Err(e) => {
                    log::error!("editar_tarea: {}", e);
                    error.set(Some("Ocurrió un error de red.".to_string()));
                }
            }
        });
    };

    view! {
        <Modal title="Editar Tarea".to_string() on_close=on_cancel>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="edit_descripcion">{"Descripción"}</label>
                    <input
                        type="text"
                        id="edit_descripcion"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| form.update(|f| f.descripcion = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="edit_link">{"Link"}</label>
                    <input
                        type="url"
                        id="edit_link"
                        prop:value=move || form.get().link.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.link = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="edit_fecha_vencimiento">{"Fecha de vencimiento"}</label>
                    <input
                        type="date"
                        id="edit_fecha_vencimiento"
                        required
                        prop:value=move || form.get().fecha_vencimiento
                        on:input=move |ev| {
                            form.update(|f| f.fecha_vencimiento = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="edit_frecuencia">{"Frecuencia"}</label>
                    <input
                        type="text"
                        id="edit_frecuencia"
                        placeholder="mensual, anual..."
                        prop:value=move || form.get().frecuencia
                        on:input=move |ev| form.update(|f| f.frecuencia = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=handle_guardar>
                    {icon("save")}
                    {"Guardar"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_due_date() {
        let form = TareaEditDto {
            descripcion: "Pagar monotributo".to_string(),
            ..Default::default()
        };
        assert!(validar(&form).is_err());
    }

    #[test]
    fn accepts_form_with_due_date() {
        let form = TareaEditDto {
            descripcion: "Pagar monotributo".to_string(),
            fecha_vencimiento: "2026-09-20".to_string(),
            ..Default::default()
        };
        assert!(validar(&form).is_ok());
    }
}
