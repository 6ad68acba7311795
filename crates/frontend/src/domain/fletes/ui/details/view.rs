use super::view_model::FleteDetailsViewModel;
use crate::shared::components::Modal;
use crate::shared::format::solo_digitos;
use crate::shared::icons::icon;
use contracts::domain::fletes::FleteFormDto;
use leptos::prelude::*;

#[component]
pub fn FleteDetails(
    id: Option<String>,
    form_inicial: FleteFormDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FleteDetailsViewModel::new(id, form_inicial);
    let vm_clone = vm.clone();

    let title = if vm.is_edit_mode() {
        "Editar Flete"
    } else {
        "Cargar Nuevo Flete"
    };
    let save_label = if vm.is_edit_mode() {
        "Guardar Cambios"
    } else {
        "Guardar Flete"
    };
    let edit_mode = vm.is_edit_mode();

    view! {
        <Modal title=title.to_string() on_close=on_cancel>
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="g_fecha">{"Fecha"}</label>
                    <input
                        type="date"
                        id="g_fecha"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_fecha
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_fecha = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_ctg">{"CTG"}</label>
                    <input
                        type="text"
                        id="g_ctg"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_ctg
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_ctg = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_cuilchof">{"CUIL Chofer"}</label>
                    <input
                        type="text"
                        id="g_cuilchof"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_cuilchof
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_cuilchof = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_codi">{"Grano"}</label>
                    <input
                        type="text"
                        id="g_codi"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_codi
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_codi = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_cose">{"Cosecha"}</label>
                    <input
                        type="text"
                        id="g_cose"
                        placeholder="23/24"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_cose
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_cose = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_ctaplade">{"Carta de Porte"}</label>
                    <input
                        type="text"
                        id="g_ctaplade"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_ctaplade
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_ctaplade = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="categoria">{"Categoría"}</label>
                    <input
                        type="text"
                        id="categoria"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().categoria
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.categoria = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="o_peso">{"Peso"}</label>
                    <input
                        type="number"
                        id="o_peso"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().o_peso
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.o_peso = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="o_neto">{"Neto"}</label>
                    <input
                        type="number"
                        id="o_neto"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().o_neto
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.o_neto = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_tarflet">{"Tarifa"}</label>
                    <input
                        type="number"
                        id="g_tarflet"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_tarflet
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.g_tarflet = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="g_kilomet">{"Kilómetros"}</label>
                    <input
                        type="text"
                        id="g_kilomet"
                        inputmode="numeric"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().g_kilomet
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form
                                    .update(|f| f.g_kilomet = solo_digitos(&event_target_value(&ev)))
                            }
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary save-btn"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                >
                    {icon("save")}
                    {save_label}
                </button>
                {edit_mode.then(|| {
                    let vm = vm_clone.clone();
                    view! {
                        <button
                            class="btn btn-danger"
                            on:click=move |_| vm.delete_command(on_saved)
                        >
                            {icon("delete")}
                            {"Eliminar Flete"}
                        </button>
                    }
                })}
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </Modal>
    }
}
