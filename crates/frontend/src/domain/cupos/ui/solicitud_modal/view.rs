use super::view_model::{SolicitudContext, SolicitudViewModel};
use crate::shared::components::Modal;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SolicitudCupoModal(ctx: SolicitudContext, on_close: Callback<()>) -> impl IntoView {
    let vm = SolicitudViewModel::new(ctx);
    let vm_clone = vm.clone();

    view! {
        <Modal title="Pedir Cupos".to_string() on_close=on_close>
            <div class="solicitud-context">
                <span>{"Contrato "}{vm.ctx.contrato.clone()}</span>
                <span>{vm.ctx.comprador.clone()}</span>
                <span>{vm.ctx.grano.clone()}{" "}{vm.ctx.cosecha.clone()}</span>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="nombre_persona">{"Nombre"}</label>
                    <input
                        type="text"
                        id="nombre_persona"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().nombre_persona
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.nombre_persona = event_target_value(&ev));
                            }
                        }
                        placeholder="Quién solicita el cupo"
                    />
                </div>

                <div class="form-group">
                    <label for="cantidad_cupos">{"Cantidad de cupos"}</label>
                    <input
                        type="number"
                        id="cantidad_cupos"
                        required
                        min="1"
                        step="1"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().cantidad
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.cantidad = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="fecha_cupo">{"Fecha"}</label>
                    <input
                        type="date"
                        id="fecha_cupo"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().fecha
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.fecha = event_target_value(&ev));
                            }
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.submit_command()
                    }
                >
                    {icon("send")}
                    {"Aceptar"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </Modal>
    }
}
