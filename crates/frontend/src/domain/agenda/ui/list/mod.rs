use crate::domain::agenda::api;
use crate::domain::agenda::ui::edit_modal::EditTareaModal;
use crate::shared::dialog;
use crate::shared::icons::icon;
use contracts::domain::agenda::{TareaDto, TareaEditDto};
use leptos::prelude::*;

/// Masked credential cell with a per-row reveal toggle. Pure client
/// state; nothing leaves the page.
#[component]
fn PasswordCell(password: String) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let shown = password.clone();

    view! {
        <td class="table__cell">
            <span class="password-value">
                {move || if visible.get() { shown.clone() } else { "••••••••".to_string() }}
            </span>
            <button
                class="button button--icon toggle-password"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { icon("eye-off") } else { icon("eye") }}
            </button>
        </td>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AgendaList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<TareaDto>::new());
    let (error, set_error) = signal(None::<String>);
    let (editando, set_editando) = signal(None::<(String, TareaEditDto)>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tareas().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_editar = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tarea(&id).await {
                Ok(dto) => {
                    set_editando.set(Some((
                        dto.id.clone(),
                        TareaEditDto {
                            descripcion: dto.descripcion,
                            link: dto.link,
                            fecha_vencimiento: dto.fecha_vencimiento,
                            frecuencia: dto.frecuencia,
                        },
                    )));
                }
                Err(e) => {
                    log::error!("fetch_tarea: {}", e);
                    dialog::alert("No se pudieron cargar los datos de la tarea.");
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        set_editando.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_| set_editando.set(None));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Agenda"}</h1>
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
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Descripción"}</th>
                            <th class="table__header-cell">{"Link"}</th>
                            <th class="table__header-cell">{"Vencimiento"}</th>
                            <th class="table__header-cell">{"Frecuencia"}</th>
                            <th class="table__header-cell">{"Usuario"}</th>
                            <th class="table__header-cell">{"Contraseña"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_editar = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.descripcion.clone()}</td>
                                    <td class="table__cell">
                                        {row.link.clone().map(|url| view! {
                                            <a href=url.clone() target="_blank" rel="noopener">{url.clone()}</a>
                                        })}
                                    </td>
                                    <td class="table__cell">{row.fecha_vencimiento.clone()}</td>
                                    <td class="table__cell">{row.frecuencia.clone()}</td>
                                    <td class="table__cell">{row.usuario.clone()}</td>
                                    <PasswordCell password=row.password.clone() />
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary edit-tarea-btn"
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
                </table>
            </div>

            {move || editando.get().map(|(id, form)| view! {
                <EditTareaModal
                    id=id
                    form_inicial=form
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            })}
        </div>
    }
}
