use crate::domain::fletes::api;
use crate::shared::dialog;
use contracts::domain::fletes::FleteFormDto;
use leptos::prelude::*;

pub fn validar(form: &FleteFormDto) -> Result<(), String> {
    if form.g_fecha.trim().is_empty() {
        return Err("La fecha es obligatoria.".to_string());
    }
    if form.g_codi.trim().is_empty() {
        return Err("El grano es obligatorio.".to_string());
    }
    Ok(())
}

/// ViewModel for the trip create/edit form
#[derive(Clone)]
pub struct FleteDetailsViewModel {
    pub id: Option<String>,
    pub form: RwSignal<FleteFormDto>,
    pub error: RwSignal<Option<String>>,
}

impl FleteDetailsViewModel {
    pub fn new(id: Option<String>, inicial: FleteFormDto) -> Self {
        Self {
            id,
            form: RwSignal::new(inicial),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let form = self.form.get();
        if let Err(e) = validar(&form) {
            self.error.set(Some(e));
            return;
        }
        self.error.set(None);

        let id = self.id.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::editar_flete(id, &form).await,
                None => api::crear_flete(&form).await,
            };
            match result {
                Ok(status) if status.success => on_saved.run(()),
                Ok(status) => error.set(Some(format!(
                    "No se pudo guardar el flete: {}",
                    status.error_text()
                ))),
                Err(e) => {
                    log::error!("guardar flete: {}", e);
                    error.set(Some("Ocurrió un error de red.".to_string()));
                }
            }
        });
    }

    /// Only available in edit mode; asks for confirmation first.
    pub fn delete_command(&self, on_saved: Callback<()>) {
        let Some(id) = self.id.clone() else {
            return;
        };
        if !dialog::confirm(
            "¿Está seguro de que desea eliminar este flete? Esta acción no se puede deshacer.",
        ) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::eliminar_flete(&id).await {
                Ok(status) if status.success => on_saved.run(()),
                Ok(status) => dialog::alert(&format!(
                    "Error al eliminar el flete: {}",
                    status.error_text()
                )),
                Err(e) => {
                    log::error!("eliminar_flete: {}", e);
                    dialog::alert("Ocurrió un error de red.");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_date() {
        let form = FleteFormDto {
            g_codi: "Soja".to_string(),
            ..Default::default()
        };
        assert!(validar(&form).is_err());
    }

    #[test]
    fn rejects_missing_grain() {
        let form = FleteFormDto {
            g_fecha: "2026-08-23".to_string(),
            ..Default::default()
        };
        assert!(validar(&form).is_err());
    }

    #[test]
    fn accepts_minimal_form() {
        let form = FleteFormDto {
            g_fecha: "2026-08-23".to_string(),
            g_codi: "Soja".to_string(),
            ..Default::default()
        };
        assert!(validar(&form).is_ok());
    }
}
