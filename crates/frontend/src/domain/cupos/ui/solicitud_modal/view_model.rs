use crate::domain::cupos::{api, share};
use crate::shared::{browser, date_utils, dialog};
use contracts::domain::cupos::CupoSolicitudDto;
use leptos::prelude::*;

/// Contract identifiers captured from the clicked table row. The value
/// lives exactly as long as one request workflow: it is handed to the
/// modal when it opens and dropped when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitudContext {
    pub contrato: String,
    pub comprador: String,
    pub grano: String,
    pub cosecha: String,
}

/// User-entered fields, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolicitudForm {
    pub nombre_persona: String,
    pub cantidad: String,
    /// ISO date from the date input.
    pub fecha: String,
}

impl SolicitudForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre_persona.trim().is_empty() {
            return Err("El nombre es obligatorio.".to_string());
        }
        match self.cantidad.trim().parse::<u32>() {
            Ok(n) if n > 0 => {}
            _ => return Err("La cantidad debe ser un número entero mayor a cero.".to_string()),
        }
        if self.fecha.trim().is_empty() {
            return Err("La fecha es obligatoria.".to_string());
        }
        Ok(())
    }
}

/// Merge captured context and form input into the wire payload.
/// The date is reformatted to its es-AR display form here; `cantidad`
/// stays the string the user typed.
pub fn build_solicitud(ctx: &SolicitudContext, form: &SolicitudForm) -> CupoSolicitudDto {
    CupoSolicitudDto {
        contrato: ctx.contrato.clone(),
        grano: ctx.grano.clone(),
        cosecha: ctx.cosecha.clone(),
        cantidad: form.cantidad.trim().to_string(),
        fecha_solicitud: date_utils::format_fecha_corta(form.fecha.trim()),
        nombre_persona: form.nombre_persona.trim().to_string(),
    }
}

/// ViewModel for the quota request modal
#[derive(Clone)]
pub struct SolicitudViewModel {
    pub ctx: SolicitudContext,
    pub form: RwSignal<SolicitudForm>,
    pub error: RwSignal<Option<String>>,
}

impl SolicitudViewModel {
    pub fn new(ctx: SolicitudContext) -> Self {
        Self {
            ctx,
            form: RwSignal::new(SolicitudForm::default()),
            error: RwSignal::new(None),
        }
    }

    /// Submit the request. On success the page is reloaded outright, so
    /// no callback is needed; every failure path leaves the modal open
    /// with the entered values intact.
    pub fn submit_command(&self) {
        let form = self.form.get();
        if let Err(e) = form.validate() {
            self.error.set(Some(e));
            return;
        }
        self.error.set(None);

        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let dto = build_solicitud(&ctx, &form);
            match api::solicitar_cupo(&dto).await {
                Ok(status) if status.success => {
                    let mensaje = share::mensaje_solicitud(
                        &ctx.comprador,
                        &dto.nombre_persona,
                        &dto.cantidad,
                        &ctx.grano,
                        &ctx.cosecha,
                        &dto.fecha_solicitud,
                    );
                    browser::open_in_new_tab(&share::whatsapp_url(&mensaje));
                    browser::reload();
                }
                Ok(status) => {
                    dialog::alert(&format!(
                        "Error al solicitar el cupo: {}",
                        status.error_text()
                    ));
                }
                Err(e) => {
                    log::error!("solicitar_cupo: {}", e);
                    dialog::alert("Ocurrió un error de red.");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contexto() -> SolicitudContext {
        SolicitudContext {
            contrato: "123".to_string(),
            comprador: "Acme".to_string(),
            grano: "Soja".to_string(),
            cosecha: "23/24".to_string(),
        }
    }

    #[test]
    fn payload_matches_wire_format() {
        let form = SolicitudForm {
            nombre_persona: "Juan".to_string(),
            cantidad: "10".to_string(),
            fecha: "2024-06-01".to_string(),
        };
        let dto = build_solicitud(&contexto(), &form);
        assert_eq!(dto.contrato, "123");
        assert_eq!(dto.grano, "Soja");
        assert_eq!(dto.cosecha, "23/24");
        assert_eq!(dto.cantidad, "10");
        assert_eq!(dto.fecha_solicitud, "1/6/2024");
        assert_eq!(dto.nombre_persona, "Juan");
    }

    #[test]
    fn rejects_empty_name() {
        let form = SolicitudForm {
            nombre_persona: "  ".to_string(),
            cantidad: "10".to_string(),
            fecha: "2024-06-01".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        for cantidad in ["0", "-3", "diez", ""] {
            let form = SolicitudForm {
                nombre_persona: "Juan".to_string(),
                cantidad: cantidad.to_string(),
                fecha: "2024-06-01".to_string(),
            };
            assert!(form.validate().is_err(), "cantidad {:?}", cantidad);
        }
    }

    #[test]
    fn rejects_missing_date() {
        let form = SolicitudForm {
            nombre_persona: "Juan".to_string(),
            cantidad: "1".to_string(),
            fecha: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn accepts_valid_form() {
        let form = SolicitudForm {
            nombre_persona: "Juan".to_string(),
            cantidad: "10".to_string(),
            fecha: "2024-06-01".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
