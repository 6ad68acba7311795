use serde::{Deserialize, Serialize};

/// One freight trip as served by `GET /api/fletes` and
/// `GET /api/fletes/{id}`. Values are kept as the strings the backend
/// renders (it reads them straight out of the legacy DBF tables).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FleteDto {
    pub id: String,
    pub g_fecha: String,
    pub g_ctg: String,
    pub g_cuilchof: String,
    pub g_codi: String,
    pub g_cose: String,
    pub g_ctaplade: String,
    pub categoria: String,
    pub o_peso: String,
    pub o_neto: String,
    pub g_tarflet: String,
    pub g_kilomet: String,
}

/// Create/update body for `POST /api/fletes/nuevo` and
/// `POST /api/fletes/edit/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FleteFormDto {
    pub g_fecha: String,
    pub g_ctg: String,
    pub g_cuilchof: String,
    pub g_codi: String,
    pub g_cose: String,
    pub g_ctaplade: String,
    pub categoria: String,
    pub o_peso: String,
    pub o_neto: String,
    pub g_tarflet: String,
    pub g_kilomet: String,
}

/// Body of `POST /api/fletes/update_km`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActualizarKmRequest {
    pub id: String,
    pub km: String,
}

/// Selectable trip for the assignment modal
/// (`GET /api/fletes/disponibles`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleteOptionDto {
    pub id: String,
    pub descripcion: String,
}

impl FleteDto {
    pub fn into_form(self) -> FleteFormDto {
        FleteFormDto {
            g_fecha: self.g_fecha,
            g_ctg: self.g_ctg,
            g_cuilchof: self.g_cuilchof,
            g_codi: self.g_codi,
            g_cose: self.g_cose,
            g_ctaplade: self.g_ctaplade,
            categoria: self.categoria,
            o_peso: self.o_peso,
            o_neto: self.o_neto,
            g_tarflet: self.g_tarflet,
            g_kilomet: self.g_kilomet,
        }
    }
}
