use serde::{Deserialize, Serialize};

/// Body of `POST /cupos/solicitar`. Field names match the backend wire
/// format verbatim; `cantidad` travels as the string the user typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CupoSolicitudDto {
    pub contrato: String,
    pub grano: String,
    pub cosecha: String,
    pub cantidad: String,
    /// Display date, `d/m/yyyy` (es-AR), not ISO.
    pub fecha_solicitud: String,
    pub nombre_persona: String,
}

/// Body of `POST /cupos/assign_trip`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AsignarViajeRequest {
    pub cupo_id: String,
    pub flete_id: String,
}

/// Body of `POST /cupos/update_codigo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodigoCupoRequest {
    pub cupo_id: String,
    pub codigo_cupo: String,
}

/// One requested quota as listed by `GET /api/cupos/pendientes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CupoPendienteDto {
    pub id: String,
    pub contrato: String,
    pub comprador: String,
    pub grano: String,
    pub cosecha: String,
    pub cantidad: u32,
    pub fecha_solicitud: String,
    pub nombre_persona: String,
    #[serde(default)]
    pub codigo_cupo: String,
}

/// One undelivered contract as listed by `GET /api/contratos/pendientes`.
/// Kilo figures come pre-formatted by the server (grouping included).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContratoPendienteDto {
    pub contrato: String,
    pub comprador: String,
    pub grano: String,
    pub cosecha: String,
    pub kilos_liquidados: String,
    pub kilos_pendientes: String,
    pub camiones_pendientes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solicitud_serializes_with_wire_field_names() {
        let dto = CupoSolicitudDto {
            contrato: "123".to_string(),
            grano: "Soja".to_string(),
            cosecha: "23/24".to_string(),
            cantidad: "10".to_string(),
            fecha_solicitud: "1/6/2024".to_string(),
            nombre_persona: "Juan".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contrato": "123",
                "grano": "Soja",
                "cosecha": "23/24",
                "cantidad": "10",
                "fecha_solicitud": "1/6/2024",
                "nombre_persona": "Juan"
            })
        );
    }

    #[test]
    fn codigo_update_serializes_with_wire_field_names() {
        let req = CodigoCupoRequest {
            cupo_id: "77".to_string(),
            codigo_cupo: "ABC".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cupo_id": "77",
                "codigo_cupo": "ABC"
            })
        );
    }

    #[test]
    fn cupo_pendiente_tolerates_missing_codigo() {
        let dto: CupoPendienteDto = serde_json::from_str(
            r#"{
                "id": "77",
                "contrato": "123",
                "comprador": "Acme",
                "grano": "Soja",
                "cosecha": "23/24",
                "cantidad": 10,
                "fecha_solicitud": "1/6/2024",
                "nombre_persona": "Juan"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.codigo_cupo, "");
    }
}
