use serde::{Deserialize, Serialize};

/// One agenda task (`GET /api/agenda`, `GET /api/agenda/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TareaDto {
    pub id: String,
    pub descripcion: String,
    #[serde(default)]
    pub link: Option<String>,
    pub fecha_vencimiento: String,
    pub frecuencia: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub password: String,
}

/// Editable subset submitted to `POST /api/agenda/edit/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TareaEditDto {
    pub descripcion: String,
    #[serde(default)]
    pub link: Option<String>,
    pub fecha_vencimiento: String,
    pub frecuencia: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tarea_tolerates_null_link() {
        let dto: TareaDto = serde_json::from_str(
            r#"{
                "id": "3",
                "descripcion": "Pagar monotributo",
                "link": null,
                "fecha_vencimiento": "2026-09-20",
                "frecuencia": "mensual"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.link, None);
        assert_eq!(dto.password, "");
    }
}
