use serde::{Deserialize, Serialize};

/// Pending kilos for one grain ("Kilos Pendientes por Grano").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GranoPendienteDto {
    pub label: String,
    pub kilos: f64,
}

/// Pending vs. stock for one grain/harvest pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockGranoDto {
    pub label: String,
    pub pendientes: f64,
    pub stock: f64,
}

/// Delivered vs. settled weight totals ("Comparación de Entregas vs.
/// Liquidaciones"). Only present when the balance is known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparacionDto {
    pub entregas: f64,
    pub liquidaciones: f64,
}

/// Payload of `GET /api/resumen/charts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResumenChartsDto {
    #[serde(default)]
    pub pendientes_por_grano: Vec<GranoPendienteDto>,
    #[serde(default)]
    pub stock_por_grano: Vec<StockGranoDto>,
    #[serde(default)]
    pub comparacion: Option<ComparacionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charts_payload_tolerates_missing_comparacion() {
        let dto: ResumenChartsDto = serde_json::from_str(
            r#"{
                "pendientes_por_grano": [{"label": "Soja", "kilos": 1200.0}],
                "stock_por_grano": []
            }"#,
        )
        .unwrap();
        assert_eq!(dto.comparacion, None);
        assert_eq!(dto.pendientes_por_grano.len(), 1);
    }

    #[test]
    fn comparacion_deserializes_when_present() {
        let dto: ResumenChartsDto = serde_json::from_str(
            r#"{"comparacion": {"entregas": 500.0, "liquidaciones": 320.0}}"#,
        )
        .unwrap();
        let comparacion = dto.comparacion.unwrap();
        assert_eq!(comparacion.entregas, 500.0);
        assert_eq!(comparacion.liquidaciones, 320.0);
    }
}
