use contracts::domain::cupos::{
    AsignarViajeRequest, CodigoCupoRequest, ContratoPendienteDto, CupoPendienteDto,
    CupoSolicitudDto,
};
use contracts::domain::fletes::FleteOptionDto;
use contracts::shared::ApiStatus;
use gloo_net::http::Request;

/// Contracts with undelivered kilos, for the summary table.
pub async fn fetch_contratos_pendientes() -> Result<Vec<ContratoPendienteDto>, String> {
    let response = Request::get("/api/contratos/pendientes")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Quota requests not yet assigned to a trip.
pub async fn fetch_cupos_pendientes() -> Result<Vec<CupoPendienteDto>, String> {
    let response = Request::get("/api/cupos/pendientes")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Trips selectable in the assignment modal.
pub async fn fetch_fletes_disponibles() -> Result<Vec<FleteOptionDto>, String> {
    let response = Request::get("/api/fletes/disponibles")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a quota request.
pub async fn solicitar_cupo(req: &CupoSolicitudDto) -> Result<ApiStatus, String> {
    let response = Request::post("/cupos/solicitar")
        .json(req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Assign a freight trip to a quota.
pub async fn asignar_viaje(req: &AsignarViajeRequest) -> Result<ApiStatus, String> {
    let response = Request::post("/cupos/assign_trip")
        .json(req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Persist the confirmation code typed into a row.
pub async fn actualizar_codigo(req: &CodigoCupoRequest) -> Result<ApiStatus, String> {
    let response = Request::post("/cupos/update_codigo")
        .json(req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a quota request. Empty body, id in the path.
pub async fn eliminar_cupo(id: &str) -> Result<ApiStatus, String> {
    let url = format!("/cupos/delete/{}", id);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
