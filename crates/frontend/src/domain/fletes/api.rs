use contracts::domain::fletes::{ActualizarKmRequest, FleteDto, FleteFormDto};
use contracts::shared::ApiStatus;
use gloo_net::http::Request;

const API_BASE: &str = "/api/fletes";

pub async fn fetch_fletes() -> Result<Vec<FleteDto>, String> {
    let response = Request::get(API_BASE)
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

pub async fn fetch_flete(id: &str) -> Result<FleteDto, String> {
    let url = format!("{}/{}", API_BASE, id);

    let response = Request::get(&url)
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

pub async fn crear_flete(form: &FleteFormDto) -> Result<ApiStatus, String> {
    let url = format!("{}/nuevo", API_BASE);

    let response = Request::post(&url)
        .json(form)
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

pub async fn editar_flete(id: &str, form: &FleteFormDto) -> Result<ApiStatus, String> {
    let url = format!("{}/edit/{}", API_BASE, id);

    let response = Request::post(&url)
        .json(form)
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

pub async fn eliminar_flete(id: &str) -> Result<ApiStatus, String> {
    let url = format!("{}/delete/{}", API_BASE, id);

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

/// Inline km save from the list, independent of the edit modal.
pub async fn actualizar_km(req: &ActualizarKmRequest) -> Result<ApiStatus, String> {
    let url = format!("{}/update_km", API_BASE);

    let response = Request::post(&url)
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
