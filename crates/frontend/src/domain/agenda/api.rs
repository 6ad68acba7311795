use contracts::domain::agenda::{TareaDto, TareaEditDto};
use contracts::shared::ApiStatus;
use gloo_net::http::Request;

const API_BASE: &str = "/api/agenda";

pub async fn fetch_tareas() -> Result<Vec<TareaDto>, String> {
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

pub async fn fetch_tarea(id: &str) -> Result<TareaDto, String> {
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

pub async fn editar_tarea(id: &str, form: &TareaEditDto) -> Result<ApiStatus, String> {
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
