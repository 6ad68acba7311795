use contracts::dashboards::resumen::ResumenChartsDto;
use gloo_net::http::Request;

pub async fn get_resumen_charts() -> Result<ResumenChartsDto, String> {
    let response = Request::get("/api/resumen/charts")
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
