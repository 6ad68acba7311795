use super::{api, chart};
use leptos::prelude::*;

const ANCHO: f64 = 600.0;
const ALTO: f64 = 240.0;
const ALTO_PLOT: f64 = 200.0;

/// Single-series vertical bar chart, a pure projection of its data.
#[component]
fn BarChart(titulo: String, series: Vec<(String, f64)>) -> impl IntoView {
    let valores: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let max = chart::maximo(&valores);
    let paso = chart::paso_categorias(series.len(), ANCHO);

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{titulo}</figcaption>
            <svg viewBox=format!("0 0 {} {}", ANCHO, ALTO) role="img" class="chart__svg">
                {series.into_iter().enumerate().map(|(i, (label, valor))| {
                    let alto = chart::alto_barra(valor, max, ALTO_PLOT);
                    let x = i as f64 * paso + paso * 0.15;
                    view! {
                        <rect
                            class="chart__bar"
                            x=x.to_string()
                            y=(ALTO_PLOT - alto).to_string()
                            width=(paso * 0.7).to_string()
                            height=alto.to_string()
                        />
                        <text
                            class="chart__label"
                            x=(i as f64 * paso + paso * 0.5).to_string()
                            y=(ALTO_PLOT + 16.0).to_string()
                            text-anchor="middle"
                        >
                            {label}
                        </text>
                    }
                }).collect_view()}
            </svg>
        </figure>
    }
}

/// Two bars per category: pending kilos next to current stock.
#[component]
fn GroupedBarChart(titulo: String, series: Vec<(String, f64, f64)>) -> impl IntoView {
    let valores: Vec<f64> = series
        .iter()
        .flat_map(|(_, a, b)| [*a, *b])
        .collect();
    let max = chart::maximo(&valores);
    let paso = chart::paso_categorias(series.len(), ANCHO);

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{titulo}</figcaption>
            <div class="chart__legend">
                <span class="chart__legend-item chart__legend-item--pendientes">{"Kilos Pendientes"}</span>
                <span class="chart__legend-item chart__legend-item--stock">{"Stock"}</span>
            </div>
            <svg viewBox=format!("0 0 {} {}", ANCHO, ALTO) role="img" class="chart__svg">
                {series.into_iter().enumerate().map(|(i, (label, pendientes, stock))| {
                    let base = i as f64 * paso;
                    let ancho_barra = paso * 0.35;
                    let alto_pend = chart::alto_barra(pendientes, max, ALTO_PLOT);
                    let alto_stock = chart::alto_barra(stock, max, ALTO_PLOT);
                    view! {
                        <rect
                            class="chart__bar chart__bar--pendientes"
                            x=(base + paso * 0.1).to_string()
                            y=(ALTO_PLOT - alto_pend).to_string()
                            width=ancho_barra.to_string()
                            height=alto_pend.to_string()
                        />
                        <rect
                            class="chart__bar chart__bar--stock"
                            x=(base + paso * 0.5).to_string()
                            y=(ALTO_PLOT - alto_stock).to_string()
                            width=ancho_barra.to_string()
                            height=alto_stock.to_string()
                        />
                        <text
                            class="chart__label"
                            x=(base + paso * 0.5).to_string()
                            y=(ALTO_PLOT + 16.0).to_string()
                            text-anchor="middle"
                        >
                            {label}
                        </text>
                    }
                }).collect_view()}
            </svg>
        </figure>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ResumenCharts() -> impl IntoView {
    let (pendientes, set_pendientes) = signal(Vec::<(String, f64)>::new());
    let (stock, set_stock) = signal(Vec::<(String, f64, f64)>::new());
    let (comparacion, set_comparacion) = signal(None::<(f64, f64)>);

    wasm_bindgen_futures::spawn_local(async move {
        match api::get_resumen_charts().await {
            Ok(data) => {
                set_pendientes.set(
                    data.pendientes_por_grano
                        .into_iter()
                        .map(|g| (g.label, g.kilos))
                        .collect(),
                );
                set_stock.set(
                    data.stock_por_grano
                        .into_iter()
                        .map(|s| (s.label, s.pendientes, s.stock))
                        .collect(),
                );
                set_comparacion.set(
                    data.comparacion
                        .map(|c| (c.entregas, c.liquidaciones)),
                );
            }
            Err(e) => log::error!("get_resumen_charts: {}", e),
        }
    });

    view! {
        <div class="charts-row">
            {move || {
                let series = pendientes.get();
                (!series.is_empty()).then(|| view! {
                    <BarChart
                        titulo="Kilos Pendientes por Grano".to_string()
                        series=series
                    />
                })
            }}
            {move || {
                let series = stock.get();
                (!series.is_empty()).then(|| view! {
                    <GroupedBarChart
                        titulo="Kilos Pendientes vs. Stock por Grano y Cosecha".to_string()
                        series=series
                    />
                })
            }}
            {move || comparacion.get().map(|(entregas, liquidaciones)| view! {
                <BarChart
                    titulo="Comparación de Entregas vs. Liquidaciones".to_string()
                    series=vec![
                        ("Entregas".to_string(), entregas),
                        ("Liquidaciones".to_string(), liquidaciones),
                    ]
                />
            })}
        </div>
    }
}
