/// Bar layout arithmetic for the summary SVG charts. Pure so the
/// scaling can be checked without a renderer.

/// Largest value of a series; zero for an empty or non-positive series.
pub fn maximo(valores: &[f64]) -> f64 {
    valores.iter().copied().fold(0.0, f64::max)
}

/// Height of one bar inside a plot area of `alto_plot` pixels.
/// A zero maximum yields flat bars instead of dividing by zero.
pub fn alto_barra(valor: f64, maximo: f64, alto_plot: f64) -> f64 {
    if maximo <= 0.0 || valor <= 0.0 {
        return 0.0;
    }
    valor / maximo * alto_plot
}

/// Horizontal step per category; bars take 70% of it.
pub fn paso_categorias(cantidad: usize, ancho_plot: f64) -> f64 {
    if cantidad == 0 {
        return 0.0;
    }
    ancho_plot / cantidad as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_linearly() {
        assert_eq!(alto_barra(50.0, 100.0, 200.0), 100.0);
        assert_eq!(alto_barra(100.0, 100.0, 200.0), 200.0);
        assert_eq!(alto_barra(0.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn zero_maximum_gives_flat_bars() {
        assert_eq!(alto_barra(10.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn maximo_ignores_negatives() {
        assert_eq!(maximo(&[-5.0, 3.0, 7.5]), 7.5);
        assert_eq!(maximo(&[]), 0.0);
    }

    #[test]
    fn step_splits_plot_evenly() {
        assert_eq!(paso_categorias(4, 600.0), 150.0);
        assert_eq!(paso_categorias(0, 600.0), 0.0);
    }
}
