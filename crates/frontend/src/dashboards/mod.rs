pub mod resumen;
