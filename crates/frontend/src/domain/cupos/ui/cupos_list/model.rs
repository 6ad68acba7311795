use contracts::domain::cupos::CupoPendienteDto;

/// Lifecycle of a listed quota row. A row leaves the list only after
/// the server confirmed the assignment or deletion; any failure puts it
/// back to `Listado` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoFila {
    Listado,
    AsignacionPendiente,
    EliminacionPendiente,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CupoFila {
    pub dto: CupoPendienteDto,
    pub estado: EstadoFila,
}

/// View-model of the pending-quota table. Rendering projects this
/// struct; all transitions go through the methods below so they stay
/// testable without a DOM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuposListado {
    pub filas: Vec<CupoFila>,
}

impl CuposListado {
    pub fn cargar(items: Vec<CupoPendienteDto>) -> Self {
        Self {
            filas: items
                .into_iter()
                .map(|dto| CupoFila {
                    dto,
                    estado: EstadoFila::Listado,
                })
                .collect(),
        }
    }

    pub fn contiene(&self, id: &str) -> bool {
        self.filas.iter().any(|f| f.dto.id == id)
    }

    /// Listado -> AsignacionPendiente. Returns false if the row is
    /// missing or already mid-operation.
    pub fn comenzar_asignacion(&mut self, id: &str) -> bool {
        self.transicionar(id, EstadoFila::AsignacionPendiente)
    }

    /// Listado -> EliminacionPendiente.
    pub fn comenzar_eliminacion(&mut self, id: &str) -> bool {
        self.transicionar(id, EstadoFila::EliminacionPendiente)
    }

    /// Server confirmed: drop the row.
    pub fn remover(&mut self, id: &str) {
        self.filas.retain(|f| f.dto.id != id);
    }

    /// Server confirmed an inline code save. The value has to land in
    /// the model too, or the next re-render of the table would put the
    /// stale copy back into the input.
    pub fn codigo_guardado(&mut self, id: &str, codigo: &str) {
        if let Some(fila) = self.filas.iter_mut().find(|f| f.dto.id == id) {
            fila.dto.codigo_cupo = codigo.to_string();
        }
    }

    /// Operation failed: the row goes back to `Listado` as it was.
    pub fn volver_a_listado(&mut self, id: &str) {
        if let Some(fila) = self.filas.iter_mut().find(|f| f.dto.id == id) {
            fila.estado = EstadoFila::Listado;
        }
    }

    fn transicionar(&mut self, id: &str, destino: EstadoFila) -> bool {
        match self.filas.iter_mut().find(|f| f.dto.id == id) {
            Some(fila) if fila.estado == EstadoFila::Listado => {
                fila.estado = destino;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cupo(id: &str) -> CupoPendienteDto {
        CupoPendienteDto {
            id: id.to_string(),
            contrato: "123".to_string(),
            comprador: "Acme".to_string(),
            grano: "Soja".to_string(),
            cosecha: "23/24".to_string(),
            cantidad: 10,
            fecha_solicitud: "1/6/2024".to_string(),
            nombre_persona: "Juan".to_string(),
            codigo_cupo: String::new(),
        }
    }

    fn listado() -> CuposListado {
        CuposListado::cargar(vec![cupo("5"), cupo("77"), cupo("9")])
    }

    #[test]
    fn successful_assignment_removes_only_that_row() {
        let mut l = listado();
        assert!(l.comenzar_asignacion("5"));
        l.remover("5");
        assert!(!l.contiene("5"));
        assert!(l.contiene("77"));
        assert!(l.contiene("9"));
        assert_eq!(l.filas.len(), 2);
    }

    #[test]
    fn failed_assignment_returns_row_to_listado() {
        let mut l = listado();
        assert!(l.comenzar_asignacion("5"));
        l.volver_a_listado("5");
        let fila = l.filas.iter().find(|f| f.dto.id == "5").unwrap();
        assert_eq!(fila.estado, EstadoFila::Listado);
        assert_eq!(l.filas.len(), 3);
    }

    #[test]
    fn failed_deletion_keeps_the_row() {
        let mut l = listado();
        assert!(l.comenzar_eliminacion("77"));
        l.volver_a_listado("77");
        assert!(l.contiene("77"));
    }

    #[test]
    fn no_transition_while_operation_pending() {
        let mut l = listado();
        assert!(l.comenzar_asignacion("5"));
        assert!(!l.comenzar_asignacion("5"));
        assert!(!l.comenzar_eliminacion("5"));
    }

    #[test]
    fn saved_codigo_survives_removal_of_another_row() {
        let mut l = listado();
        l.codigo_guardado("77", "ABC");
        assert!(l.comenzar_eliminacion("5"));
        l.remover("5");
        let fila = l.filas.iter().find(|f| f.dto.id == "77").unwrap();
        assert_eq!(fila.dto.codigo_cupo, "ABC");
    }

    #[test]
    fn codigo_for_unknown_row_is_ignored() {
        let mut l = listado();
        l.codigo_guardado("404", "ABC");
        assert!(l.filas.iter().all(|f| f.dto.codigo_cupo.is_empty()));
    }

    #[test]
    fn unknown_row_does_not_transition() {
        let mut l = listado();
        assert!(!l.comenzar_eliminacion("404"));
        l.remover("404");
        assert_eq!(l.filas.len(), 3);
    }
}
