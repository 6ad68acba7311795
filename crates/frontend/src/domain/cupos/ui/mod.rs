pub mod asignar_modal;
pub mod contratos_list;
pub mod cupos_list;
pub mod solicitud_modal;
