pub mod agenda;
pub mod cupos;
pub mod fletes;
