mod view;
mod view_model;

pub use view::SolicitudCupoModal;
pub use view_model::{build_solicitud, SolicitudContext, SolicitudForm};
