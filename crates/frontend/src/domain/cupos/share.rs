/// Share-message composition for a freshly created quota request.
/// The message is handed to a WhatsApp deep link; the navigation is
/// fire-and-forget and never verified.

pub fn mensaje_solicitud(
    comprador: &str,
    nombre_persona: &str,
    cantidad: &str,
    grano: &str,
    cosecha: &str,
    fecha: &str,
) -> String {
    format!(
        "Hola {comprador},\n\nMensaje para: {nombre_persona}.\n\n\
         Se solicita/n {cantidad} cupo/s de {grano}, cosecha {cosecha}, \
         para el día {fecha}.\n\nSaludamos Atte.\nDRUETTO SRL"
    )
}

pub fn whatsapp_url(mensaje: &str) -> String {
    format!("whatsapp://send?text={}", urlencoding::encode(mensaje))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_embeds_every_field() {
        let mensaje = mensaje_solicitud("Acme", "Juan", "10", "Soja", "23/24", "1/6/2024");
        assert!(mensaje.starts_with("Hola Acme,"));
        assert!(mensaje.contains("Mensaje para: Juan."));
        assert!(mensaje.contains("10 cupo/s de Soja"));
        assert!(mensaje.contains("cosecha 23/24"));
        assert!(mensaje.contains("para el día 1/6/2024"));
        assert!(mensaje.ends_with("Saludamos Atte.\nDRUETTO SRL"));
    }

    #[test]
    fn url_is_percent_encoded() {
        let url = whatsapp_url("Hola Acme,\ncosecha 23/24");
        assert!(url.starts_with("whatsapp://send?text="));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
        assert!(url.contains("23%2F24"));
    }
}
