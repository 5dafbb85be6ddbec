// ============================================================================
// INVITATION URLS - Utilidades para generar URLs de invitaciones
// ============================================================================
// Funciones helper para crear URLs semánticas que incluyen el nombre del
// invitado en la ruta, mejorando la experiencia al compartir el enlace.
// ============================================================================

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Caracteres a codificar: el mismo conjunto que `encodeURIComponent`
/// (deja pasar alfanuméricos y - _ . ! ~ * ' ( ))
const GUEST_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parámetros de una URL de invitación
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationUrlParams {
    pub guest_name: String,
    pub companions: Option<u32>,
    pub invitation_id: Option<String>,
}

/// Formatea un nombre de invitado para uso en URLs
/// Recorta, colapsa espacios consecutivos en un guión y codifica el resto
///
/// ```
/// # use wedding_invitations_pwa::utils::invitation_urls::format_guest_name_for_url;
/// assert_eq!(format_guest_name_for_url("María García"), "Mar%C3%ADa-Garc%C3%ADa");
/// ```
pub fn format_guest_name_for_url(name: &str) -> String {
    let hyphenated = name.split_whitespace().collect::<Vec<_>>().join("-");
    utf8_percent_encode(&hyphenated, GUEST_NAME_ENCODE_SET).to_string()
}

/// Decodifica un nombre de invitado desde una URL
/// Convierte guiones en espacios y decodifica caracteres especiales
///
/// Limitación conocida: NO es la inversa exacta de `format_guest_name_for_url`.
/// Un nombre que contiene un guión literal es indistinguible de un espacio
/// codificado, así que el guión se pierde. Es una ambigüedad inherente al
/// esquema de URLs, no un bug a arreglar aquí.
pub fn decode_guest_name_from_url(slug: &str) -> String {
    percent_decode_str(slug)
        .decode_utf8_lossy()
        .replace('-', " ")
}

/// Genera la URL relativa de una invitación:
/// `/invitation/<slug>` + query params opcionales (`companions`, `id`)
/// Los parámetros solo se incluyen cuando son positivos / no vacíos
pub fn generate_invitation_url(params: &InvitationUrlParams) -> String {
    let mut url = format!("/invitation/{}", format_guest_name_for_url(&params.guest_name));

    let mut query: Vec<String> = Vec::new();

    if let Some(companions) = params.companions {
        if companions > 0 {
            query.push(format!("companions={}", companions));
        }
    }

    if let Some(id) = &params.invitation_id {
        if !id.is_empty() {
            query.push(format!("id={}", utf8_percent_encode(id, GUEST_NAME_ENCODE_SET)));
        }
    }

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

/// Genera una URL completa (con dominio) para compartir
/// Si no se pasa `base_url` se detecta el origen de la ventana actual
pub fn generate_shareable_url(params: &InvitationUrlParams, base_url: Option<&str>) -> String {
    let relative_path = generate_invitation_url(params);
    let base = match base_url {
        Some(base) => base.to_string(),
        None => current_origin(),
    };
    format!("{}{}", base, relative_path)
}

#[cfg(target_arch = "wasm32")]
fn current_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_origin() -> String {
    String::new()
}

/// Valida que una URL tenga la forma `/invitation/<segmento>` con query opcional
pub fn is_valid_invitation_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("/invitation/") else {
        return false;
    };
    let segment = rest.split('?').next().unwrap_or("");
    !segment.is_empty() && !segment.contains('/')
}

/// Extrae los parámetros de una URL de invitación
/// Devuelve `None` ante cualquier entrada malformada, nunca paniquea
pub fn parse_invitation_url(url: &str) -> Option<InvitationUrlParams> {
    if !is_valid_invitation_url(url) {
        return None;
    }

    let rest = url.strip_prefix("/invitation/")?;
    let (encoded_name, query) = match rest.split_once('?') {
        Some((name, query)) => (name, Some(query)),
        None => (rest, None),
    };

    let guest_name = decode_guest_name_from_url(encoded_name);

    let mut companions = None;
    let mut invitation_id = None;

    if let Some(query) = query {
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(value).decode_utf8_lossy();
            match key {
                "companions" => companions = value.trim().parse::<u32>().ok(),
                "id" if !value.is_empty() => invitation_id = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    Some(InvitationUrlParams {
        guest_name,
        companions,
        invitation_id,
    })
}
