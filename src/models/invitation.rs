// ============================================================================
// MODELOS DE INVITACIÓN - Estructuras compartidas con el backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Invitación tal como la devuelve el backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// ID único asignado por el servidor (inmutable)
    #[serde(rename = "_id")]
    pub id: String,

    /// Nombre del invitado (texto libre)
    pub guest_name: String,

    /// Número de acompañantes (siempre >= 0)
    pub number_of_companions: u32,

    /// ¿El invitado confirmó su asistencia?
    #[serde(default)]
    pub confirmed: bool,

    /// Timestamps asignados por el servidor
    pub created_at: String,
    pub updated_at: String,
}

/// Datos para crear una nueva invitación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub guest_name: String,
    pub number_of_companions: u32,
}

/// Datos para actualización parcial: solo se envían los campos presentes
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_companions: Option<u32>,
}

/// Cuerpo del endpoint de confirmación
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfirmInvitationRequest {
    pub confirmed: bool,
}

/// Estado de paginación, copiado tal cual de la respuesta del servidor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub limit: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Default for PaginationData {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            limit: 10,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

/// Parámetros opcionales de paginación; los ausentes los decide el servidor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Envelope estándar de la API de invitaciones
/// `invitation`/`invitations` pueden faltar incluso en respuestas exitosas
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: String,
    pub invitation: Option<Invitation>,
    pub invitations: Option<Vec<Invitation>>,
    pub pagination: Option<PaginationData>,
}

/// Respuesta del endpoint de salud
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub message: String,
    pub timestamp: String,
}

/// Estadísticas agregadas, derivadas de la colección en memoria
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationStats {
    pub total_invitations: usize,
    /// Total de personas: invitado principal + acompañantes
    pub total_guests: u32,
    pub average_companions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_invitation_from_backend_payload() {
        let json = r#"{
            "_id": "inv-001",
            "guestName": "María García",
            "numberOfCompanions": 2,
            "confirmed": true,
            "createdAt": "2025-01-15T10:00:00.000Z",
            "updatedAt": "2025-01-16T09:30:00.000Z"
        }"#;

        let invitation: Invitation = serde_json::from_str(json).unwrap();
        assert_eq!(invitation.id, "inv-001");
        assert_eq!(invitation.guest_name, "María García");
        assert_eq!(invitation.number_of_companions, 2);
        assert!(invitation.confirmed);
    }

    #[test]
    fn confirmed_defaults_to_false_when_absent() {
        let json = r#"{
            "_id": "inv-002",
            "guestName": "Ana",
            "numberOfCompanions": 0,
            "createdAt": "2025-01-15T10:00:00.000Z",
            "updatedAt": "2025-01-15T10:00:00.000Z"
        }"#;

        let invitation: Invitation = serde_json::from_str(json).unwrap();
        assert!(!invitation.confirmed);
    }

    #[test]
    fn envelope_tolerates_missing_optional_fields() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"message": "Invitación eliminada"}"#).unwrap();
        assert_eq!(response.message, "Invitación eliminada");
        assert!(response.invitation.is_none());
        assert!(response.invitations.is_none());
        assert!(response.pagination.is_none());

        // sin message tampoco falla
        let empty: ApiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, "");
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let payload = UpdateInvitationRequest {
            guest_name: None,
            number_of_companions: Some(3),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"numberOfCompanions":3}"#
        );
    }

    #[test]
    fn pagination_defaults_match_first_page() {
        let pagination = PaginationData::default();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.total_count, 0);
        assert!(!pagination.has_next_page);
    }
}
