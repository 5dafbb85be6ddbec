// ============================================================================
// INVITATION API - Contrato del service layer (una operación por acción CRUD)
// ============================================================================

use async_trait::async_trait;

use crate::models::{
    ApiResponse, CreateInvitationRequest, HealthResponse, PaginationParams,
    UpdateInvitationRequest,
};
use crate::services::error::ServiceError;

/// Contrato del cliente HTTP de invitaciones
/// El store recibe una implementación inyectada (el cliente real en wasm,
/// un mock en los tests), nunca accede a la red directamente
#[async_trait(?Send)]
pub trait InvitationApi {
    /// Crear una nueva invitación
    async fn create_invitation(
        &self,
        data: &CreateInvitationRequest,
    ) -> Result<ApiResponse, ServiceError>;

    /// Obtener todas las invitaciones con paginación
    async fn get_all_invitations(
        &self,
        params: &PaginationParams,
    ) -> Result<ApiResponse, ServiceError>;

    /// Obtener una invitación por ID
    async fn get_invitation_by_id(&self, id: &str) -> Result<ApiResponse, ServiceError>;

    /// Actualizar parcialmente una invitación
    async fn update_invitation(
        &self,
        id: &str,
        data: &UpdateInvitationRequest,
    ) -> Result<ApiResponse, ServiceError>;

    /// Eliminar una invitación
    async fn delete_invitation(&self, id: &str) -> Result<ApiResponse, ServiceError>;

    /// Confirmar o desconfirmar una invitación
    async fn confirm_invitation(
        &self,
        id: &str,
        confirmed: bool,
    ) -> Result<ApiResponse, ServiceError>;

    /// Verificar el estado de salud de la API
    async fn health_check(&self) -> Result<HealthResponse, ServiceError>;
}

/// Validación local y síncrona: las operaciones con ID fallan rápido
/// si el ID viene vacío o en blanco, sin tocar la red
pub fn validate_invitation_id(id: &str) -> Result<(), ServiceError> {
    if id.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Invitation ID is required".to_string(),
        ));
    }
    Ok(())
}

/// La actualización parcial necesita al menos un campo presente
pub fn validate_update_payload(data: &UpdateInvitationRequest) -> Result<(), ServiceError> {
    if data.guest_name.is_none() && data.number_of_companions.is_none() {
        return Err(ServiceError::Validation(
            "At least one field (guestName or numberOfCompanions) is required for update"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_blank_id_fails_fast() {
        assert!(matches!(
            validate_invitation_id(""),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            validate_invitation_id("   "),
            Err(ServiceError::Validation(_))
        ));
        assert!(validate_invitation_id("inv-001").is_ok());
    }

    #[test]
    fn update_payload_requires_at_least_one_field() {
        assert!(matches!(
            validate_update_payload(&UpdateInvitationRequest::default()),
            Err(ServiceError::Validation(_))
        ));

        let with_name = UpdateInvitationRequest {
            guest_name: Some("Ana".to_string()),
            ..Default::default()
        };
        assert!(validate_update_payload(&with_name).is_ok());

        let with_companions = UpdateInvitationRequest {
            number_of_companions: Some(0),
            ..Default::default()
        };
        assert!(validate_update_payload(&with_companions).is_ok());
    }
}
