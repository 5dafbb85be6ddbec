// ============================================================================
// INVITATION SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado, solo hace requests HTTP.
// Un request por operación, sin retries: los errores se loguean y se
// propagan al caller sin modificar.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use crate::models::{
    ApiResponse, ConfirmInvitationRequest, CreateInvitationRequest, HealthResponse,
    PaginationParams, UpdateInvitationRequest,
};
use crate::services::api::{validate_invitation_id, validate_update_payload, InvitationApi};
use crate::services::error::ServiceError;
use crate::utils::constants::BACKEND_URL;

const ENDPOINT: &str = "invitations";

/// Cliente HTTP de invitaciones (stateless)
#[derive(Clone)]
pub struct InvitationService {
    base_url: String,
}

impl InvitationService {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Convierte una respuesta no-OK en `ServiceError::Http`, extrayendo el
    /// mensaje del envelope si el servidor devolvió JSON
    async fn http_error(response: Response) -> ServiceError {
        let status = response.status();
        let message = match response.json::<ApiResponse>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => "Unknown error".to_string(),
        };
        ServiceError::Http { status, message }
    }

    async fn parse_envelope(response: Response) -> Result<ApiResponse, ServiceError> {
        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

impl Default for InvitationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl InvitationApi for InvitationService {
    async fn create_invitation(
        &self,
        data: &CreateInvitationRequest,
    ) -> Result<ApiResponse, ServiceError> {
        let url = self.api_url(ENDPOINT);

        log::info!("💌 Creando invitación para: {}", data.guest_name);

        let response = Request::post(&url)
            .json(data)
            .map_err(|e| ServiceError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error creando invitación: {}", error);
            return Err(error);
        }

        let envelope = Self::parse_envelope(response).await?;
        log::info!("✅ Invitación creada: {}", envelope.message);
        Ok(envelope)
    }

    async fn get_all_invitations(
        &self,
        params: &PaginationParams,
    ) -> Result<ApiResponse, ServiceError> {
        // Solo se envían valores presentes y positivos; los ausentes
        // los decide el servidor
        let mut query: Vec<String> = Vec::new();
        if let Some(page) = params.page {
            if page > 0 {
                query.push(format!("page={}", page));
            }
        }
        if let Some(limit) = params.limit {
            if limit > 0 {
                query.push(format!("limit={}", limit));
            }
        }

        let url = if query.is_empty() {
            self.api_url(ENDPOINT)
        } else {
            format!("{}?{}", self.api_url(ENDPOINT), query.join("&"))
        };

        log::info!("📋 Obteniendo invitaciones: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error obteniendo invitaciones: {}", error);
            return Err(error);
        }

        let envelope = Self::parse_envelope(response).await?;
        log::info!(
            "✅ Invitaciones obtenidas: {}",
            envelope.invitations.as_ref().map(|list| list.len()).unwrap_or(0)
        );
        Ok(envelope)
    }

    async fn get_invitation_by_id(&self, id: &str) -> Result<ApiResponse, ServiceError> {
        validate_invitation_id(id)?;

        let url = self.api_url(&format!("{}/{}", ENDPOINT, id));

        log::info!("🔍 Obteniendo invitación: {}", id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error obteniendo invitación {}: {}", id, error);
            return Err(error);
        }

        Self::parse_envelope(response).await
    }

    async fn update_invitation(
        &self,
        id: &str,
        data: &UpdateInvitationRequest,
    ) -> Result<ApiResponse, ServiceError> {
        validate_invitation_id(id)?;
        validate_update_payload(data)?;

        let url = self.api_url(&format!("{}/{}", ENDPOINT, id));

        log::info!("📝 Actualizando invitación: {}", id);

        let response = Request::put(&url)
            .json(data)
            .map_err(|e| ServiceError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error actualizando invitación {}: {}", id, error);
            return Err(error);
        }

        Self::parse_envelope(response).await
    }

    async fn delete_invitation(&self, id: &str) -> Result<ApiResponse, ServiceError> {
        validate_invitation_id(id)?;

        let url = self.api_url(&format!("{}/{}", ENDPOINT, id));

        log::info!("🗑️ Eliminando invitación: {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error eliminando invitación {}: {}", id, error);
            return Err(error);
        }

        Self::parse_envelope(response).await
    }

    async fn confirm_invitation(
        &self,
        id: &str,
        confirmed: bool,
    ) -> Result<ApiResponse, ServiceError> {
        validate_invitation_id(id)?;

        let url = self.api_url(&format!("{}/{}/confirm", ENDPOINT, id));
        let request_body = ConfirmInvitationRequest { confirmed };

        log::info!("✉️ {} invitación: {}", if confirmed { "Confirmando" } else { "Desconfirmando" }, id);

        let response = Request::patch(&url)
            .json(&request_body)
            .map_err(|e| ServiceError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error confirmando invitación {}: {}", id, error);
            return Err(error);
        }

        Self::parse_envelope(response).await
    }

    async fn health_check(&self) -> Result<HealthResponse, ServiceError> {
        let url = self.api_url("health");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Request error: {}", e)))?;

        if !response.ok() {
            let error = Self::http_error(response).await;
            log::error!("❌ Error verificando salud de la API: {}", error);
            return Err(error);
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}
