// ============================================================================
// INVITATION STATE - Cache reactivo de invitaciones (colección + paginación)
// ============================================================================
// Cada acción sigue el mismo protocolo: activar su flag de loading, limpiar
// su error, delegar al service layer, reflejar la respuesta en la colección
// local y apagar el flag de loading en TODAS las salidas (éxito o error).
// Dos llamadas concurrentes a la misma acción corren independientes: gana
// la última respuesta en llegar (last-write-wins, sin deduplicación).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{
    CreateInvitationRequest, Invitation, InvitationStats, PaginationData, PaginationParams,
    UpdateInvitationRequest,
};
use crate::services::{InvitationApi, ServiceError};

/// Flags de loading por operación
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingState {
    pub creating: bool,
    pub fetching: bool,
    pub updating: bool,
    pub deleting: bool,
    pub fetching_by_id: bool,
    pub confirming: bool,
}

/// Mensajes de error por operación, consumibles por las vistas.
/// Cada slot se limpia de forma independiente al reintentar su operación
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorState {
    pub create: Option<String>,
    pub fetch: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
    pub fetch_by_id: Option<String>,
    pub confirm: Option<String>,
}

impl ErrorState {
    pub fn clear(&mut self) {
        *self = ErrorState::default();
    }
}

/// Mensaje legible para las vistas: se prefiere el mensaje del servidor,
/// con fallback genérico si viene vacío
fn error_message(error: &ServiceError) -> String {
    match error {
        ServiceError::Http { message, .. } => {
            if message.is_empty() {
                "Ha ocurrido un error inesperado".to_string()
            } else {
                message.clone()
            }
        }
        other => other.to_string(),
    }
}

/// Estado de invitaciones: dueño exclusivo de la colección en memoria
/// y del cursor de paginación
#[derive(Clone)]
pub struct InvitationState {
    api: Rc<dyn InvitationApi>,
    pub invitations: Rc<RefCell<Vec<Invitation>>>,
    pub current_invitation: Rc<RefCell<Option<Invitation>>>,
    pub pagination: Rc<RefCell<PaginationData>>,
    pub loading: Rc<RefCell<LoadingState>>,
    pub errors: Rc<RefCell<ErrorState>>,
}

impl InvitationState {
    pub fn new(api: Rc<dyn InvitationApi>) -> Self {
        Self {
            api,
            invitations: Rc::new(RefCell::new(Vec::new())),
            current_invitation: Rc::new(RefCell::new(None)),
            pagination: Rc::new(RefCell::new(PaginationData::default())),
            loading: Rc::new(RefCell::new(LoadingState::default())),
            errors: Rc::new(RefCell::new(ErrorState::default())),
        }
    }

    /// Crear una nueva invitación
    /// La nueva invitación se antepone a la lista y el total se incrementa
    /// de forma optimista; el servidor es la fuente de verdad en el próximo
    /// fetch completo, así que no hay rollback
    pub async fn create_invitation(&self, data: CreateInvitationRequest) -> Option<Invitation> {
        self.loading.borrow_mut().creating = true;
        self.errors.borrow_mut().create = None;

        let result = self.api.create_invitation(&data).await;

        let created = match result {
            Ok(response) => {
                if let Some(invitation) = response.invitation {
                    self.invitations.borrow_mut().insert(0, invitation.clone());
                    self.pagination.borrow_mut().total_count += 1;
                    Some(invitation)
                } else {
                    None
                }
            }
            Err(error) => {
                log::error!("❌ Error creando invitación: {}", error);
                self.errors.borrow_mut().create = Some(error_message(&error));
                None
            }
        };

        self.loading.borrow_mut().creating = false;
        created
    }

    /// Obtener invitaciones con paginación
    /// `append = false` reemplaza la colección completa; `append = true`
    /// agrega al final (paginación infinita). La paginación siempre se
    /// sobrescribe tal cual llega del servidor
    pub async fn fetch_invitations(&self, params: PaginationParams, append: bool) {
        self.loading.borrow_mut().fetching = true;
        self.errors.borrow_mut().fetch = None;

        match self.api.get_all_invitations(&params).await {
            Ok(response) => {
                if let Some(fetched) = response.invitations {
                    let mut invitations = self.invitations.borrow_mut();
                    if append {
                        invitations.extend(fetched);
                    } else {
                        *invitations = fetched;
                    }
                }
                if let Some(pagination) = response.pagination {
                    *self.pagination.borrow_mut() = pagination;
                }
            }
            Err(error) => {
                log::error!("❌ Error obteniendo invitaciones: {}", error);
                self.errors.borrow_mut().fetch = Some(error_message(&error));
            }
        }

        self.loading.borrow_mut().fetching = false;
    }

    /// Obtener una invitación por ID y fijarla como invitación actual
    pub async fn fetch_invitation_by_id(&self, id: &str) -> Option<Invitation> {
        self.loading.borrow_mut().fetching_by_id = true;
        self.errors.borrow_mut().fetch_by_id = None;

        let result = self.api.get_invitation_by_id(id).await;

        let fetched = match result {
            Ok(response) => {
                if let Some(invitation) = response.invitation {
                    *self.current_invitation.borrow_mut() = Some(invitation.clone());
                    Some(invitation)
                } else {
                    None
                }
            }
            Err(error) => {
                log::error!("❌ Error obteniendo invitación {}: {}", id, error);
                self.errors.borrow_mut().fetch_by_id = Some(error_message(&error));
                None
            }
        };

        self.loading.borrow_mut().fetching_by_id = false;
        fetched
    }

    /// Actualizar una invitación: reemplazo in-place en la colección local
    /// (búsqueda lineal por id) y refresco de la invitación actual si coincide
    pub async fn update_invitation(
        &self,
        id: &str,
        data: UpdateInvitationRequest,
    ) -> Option<Invitation> {
        self.loading.borrow_mut().updating = true;
        self.errors.borrow_mut().update = None;

        let result = self.api.update_invitation(id, &data).await;

        let updated = match result {
            Ok(response) => {
                if let Some(invitation) = response.invitation {
                    self.replace_local(id, &invitation);
                    Some(invitation)
                } else {
                    None
                }
            }
            Err(error) => {
                log::error!("❌ Error actualizando invitación {}: {}", id, error);
                self.errors.borrow_mut().update = Some(error_message(&error));
                None
            }
        };

        self.loading.borrow_mut().updating = false;
        updated
    }

    /// Confirmar o desconfirmar una invitación
    pub async fn confirm_invitation(&self, id: &str, confirmed: bool) -> Option<Invitation> {
        self.loading.borrow_mut().confirming = true;
        self.errors.borrow_mut().confirm = None;

        let result = self.api.confirm_invitation(id, confirmed).await;

        let updated = match result {
            Ok(response) => {
                if let Some(invitation) = response.invitation {
                    self.replace_local(id, &invitation);
                    Some(invitation)
                } else {
                    None
                }
            }
            Err(error) => {
                log::error!("❌ Error confirmando invitación {}: {}", id, error);
                self.errors.borrow_mut().confirm = Some(error_message(&error));
                None
            }
        };

        self.loading.borrow_mut().confirming = false;
        updated
    }

    /// Eliminar una invitación de la colección local y decrementar el total
    pub async fn delete_invitation(&self, id: &str) -> bool {
        self.loading.borrow_mut().deleting = true;
        self.errors.borrow_mut().delete = None;

        let result = self.api.delete_invitation(id).await;

        let deleted = match result {
            Ok(_) => {
                let mut invitations = self.invitations.borrow_mut();
                if let Some(index) = invitations.iter().position(|inv| inv.id == id) {
                    invitations.remove(index);
                    let mut pagination = self.pagination.borrow_mut();
                    pagination.total_count = pagination.total_count.saturating_sub(1);
                }
                drop(invitations);

                let matches_current = self
                    .current_invitation
                    .borrow()
                    .as_ref()
                    .map(|current| current.id == id)
                    .unwrap_or(false);
                if matches_current {
                    *self.current_invitation.borrow_mut() = None;
                }
                true
            }
            Err(error) => {
                log::error!("❌ Error eliminando invitación {}: {}", id, error);
                self.errors.borrow_mut().delete = Some(error_message(&error));
                false
            }
        };

        self.loading.borrow_mut().deleting = false;
        deleted
    }

    /// Cargar la siguiente página en modo append (paginación infinita)
    /// No-op si no hay más páginas o si ya hay un fetch en vuelo
    pub async fn load_more_invitations(&self) {
        let next_params = {
            let pagination = self.pagination.borrow();
            if !pagination.has_next_page || self.loading.borrow().fetching {
                return;
            }
            PaginationParams {
                page: Some(pagination.current_page + 1),
                limit: Some(pagination.limit),
            }
        };

        self.fetch_invitations(next_params, true).await;
    }

    /// Refrescar la lista desde la primera página (modo reemplazo)
    pub async fn refresh_invitations(&self) {
        let limit = self.pagination.borrow().limit;
        self.fetch_invitations(
            PaginationParams {
                page: Some(1),
                limit: Some(limit),
            },
            false,
        )
        .await;
    }

    // ------------------------------------------------------------------
    // Derivados: siempre recalculados sobre la colección viva, sin cache
    // ------------------------------------------------------------------

    /// ¿Hay alguna operación en vuelo?
    pub fn is_loading(&self) -> bool {
        let loading = self.loading.borrow();
        loading.creating
            || loading.fetching
            || loading.updating
            || loading.deleting
            || loading.fetching_by_id
            || loading.confirming
    }

    /// ¿Hay algún error pendiente?
    pub fn has_errors(&self) -> bool {
        let errors = self.errors.borrow();
        errors.create.is_some()
            || errors.fetch.is_some()
            || errors.update.is_some()
            || errors.delete.is_some()
            || errors.fetch_by_id.is_some()
            || errors.confirm.is_some()
    }

    /// Total de invitaciones según el servidor (cursor de paginación)
    pub fn total_invitations(&self) -> u32 {
        self.pagination.borrow().total_count
    }

    pub fn can_load_more(&self) -> bool {
        self.pagination.borrow().has_next_page
    }

    /// Estadísticas agregadas sobre la colección en memoria
    pub fn get_invitation_stats(&self) -> InvitationStats {
        let invitations = self.invitations.borrow();
        let total = invitations.len();
        // +1 por el invitado principal de cada invitación
        let total_guests: u32 = invitations
            .iter()
            .map(|inv| inv.number_of_companions + 1)
            .sum();

        InvitationStats {
            total_invitations: total,
            total_guests,
            average_companions: if total > 0 {
                (total_guests as f64 - total as f64) / total as f64
            } else {
                0.0
            },
        }
    }

    /// Buscar una invitación en la colección local (sin red)
    pub fn find_invitation_by_id(&self, id: &str) -> Option<Invitation> {
        self.invitations
            .borrow()
            .iter()
            .find(|inv| inv.id == id)
            .cloned()
    }

    /// Filtrar la colección local por nombre de invitado
    pub fn filter_invitations_by_name(&self, search_term: &str) -> Vec<Invitation> {
        let term = search_term.trim().to_lowercase();
        let invitations = self.invitations.borrow();
        if term.is_empty() {
            return invitations.clone();
        }
        invitations
            .iter()
            .filter(|inv| inv.guest_name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    pub fn get_current_invitation(&self) -> Option<Invitation> {
        self.current_invitation.borrow().clone()
    }

    pub fn set_current_invitation(&self, invitation: Option<Invitation>) {
        *self.current_invitation.borrow_mut() = invitation;
    }

    pub fn clear_errors(&self) {
        self.errors.borrow_mut().clear();
    }

    /// Resetear todo al estado inicial (se usa en el logout para no filtrar
    /// datos de una sesión de administrador a la siguiente)
    pub fn clear_store(&self) {
        self.invitations.borrow_mut().clear();
        *self.current_invitation.borrow_mut() = None;
        *self.pagination.borrow_mut() = PaginationData::default();
        *self.loading.borrow_mut() = LoadingState::default();
        self.clear_errors();
    }

    /// Reemplazo in-place por id en la colección y en la invitación actual
    fn replace_local(&self, id: &str, invitation: &Invitation) {
        let mut invitations = self.invitations.borrow_mut();
        if let Some(index) = invitations.iter().position(|inv| inv.id == id) {
            invitations[index] = invitation.clone();
        }
        drop(invitations);

        let matches_current = self
            .current_invitation
            .borrow()
            .as_ref()
            .map(|current| current.id == id)
            .unwrap_or(false);
        if matches_current {
            *self.current_invitation.borrow_mut() = Some(invitation.clone());
        }
    }
}
