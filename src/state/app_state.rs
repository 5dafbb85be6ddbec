// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::InvitationApi;
use crate::state::{AuthState, InvitationState};

/// Estado global: autenticación + invitaciones + subscribers de cambios
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub invitations: InvitationState,

    // Reactivity: callbacks para notificar cambios a las vistas
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear estado global con el cliente HTTP real
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self::with_api(Rc::new(crate::services::InvitationService::new()))
    }

    /// Crear estado global con un service layer inyectado
    pub fn with_api(api: Rc<dyn InvitationApi>) -> Self {
        Self {
            auth: AuthState::new(),
            invitations: InvitationState::new(api),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Rehidratar la sesión desde localStorage al arrancar
    pub fn init(&self) -> bool {
        self.auth.check_auth_from_storage()
    }

    /// Logout: cierra la sesión y vacía el store de invitaciones para no
    /// filtrar datos de una sesión de administrador a la siguiente
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.auth.logout();
        self.invitations.clear_store();
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
