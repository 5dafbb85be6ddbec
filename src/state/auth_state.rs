// ============================================================================
// AUTH STATE - Sesión de administrador con expiración deslizante
// ============================================================================
// Dos estados: No autenticado / Autenticado(timestamp). La sesión se
// persiste en localStorage y se rehidrata al arrancar la app.
// ============================================================================

use chrono::Utc;
use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::storage;

/// Duración de la sesión en milisegundos (24 horas)
pub const SESSION_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

const ADMIN_PASSWORD: &str = "genesis2025";

const STORAGE_KEY_IS_AUTHENTICATED: &str = "isAuthenticated";
const STORAGE_KEY_AUTH_TIMESTAMP: &str = "authTimestamp";

/// Estado de autenticación del panel de administración
#[derive(Clone)]
pub struct AuthState {
    pub is_authenticated: Rc<RefCell<bool>>,
    /// Timestamp del login en epoch millis
    pub auth_timestamp: Rc<RefCell<Option<i64>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_authenticated: Rc::new(RefCell::new(false)),
            auth_timestamp: Rc::new(RefCell::new(None)),
        }
    }

    /// Login con credencial fija. Devuelve `true` si la contraseña es
    /// correcta; nunca lanza error
    pub fn login(&self, password: &str) -> bool {
        if password != ADMIN_PASSWORD {
            log::warn!("⚠️ Login fallido: contraseña incorrecta");
            return false;
        }

        let now = Utc::now().timestamp_millis();
        *self.is_authenticated.borrow_mut() = true;
        *self.auth_timestamp.borrow_mut() = Some(now);

        // Persistir en localStorage
        let _ = storage::set_item(STORAGE_KEY_IS_AUTHENTICATED, "true");
        let _ = storage::set_item(STORAGE_KEY_AUTH_TIMESTAMP, &now.to_string());

        log::info!("🔐 Login exitoso, sesión iniciada");
        true
    }

    /// Logout incondicional: limpia estado y localStorage
    pub fn logout(&self) {
        *self.is_authenticated.borrow_mut() = false;
        *self.auth_timestamp.borrow_mut() = None;

        let _ = storage::remove_item(STORAGE_KEY_IS_AUTHENTICATED);
        let _ = storage::remove_item(STORAGE_KEY_AUTH_TIMESTAMP);
    }

    /// Rehidrata la sesión desde localStorage al arrancar la app.
    /// La expiración se aplica acá mismo: una sesión con más de 24h
    /// se descarta y el storage se limpia de inmediato
    pub fn check_auth_from_storage(&self) -> bool {
        let stored_auth = storage::get_item(STORAGE_KEY_IS_AUTHENTICATED);
        let stored_timestamp = storage::get_item(STORAGE_KEY_AUTH_TIMESTAMP);

        if let (Some(auth), Some(raw_timestamp)) = (stored_auth, stored_timestamp) {
            if auth == "true" {
                if let Ok(timestamp) = raw_timestamp.parse::<i64>() {
                    let session_age = Utc::now().timestamp_millis() - timestamp;

                    if session_age < SESSION_DURATION_MS {
                        *self.is_authenticated.borrow_mut() = true;
                        *self.auth_timestamp.borrow_mut() = Some(timestamp);
                        return true;
                    }

                    // Sesión expirada, limpiar
                    log::info!("⏰ Sesión expirada, limpiando storage");
                    self.logout();
                }
            }
        }

        false
    }

    /// Extiende la ventana deslizante: no-op si no hay sesión, si la hay
    /// actualiza el timestamp a ahora y lo re-persiste
    pub fn refresh_session(&self) {
        if !*self.is_authenticated.borrow() {
            return;
        }

        let now = Utc::now().timestamp_millis();
        *self.auth_timestamp.borrow_mut() = Some(now);
        let _ = storage::set_item(STORAGE_KEY_AUTH_TIMESTAMP, &now.to_string());
    }

    /// Validez de la sesión, recalculada en cada lectura (nunca cacheada)
    pub fn is_session_valid(&self) -> bool {
        if !*self.is_authenticated.borrow() {
            return false;
        }

        match *self.auth_timestamp.borrow() {
            Some(timestamp) => Utc::now().timestamp_millis() - timestamp < SESSION_DURATION_MS,
            None => false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
