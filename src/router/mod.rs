// ============================================================================
// ROUTER - Rutas de la aplicación + guard de autenticación
// ============================================================================
// El guard corre antes de cada navegación: rehidrata la sesión desde
// localStorage, protege las vistas de administración y extiende la ventana
// deslizante cuando la sesión es válida.
// ============================================================================

use crate::state::AuthState;
use crate::utils::invitation_urls::decode_guest_name_from_url;

/// Rutas navegables de la aplicación
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Login,
    /// Invitación personalizada; `guest_name` es el slug tal cual viene en la URL
    Invitation { guest_name: String },
    /// Ruta de respaldo para invitaciones sin nombre en la URL
    InvitationFallback,
    CreateInvitation,
    ManageInvitations,
    NotFound,
}

/// Metadata de una ruta: título de la pestaña y si requiere sesión
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub title: String,
    pub requires_auth: bool,
}

impl Route {
    /// Resuelve la ruta a partir del pathname (la query se ignora)
    pub fn from_path(path: &str) -> Route {
        let path = path.split('?').next().unwrap_or(path);

        match path {
            "" | "/" => Route::Home,
            "/login" => Route::Login,
            "/invitation" => Route::InvitationFallback,
            "/create-invitation" => Route::CreateInvitation,
            "/manage-invitations" => Route::ManageInvitations,
            _ => {
                if let Some(slug) = path.strip_prefix("/invitation/") {
                    if !slug.is_empty() && !slug.contains('/') {
                        return Route::Invitation {
                            guest_name: slug.to_string(),
                        };
                    }
                }
                Route::NotFound
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Invitation { guest_name } => format!("/invitation/{}", guest_name),
            Route::InvitationFallback => "/invitation".to_string(),
            Route::CreateInvitation => "/create-invitation".to_string(),
            Route::ManageInvitations => "/manage-invitations".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Home => RouteMeta {
                title: "Boda Génesis y Christopher".to_string(),
                requires_auth: false,
            },
            Route::Login => RouteMeta {
                title: "Login - Panel de Administración".to_string(),
                requires_auth: false,
            },
            Route::Invitation { guest_name } => RouteMeta {
                // Título dinámico basado en el nombre del invitado
                title: format!(
                    "Invitación para {} - Boda Génesis y Christopher",
                    decode_guest_name_from_url(guest_name)
                ),
                requires_auth: false,
            },
            Route::InvitationFallback => RouteMeta {
                title: "Invitación de Boda - Génesis y Christopher".to_string(),
                requires_auth: false,
            },
            Route::CreateInvitation => RouteMeta {
                title: "Crear Invitación - Panel de Administración".to_string(),
                requires_auth: true,
            },
            Route::ManageInvitations => RouteMeta {
                title: "Gestionar Invitaciones - Panel de Administración".to_string(),
                requires_auth: true,
            },
            Route::NotFound => RouteMeta {
                title: "Página no encontrada".to_string(),
                requires_auth: false,
            },
        }
    }
}

/// Resultado del guard de navegación
#[derive(Debug, Clone, PartialEq)]
pub enum GuardResult {
    Allow,
    Redirect(Route),
}

/// Guard de autenticación, corre antes de cada navegación:
/// - `/` redirige siempre al login
/// - rutas protegidas sin sesión válida redirigen al login
/// - sesión válida en ruta protegida refresca la ventana deslizante
/// - login con sesión ya válida redirige al panel de gestión
pub fn before_each(auth: &AuthState, to: &Route) -> GuardResult {
    // Verificar autenticación desde localStorage
    auth.check_auth_from_storage();

    if *to == Route::Home {
        return GuardResult::Redirect(Route::Login);
    }

    if to.meta().requires_auth {
        if !auth.is_session_valid() {
            return GuardResult::Redirect(Route::Login);
        }
        auth.refresh_session();
    }

    if *to == Route::Login && auth.is_session_valid() {
        return GuardResult::Redirect(Route::ManageInvitations);
    }

    GuardResult::Allow
}

/// Aplica el guard encadenando redirects hasta llegar a una ruta permitida
/// (p. ej. `/` → login → manage cuando ya hay sesión válida)
pub fn resolve(auth: &AuthState, target: Route) -> Route {
    let mut route = target;
    // las cadenas de redirect del guard son siempre cortas
    for _ in 0..3 {
        match before_each(auth, &route) {
            GuardResult::Allow => return route,
            GuardResult::Redirect(next) => {
                log::info!("🔀 Redirigiendo a {}", next.path());
                route = next;
            }
        }
    }
    route
}

/// Resuelve la ruta inicial desde la URL actual, aplicando el guard.
/// Si hubo redirect reescribe la URL sin agregar entrada al historial
#[cfg(target_arch = "wasm32")]
pub fn start(auth: &AuthState) -> Result<Route, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let path = window.location().pathname()?;

    let target = Route::from_path(&path);
    let resolved = resolve(auth, target.clone());

    if resolved != target {
        window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&resolved.path()))?;
    }
    if let Some(document) = window.document() {
        document.set_title(&resolved.meta().title);
    }

    Ok(resolved)
}

/// Navega a un path aplicando el guard: pushState + título de documento
#[cfg(target_arch = "wasm32")]
pub fn navigate(auth: &AuthState, path: &str) -> Result<Route, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    let target = Route::from_path(path);
    let resolved = resolve(auth, target);

    // La ruta wildcard conserva el path solicitado
    let push_path = match &resolved {
        Route::NotFound => path.to_string(),
        route => route.path(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(&push_path))?;
    if let Some(document) = window.document() {
        document.set_title(&resolved.meta().title);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::auth_state::SESSION_DURATION_MS;
    use crate::utils::storage;
    use chrono::Utc;

    fn reset_storage() {
        let _ = storage::remove_item("isAuthenticated");
        let _ = storage::remove_item("authTimestamp");
    }

    #[test]
    fn from_path_matches_known_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/invitation"), Route::InvitationFallback);
        assert_eq!(Route::from_path("/create-invitation"), Route::CreateInvitation);
        assert_eq!(Route::from_path("/manage-invitations"), Route::ManageInvitations);
        assert_eq!(
            Route::from_path("/invitation/Mar%C3%ADa-Garc%C3%ADa"),
            Route::Invitation {
                guest_name: "Mar%C3%ADa-Garc%C3%ADa".to_string()
            }
        );
        // la query no afecta el matching
        assert_eq!(
            Route::from_path("/invitation/Ana?companions=2&id=inv-001"),
            Route::Invitation {
                guest_name: "Ana".to_string()
            }
        );
    }

    #[test]
    fn from_path_falls_back_to_not_found() {
        assert_eq!(Route::from_path("/otra-cosa"), Route::NotFound);
        assert_eq!(Route::from_path("/invitation/a/b"), Route::NotFound);
        assert_eq!(Route::from_path("/invitation/"), Route::NotFound);
    }

    #[test]
    fn invitation_route_has_dynamic_title() {
        let route = Route::Invitation {
            guest_name: "Mar%C3%ADa-Garc%C3%ADa".to_string(),
        };
        assert_eq!(
            route.meta().title,
            "Invitación para María García - Boda Génesis y Christopher"
        );
        assert!(!route.meta().requires_auth);
    }

    #[test]
    fn admin_routes_require_auth() {
        assert!(Route::CreateInvitation.meta().requires_auth);
        assert!(Route::ManageInvitations.meta().requires_auth);
        assert!(!Route::Login.meta().requires_auth);
        assert!(!Route::InvitationFallback.meta().requires_auth);
    }

    #[test]
    fn guard_redirects_unauthenticated_to_login() {
        reset_storage();
        let auth = AuthState::new();

        assert_eq!(
            before_each(&auth, &Route::ManageInvitations),
            GuardResult::Redirect(Route::Login)
        );
        assert_eq!(
            before_each(&auth, &Route::CreateInvitation),
            GuardResult::Redirect(Route::Login)
        );
    }

    #[test]
    fn guard_redirects_expired_session_to_login() {
        reset_storage();
        let stale = Utc::now().timestamp_millis() - SESSION_DURATION_MS - 1;
        let _ = storage::set_item("isAuthenticated", "true");
        let _ = storage::set_item("authTimestamp", &stale.to_string());

        let auth = AuthState::new();
        assert_eq!(
            before_each(&auth, &Route::ManageInvitations),
            GuardResult::Redirect(Route::Login)
        );
        // la expiración fue eager: el storage quedó limpio
        assert_eq!(storage::get_item("isAuthenticated"), None);
    }

    #[test]
    fn guard_allows_and_refreshes_valid_session() {
        reset_storage();
        let auth = AuthState::new();
        auth.login("genesis2025");

        // Simular sesión un poco vieja para ver el refresh
        let old = Utc::now().timestamp_millis() - 1000;
        let _ = storage::set_item("authTimestamp", &old.to_string());

        assert_eq!(before_each(&auth, &Route::ManageInvitations), GuardResult::Allow);

        let stored: i64 = storage::get_item("authTimestamp")
            .and_then(|raw| raw.parse().ok())
            .expect("timestamp persistido");
        assert!(stored > old);
    }

    #[test]
    fn guard_redirects_authenticated_login_to_manage() {
        reset_storage();
        let auth = AuthState::new();
        auth.login("genesis2025");

        assert_eq!(
            before_each(&auth, &Route::Login),
            GuardResult::Redirect(Route::ManageInvitations)
        );
    }

    #[test]
    fn guard_allows_public_routes_without_session() {
        reset_storage();
        let auth = AuthState::new();

        let invitation = Route::Invitation {
            guest_name: "Ana".to_string(),
        };
        assert_eq!(before_each(&auth, &invitation), GuardResult::Allow);
        assert_eq!(before_each(&auth, &Route::InvitationFallback), GuardResult::Allow);
        assert_eq!(before_each(&auth, &Route::Login), GuardResult::Allow);
    }

    #[test]
    fn resolve_chains_home_redirects() {
        reset_storage();
        let auth = AuthState::new();

        // sin sesión: / → /login
        assert_eq!(resolve(&auth, Route::Home), Route::Login);

        // con sesión válida: / → /login → /manage-invitations
        auth.login("genesis2025");
        assert_eq!(resolve(&auth, Route::Home), Route::ManageInvitations);
    }
}
