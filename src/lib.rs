// ============================================================================
// WEDDING INVITATIONS APP - Capa de sincronización de estado (Rust + WASM)
// ============================================================================
// Arquitectura:
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API (stateless, detrás del trait InvitationApi)
// - State: State Management con Rc<RefCell> + notificaciones
// - Router: rutas + guard de autenticación
// - Utils: URLs de invitaciones, localStorage, constantes
// Las vistas viven en el shell y consumen este crate vía los stores.
// ============================================================================

pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Instancia global de la app, creada una sola vez en init()
#[cfg(target_arch = "wasm32")]
thread_local! {
    static APP_STATE: RefCell<Option<state::AppState>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Invitaciones de Boda - Génesis y Christopher");

    // Crear estado global y rehidratar la sesión desde localStorage
    let app = state::AppState::new();
    if app.init() {
        log::info!("🔐 Sesión de administrador restaurada");
    }

    // Resolver la ruta inicial aplicando el guard
    let route = router::start(&app.auth)?;
    log::info!("📍 Ruta inicial: {}", route.path());

    APP_STATE.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Acceso a la instancia global del estado
#[cfg(target_arch = "wasm32")]
pub fn with_app_state<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&state::AppState) -> R,
{
    APP_STATE.with(|cell| cell.borrow().as_ref().map(f))
}

/// Navegación desde el shell JS: aplica el guard y actualiza URL + título
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn navigate_to(path: String) -> Result<(), JsValue> {
    with_app_state(|app| router::navigate(&app.auth, &path).map(|_| ()))
        .unwrap_or_else(|| Err(JsValue::from_str("App no inicializada")))
}

/// Login del panel de administración (llamable desde JavaScript)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn admin_login(password: String) -> bool {
    with_app_state(|app| app.auth.login(&password)).unwrap_or(false)
}

/// Logout del panel de administración (llamable desde JavaScript)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn admin_logout() -> Result<(), JsValue> {
    with_app_state(|app| {
        app.logout();
        router::navigate(&app.auth, "/login").map(|_| ())
    })
    .unwrap_or_else(|| Err(JsValue::from_str("App no inicializada")))
}
