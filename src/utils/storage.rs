// ============================================================================
// STORAGE - Acceso a localStorage (con fallback en memoria para tests nativos)
// ============================================================================

#[cfg(target_arch = "wasm32")]
use web_sys::{window, Storage};

#[cfg(target_arch = "wasm32")]
pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}

// Fuera del navegador no hay localStorage: usamos un mapa por thread.
// Cada test corre en su propio thread, así que quedan aislados entre sí.
#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORAGE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(key: &str) -> Option<String> {
    STORAGE.with(|storage| storage.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    STORAGE.with(|storage| {
        storage.borrow_mut().insert(key.to_string(), value.to_string());
    });
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(key: &str) -> Result<(), String> {
    STORAGE.with(|storage| {
        storage.borrow_mut().remove(key);
    });
    Ok(())
}
