// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod invitation_state;

pub use app_state::*;
pub use auth_state::*;
pub use invitation_state::*;
