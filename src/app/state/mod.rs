//! Application State: zentrale Datenhaltung.

mod app_state;
mod interaction;
mod selection;
mod view;

pub use app_state::AppState;
pub use interaction::{ColorMode, DropMode, InteractionState};
pub use selection::SelectionState;
pub use view::ViewState;
