//! Explorer page UI state.
//!
//! Plain state holders for the pieces of the file-explorer page that are not
//! network-bound: the floating action menu, the entity context menu,
//! drag-and-drop moves, the upload drop area, and the modals the server asks
//! to reopen on load. Rendering and timers stay in the front-end.

pub mod dnd;
pub mod menu;
pub mod modal;
pub mod state;

pub use dnd::{DragMove, DropArea};
pub use menu::{Command, ContextMenu, FabMenu, MenuAction, Position};
pub use modal::{InitialModals, ModalKind, ModalRequest};
pub use state::{Entity, ExplorerState};
