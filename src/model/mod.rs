//! Model layer - state and static content
//!
//! - `Gallery` / `DialogSlot` - the listing's interactive state
//! - `Listing` / `Flyer` - static content for the two views
//! - `Router` - current route and back history
//! - `ModalStack` - app-level overlays (help, quit)

pub mod dialog;
pub mod flyer;
pub mod gallery;
pub mod listing;
pub mod modal;
pub mod photo;
pub mod route;
pub mod ui;

pub use dialog::{DialogContent, DialogSlot};
pub use flyer::{Flyer, FlyerLine, LineKind};
pub use gallery::Gallery;
pub use listing::Listing;
pub use photo::AssetResolver;
pub use route::{Route, Router};
