//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames through composable
//! rendering components. It provides theme support, screen geometry shared with
//! mouse hit-testing, and fuzzy match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry (search bar, dropdown, status, footer)
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer and highlighting utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Layout, Rect};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DropdownInfo, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo, SuggestionItem, UIViewModel,
};
