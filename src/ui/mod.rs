//! UI layer: view models, components, themes, and the renderer.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use theme::Theme;
pub use viewmodel::UiViewModel;
