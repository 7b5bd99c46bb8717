// src/ports/mod.rs
pub mod alert;
pub mod html;

pub use alert::{Alert, ConsoleAlert};
pub use html::{ButtonAction, ButtonBinding, HtmlPresenter, RenderedList};
