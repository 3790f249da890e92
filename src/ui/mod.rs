pub mod app;
pub mod destination;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod overlay;
pub mod render;
pub mod runtime;
pub mod simple;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
