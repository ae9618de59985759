pub mod form;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
