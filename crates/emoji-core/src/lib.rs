//! Core of the trigger-character autocomplete engine: fragment extraction,
//! dictionary matching and text splicing. Everything here is pure and
//! synchronous; session state lives in `emoji-session`.

pub mod candidates;
pub mod dict;
pub mod fragment;
pub mod keymap;
pub mod settings;
pub mod splice;
pub mod unicode;
