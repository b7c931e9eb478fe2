//! Use-Cases: mutierende Operationen auf dem AppState.
//!
//! Jede Operation meldet die betroffenen Szenen-Elemente über
//! `AppState::push_scene_changes`, damit nur diese neu gezeichnet werden.

pub mod drag;
pub mod editing;
pub mod options;
pub mod scene;
