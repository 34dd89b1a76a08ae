//! Views for the desktop app

mod article;
mod main;

pub use main::main_view;
