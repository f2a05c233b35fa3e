//! Minimal terminal runtime: a tick-driven event loop feeding an [`App`].

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
