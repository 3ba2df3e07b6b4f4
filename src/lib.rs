//! folio
//!
//! A responsive portfolio screen for the terminal: hero banner, skills
//! grid, contacts grid and footer, laid out for whatever width the
//! terminal has.
//!
//! The layout core in [`layout`] is pure: widths in, decisions out.
//! Everything that touches the terminal, the file system or the desktop
//! lives in [`view`], [`source`], [`logging`] and [`links`].

pub mod config;
pub mod layout;
pub mod links;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
