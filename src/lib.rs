pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod fetch;
pub mod tcl;
pub mod velov;
