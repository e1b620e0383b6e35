// Library exports for the school site (used by the binaries and tests)
pub mod config;
pub mod content;
pub mod directory;
pub mod forms;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod server;
