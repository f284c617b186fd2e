// Copyright 2025 Alexandre D. Díaz
//! Mounts a Swagger UI bundle on an actix-web application.
//!
//! The UI entry page and its initializer script are rendered from two small
//! templates, spec files living on the local filesystem are proxied under
//! `<mount>/specs/`.
pub mod config;
pub mod error;
pub mod mount;
pub mod path;
pub mod renderer;
pub mod resolver;

pub use config::{Config, SpecRef, UiConfig};
pub use error::Error;
pub use mount::{mount_ui, SwaggerUi, DEFAULT_ASSETS_DIR};
pub use renderer::TemplateRenderer;
pub use resolver::LocalSpecFile;
