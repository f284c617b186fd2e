// Copyright 2025 Alexandre D. Díaz
use thiserror::Error;

/// Errors raised while setting up the Swagger UI routes.
///
/// Per-request failures never show up here, they are turned into
/// `500 Internal Server Error` responses by the handlers.
#[derive(Error, Debug)]
pub enum Error {
    /// A spec reference URL could not be parsed at all.
    #[error("invalid spec url {url:?}: {source}")]
    SpecUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A local spec path has no usable file name to build its route from.
    #[error("can't derive a route from spec path {0:?}")]
    SpecFileName(String),

    /// Two local spec files would be served from the same route.
    #[error("spec route {0:?} is already registered")]
    DuplicateSpecRoute(String),

    /// One of the UI templates failed to load or parse.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
