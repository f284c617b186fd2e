// Copyright 2025 Alexandre D. Díaz
use std::fs;
use std::path::PathBuf;

use actix_files as afs;
use actix_web::{
    dev::{AppService, HttpServiceFactory},
    error,
    middleware::Compress,
    web, HttpResponse, Result,
};

use crate::config::{Config, UiConfig};
use crate::error::Error;
use crate::path;
use crate::renderer::{TemplateRenderer, INDEX_TEMPLATE, INITIALIZER_TEMPLATE};
use crate::resolver::{self, LocalSpecFile};

pub const DEFAULT_ASSETS_DIR: &str = "./swagger-ui";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JS_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

struct UiState {
    renderer: TemplateRenderer,
    ui_config: UiConfig,
}

/// A Swagger UI ready to be registered on an actix `App` or `Scope`.
///
/// ```no_run
/// use actix_web::{App, HttpServer};
/// use swaggerui::{Config, SpecRef, SwaggerUi, TemplateRenderer};
///
/// # async fn run() -> std::io::Result<()> {
/// let renderer = TemplateRenderer::embedded().expect("broken swagger ui templates");
/// let config = Config {
///     spec_refs: vec![SpecRef::new("Pets", "./openapi.yaml")],
///     ..Config::default()
/// };
/// let ui = SwaggerUi::mount(&renderer, "/", "/docs", config).expect("bad swagger ui config");
///
/// HttpServer::new(move || App::new().service(ui.clone()))
///     .bind(("127.0.0.1", 8080))?
///     .run()
///     .await
/// # }
/// ```
#[derive(Clone)]
pub struct SwaggerUi {
    scope_path: String,
    assets_dir: PathBuf,
    local_specs: Vec<LocalSpecFile>,
    state: web::Data<UiState>,
}

impl SwaggerUi {
    /// Resolves `config` for a UI living at `relative_path` below `parent_path`.
    ///
    /// `parent_path` is the prefix of whatever the UI gets registered on (`/`
    /// for an `App`), it only feeds the URLs baked into the rendered pages.
    pub fn mount(
        renderer: &TemplateRenderer,
        parent_path: &str,
        relative_path: &str,
        config: Config,
    ) -> Result<SwaggerUi, Error> {
        let base_url = path::join(parent_path, relative_path);
        let (ui_config, local_specs) = resolver::resolve(config, &base_url)?;
        log::info!(
            "swagger ui mounted at '{}/' with {} spec(s), {} served locally",
            &base_url,
            ui_config.get_spec_refs().len(),
            local_specs.len()
        );
        Ok(SwaggerUi {
            scope_path: path::normalize(relative_path),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            local_specs,
            state: web::Data::new(UiState {
                renderer: renderer.clone(),
                ui_config,
            }),
        })
    }

    /// Directory holding the Swagger UI dist bundle (`swagger-ui-bundle.js`,
    /// `swagger-ui.css`, ...).
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> SwaggerUi {
        self.assets_dir = dir.into();
        self
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.state.ui_config
    }

    pub fn local_specs(&self) -> &Vec<LocalSpecFile> {
        &self.local_specs
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.service(self.clone());
    }
}

impl HttpServiceFactory for SwaggerUi {
    fn register(self, config: &mut AppService) {
        let mut scope = web::scope(&self.scope_path)
            .app_data(self.state.clone())
            .route("", web::get().to(route_index))
            .route("/", web::get().to(route_index))
            .route("/swagger-initializer.js", web::get().to(route_initializer));

        for spec in self.local_specs {
            scope = scope.service(
                web::resource(spec.route.clone())
                    .app_data(web::Data::new(spec))
                    .route(web::get().to(route_spec)),
            );
        }

        // Must stay last, it answers every path left over.
        scope
            .service(afs::Files::new("/", &self.assets_dir).index_file("index.html"))
            .wrap(Compress::default())
            .register(config);
    }
}

/// Builds a [`SwaggerUi`] and registers it on `cfg`, returning the resolved
/// configuration the pages are rendered with.
pub fn mount_ui(
    cfg: &mut web::ServiceConfig,
    renderer: &TemplateRenderer,
    parent_path: &str,
    relative_path: &str,
    config: Config,
) -> Result<UiConfig, Error> {
    let ui = SwaggerUi::mount(renderer, parent_path, relative_path, config)?;
    let ui_config = ui.ui_config().clone();
    cfg.service(ui);
    Ok(ui_config)
}

async fn route_index(state: web::Data<UiState>) -> Result<HttpResponse> {
    state
        .renderer
        .respond(INDEX_TEMPLATE, HTML_CONTENT_TYPE, &state.ui_config)
}

async fn route_initializer(state: web::Data<UiState>) -> Result<HttpResponse> {
    state
        .renderer
        .respond(INITIALIZER_TEMPLATE, JS_CONTENT_TYPE, &state.ui_config)
}

async fn route_spec(spec: web::Data<LocalSpecFile>) -> Result<HttpResponse> {
    let spec_path = spec.path.clone();
    let content = web::block(move || fs::read(spec_path))
        .await?
        .map_err(|err| {
            log::error!("can't read spec file {}: {}", spec.path.display(), err);
            // io::Error maps NotFound to 404 on its own, a broken spec is a server fault
            error::ErrorInternalServerError(err)
        })?;
    let ext = spec
        .path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or_default();
    Ok(HttpResponse::Ok()
        .content_type(afs::file_extension_to_mime(ext))
        .body(content))
}
