mod config;

use actix_web::{middleware::Logger, App, HttpServer};

use crate::config::SERVER_CONFIG;
use swaggerui::{SwaggerUi, TemplateRenderer};


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // MiniJinja
    let renderer = match SERVER_CONFIG.get_template_dir() {
        Some(tmpl_path) => {
            if SERVER_CONFIG.get_template_autoreload() {
                log::info!("template auto-reloading is enabled");
            } else {
                log::info!(
                    "template auto-reloading is disabled; run with SWAGGERUI_TEMPLATE_AUTORELOAD=true to enable"
                );
            }
            TemplateRenderer::from_dir(tmpl_path, SERVER_CONFIG.get_template_autoreload())
        }
        None => TemplateRenderer::embedded(),
    }
    .expect("Can't load the swagger ui templates");

    let swagger_ui = SwaggerUi::mount(
        &renderer,
        "/",
        SERVER_CONFIG.get_mount_path(),
        SERVER_CONFIG.get_ui_config().clone(),
    )
    .expect("Can't mount the swagger ui")
    .with_assets_dir(SERVER_CONFIG.get_assets_dir());

    log::info!(
        "starting HTTP server at http://{}:{}{}",
        &SERVER_CONFIG.get_bind_address(),
        &SERVER_CONFIG.get_port(),
        swagger_ui.ui_config().get_base_url()
    );

    // start HTTP server
    HttpServer::new(move || {
        App::new()
            .service(swagger_ui.clone())
            .wrap(Logger::default())
    })
    .bind((SERVER_CONFIG.get_bind_address().clone(), *SERVER_CONFIG.get_port()))?
    .workers(*SERVER_CONFIG.get_workers())
    .run()
    .await
}
