// Copyright 2025 Alexandre D. Díaz
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{error, HttpResponse};
use minijinja::{path_loader, AutoEscape, Environment};
use minijinja_autoreload::AutoReloader;
use serde::Serialize;

use crate::error::Error;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const INITIALIZER_TEMPLATE: &str = "swagger-initializer.js";
const TEMPLATES: [&str; 2] = [INDEX_TEMPLATE, INITIALIZER_TEMPLATE];

const INDEX_SOURCE: &str = include_str!("../templates/index.html.tmpl");
const INITIALIZER_SOURCE: &str = include_str!("../templates/swagger-initializer.js.tmpl");

// Both templates emit values verbatim, strings headed for script code go
// through `tojson`.
fn auto_escape(_name: &str) -> AutoEscape {
    AutoEscape::None
}

/// Renders the Swagger UI entry page and its initializer script.
///
/// Cloning is cheap, all clones share the same parsed templates.
#[derive(Clone)]
pub struct TemplateRenderer {
    templates: Templates,
}

#[derive(Clone)]
enum Templates {
    Embedded(Arc<Environment<'static>>),
    Reloading(Arc<AutoReloader>),
}

fn check_templates(env: &Environment<'_>) -> Result<(), Error> {
    for name in TEMPLATES {
        env.get_template(name)?;
    }
    Ok(())
}

impl TemplateRenderer {
    /// Uses the templates compiled into the crate.
    pub fn embedded() -> Result<TemplateRenderer, Error> {
        let mut env: Environment<'static> = Environment::new();
        env.set_auto_escape_callback(auto_escape);
        env.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
        env.add_template(INITIALIZER_TEMPLATE, INITIALIZER_SOURCE)?;
        check_templates(&env)?;
        Ok(TemplateRenderer {
            templates: Templates::Embedded(Arc::new(env)),
        })
    }

    /// Loads `index.html.tmpl` and `swagger-initializer.js.tmpl` from `dir`.
    ///
    /// With `autoreload` the directory is watched and the templates are parsed
    /// again whenever they change.
    pub fn from_dir(dir: impl Into<PathBuf>, autoreload: bool) -> Result<TemplateRenderer, Error> {
        let tmpl_path: PathBuf = dir.into();
        log::info!("loading swagger ui templates from {}", tmpl_path.display());
        let reloader = AutoReloader::new(move |notifier| {
            let mut env: Environment<'static> = Environment::new();
            env.set_auto_escape_callback(auto_escape);

            // if watch_path is never called, no fs watcher is created
            if autoreload {
                notifier.watch_path(&tmpl_path, true);
            }

            let loader = path_loader(&tmpl_path);
            env.set_loader(move |name| loader(&format!("{}.tmpl", name)));
            Ok(env)
        });
        check_templates(&*reloader.acquire_env()?)?;
        Ok(TemplateRenderer {
            templates: Templates::Reloading(Arc::new(reloader)),
        })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        match &self.templates {
            Templates::Embedded(env) => env.get_template(name)?.render(ctx),
            Templates::Reloading(reloader) => {
                let env = reloader.acquire_env()?;
                let rendered = env.get_template(name)?.render(ctx);
                rendered
            }
        }
    }

    /// Renders `name` into a response, a rendering failure becomes a 500.
    pub fn respond<S: Serialize>(
        &self,
        name: &str,
        content_type: &str,
        ctx: S,
    ) -> actix_web::Result<HttpResponse> {
        let body = self.render(name, ctx).map_err(|err| {
            log::error!("could not render {}: {}", name, err);
            error::ErrorInternalServerError(err)
        })?;
        Ok(HttpResponse::Ok().content_type(content_type).body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, SpecRef, UiConfig};
    use std::fs;

    fn ui_config(spec_refs: Vec<SpecRef>) -> UiConfig {
        UiConfig {
            config: Config {
                external_config_url: None,
                spec_refs,
                deep_linking: true,
            },
            base_url: "/docs".to_string(),
        }
    }

    #[test]
    fn single_spec_uses_base_layout() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let js = renderer
            .render(
                INITIALIZER_TEMPLATE,
                ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]),
            )
            .unwrap();
        assert!(js.contains(r#"url: "https://example.com/api.json","#));
        assert!(js.contains(r#"layout: "BaseLayout""#));
        assert!(!js.contains("urls:"));
        assert!(!js.contains("SwaggerUIStandalonePreset"));
        assert!(js.contains("deepLinking: true,"));
    }

    #[test]
    fn several_specs_use_standalone_layout() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let js = renderer
            .render(
                INITIALIZER_TEMPLATE,
                ui_config(vec![
                    SpecRef::new("Pets", "https://example.com/pets.json"),
                    SpecRef::new("Stores", "/docs/specs/stores.yaml"),
                ]),
            )
            .unwrap();
        assert!(js.contains(r#"layout: "StandaloneLayout""#));
        assert!(js.contains(
            r#"urls: [{"name":"Pets","url":"https://example.com/pets.json"},{"name":"Stores","url":"/docs/specs/stores.yaml"}],"#
        ));

        let html = renderer
            .render(INDEX_TEMPLATE, ui_config(vec![SpecRef::new("a", "a"), SpecRef::new("b", "b")]))
            .unwrap();
        assert!(html.contains(r#"src="/docs/swagger-ui-standalone-preset.js""#));
    }

    #[test]
    fn external_config_wins_over_spec_refs() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let mut config = ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]);
        config.config.external_config_url = Some("https://example.com/swagger-config.json".to_string());
        let js = renderer.render(INITIALIZER_TEMPLATE, &config).unwrap();
        assert!(js.contains(r#"configUrl: "https://example.com/swagger-config.json","#));
        assert!(!js.contains("https://example.com/api.json"));
        assert!(!js.contains("layout:"));
    }

    #[test]
    fn deep_linking_disabled() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let mut config = ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]);
        config.config.deep_linking = false;
        let js = renderer.render(INITIALIZER_TEMPLATE, &config).unwrap();
        assert!(js.contains("deepLinking: false,"));
    }

    #[test]
    fn index_links_assets_under_base_url() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let html = renderer
            .render(INDEX_TEMPLATE, ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]))
            .unwrap();
        assert!(html.contains(r#"href="/docs/swagger-ui.css""#));
        assert!(html.contains(r#"src="/docs/swagger-initializer.js""#));
        assert!(!html.contains("swagger-ui-standalone-preset.js"));
    }

    #[test]
    fn embedded_templates_are_shared_between_clones() {
        let renderer = TemplateRenderer::embedded().unwrap();
        let config = ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]);
        let expected = renderer.render(INITIALIZER_TEMPLATE, &config).unwrap();

        let cloned = renderer.clone();
        let rendered = std::thread::spawn(move || cloned.render(INITIALIZER_TEMPLATE, &config).unwrap())
            .join()
            .unwrap();
        assert_eq!(rendered, expected);
        assert!(matches!(renderer.templates, Templates::Embedded(_)));
    }

    #[test]
    fn templates_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html.tmpl"), "<title>{{ base_url }}</title>").unwrap();
        fs::write(dir.path().join("swagger-initializer.js.tmpl"), "// {{ spec_refs|length }}").unwrap();

        let renderer = TemplateRenderer::from_dir(dir.path(), false).unwrap();
        let config = ui_config(vec![SpecRef::new("Pets", "https://example.com/api.json")]);
        assert_eq!(renderer.render(INDEX_TEMPLATE, &config).unwrap(), "<title>/docs</title>");
        assert_eq!(renderer.render(INITIALIZER_TEMPLATE, &config).unwrap(), "// 1");
    }

    #[test]
    fn missing_template_fails_at_construction() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html.tmpl"), "ok").unwrap();
        assert!(matches!(
            TemplateRenderer::from_dir(dir.path(), false),
            Err(Error::Template(_))
        ));
    }

    #[test]
    fn broken_template_fails_at_construction() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html.tmpl"), "{% if %}").unwrap();
        fs::write(dir.path().join("swagger-initializer.js.tmpl"), "ok").unwrap();
        assert!(TemplateRenderer::from_dir(dir.path(), false).is_err());
    }
}
