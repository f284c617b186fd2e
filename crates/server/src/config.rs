// Copyright Alexandre D. Díaz
use config::Config;
use lazy_static::lazy_static;
use swaggerui::SpecRef;

#[derive(Debug)]
pub struct SwaggerUiServerConfig {
    bind_address: String,
    port: u16,
    workers: usize,
    mount_path: String,
    assets_dir: String,
    template_dir: Option<String>,
    template_autoreload: bool,
    ui: swaggerui::Config,
}

impl SwaggerUiServerConfig {
    pub fn new() -> SwaggerUiServerConfig {
        let settings = Config::builder()
            .add_source(config::File::with_name("./server").required(false))
            .add_source(config::Environment::with_prefix("SWAGGERUI"))
            .build()
            .expect("Can't read the server settings");
        SwaggerUiServerConfig::from_settings(&settings)
    }

    pub fn from_settings(settings: &Config) -> SwaggerUiServerConfig {
        let bind_address = settings
            .get_string("bind_address")
            .unwrap_or("0.0.0.0".to_string());
        let port = settings.get_int("port").unwrap_or(8080) as u16;
        let workers = settings.get_int("workers").unwrap_or(2) as usize;
        let mount_path = settings
            .get_string("mount_path")
            .unwrap_or("/docs".to_string());
        let assets_dir = settings
            .get_string("assets_dir")
            .unwrap_or(swaggerui::DEFAULT_ASSETS_DIR.to_string());
        let template_dir = settings
            .get_string("template_dir")
            .ok()
            .filter(|x| !x.is_empty());
        let template_autoreload = settings.get_bool("template_autoreload").unwrap_or(false);
        let external_config_url = settings
            .get_string("external_config_url")
            .ok()
            .filter(|x| !x.is_empty());
        let deep_linking = settings.get_bool("deep_linking").unwrap_or(true);
        let spec_refs = settings.get::<Vec<SpecRef>>("specs").unwrap_or_default();
        SwaggerUiServerConfig {
            bind_address,
            port,
            workers,
            mount_path,
            assets_dir,
            template_dir,
            template_autoreload,
            ui: swaggerui::Config {
                external_config_url,
                spec_refs,
                deep_linking,
            },
        }
    }

    pub fn get_bind_address(&self) -> &String {
        &self.bind_address
    }

    pub fn get_port(&self) -> &u16 {
        &self.port
    }

    pub fn get_workers(&self) -> &usize {
        &self.workers
    }

    pub fn get_mount_path(&self) -> &String {
        &self.mount_path
    }

    pub fn get_assets_dir(&self) -> &String {
        &self.assets_dir
    }

    pub fn get_template_dir(&self) -> Option<&String> {
        self.template_dir.as_ref()
    }

    pub fn get_template_autoreload(&self) -> bool {
        self.template_autoreload
    }

    pub fn get_ui_config(&self) -> &swaggerui::Config {
        &self.ui
    }
}

lazy_static! {
    pub static ref SERVER_CONFIG: SwaggerUiServerConfig = SwaggerUiServerConfig::new();
}
