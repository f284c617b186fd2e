// Copyright 2025 Alexandre D. Díaz
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use url::{ParseError, Url};

use crate::config::{Config, UiConfig};
use crate::error::Error;
use crate::path;

pub const SPECS_PATH: &str = "/specs";

/// A local spec file proxied by the UI scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSpecFile {
    /// Route relative to the UI mount point, e.g. `/specs/openapi.yaml`.
    pub route: String,
    pub path: PathBuf,
}

/// Filesystem path of a relative reference: query and fragment dropped,
/// percent escapes decoded. Relative paths stay relative to the working dir.
fn spec_file_path(raw: &str) -> Result<PathBuf, Error> {
    let ref_path = raw.split(['?', '#']).next().unwrap_or_default();
    let decoded = urlencoding::decode(ref_path).map_err(|_| Error::SpecFileName(raw.to_string()))?;
    Ok(PathBuf::from(decoded.into_owned()))
}

fn spec_file_name(raw: &str, file_path: &Path) -> Result<String, Error> {
    let name = file_path
        .file_name()
        .and_then(|x| x.to_str())
        .filter(|x| !x.contains(['{', '}']))
        .ok_or_else(|| Error::SpecFileName(raw.to_string()))?;
    Ok(name.to_string())
}

/// Resolves `config` for a UI mounted at `base_url`.
///
/// Spec refs holding an absolute URL pass through untouched. Everything that
/// parses as a relative reference is a local file path: it gets a route under
/// [`SPECS_PATH`] and its URL is rewritten to that route.
pub fn resolve(mut config: Config, base_url: &str) -> Result<(UiConfig, Vec<LocalSpecFile>), Error> {
    let mut local_specs: Vec<LocalSpecFile> = Vec::new();
    let mut routes: HashSet<String> = HashSet::new();

    for spec_ref in config.spec_refs.iter_mut() {
        match Url::parse(&spec_ref.url) {
            Ok(_) => {
                log::debug!("spec '{}' uses the remote url {}", &spec_ref.name, &spec_ref.url);
            }
            Err(ParseError::RelativeUrlWithoutBase) => {
                let file_path = spec_file_path(&spec_ref.url)?;
                let file_name = spec_file_name(&spec_ref.url, &file_path)?;
                // actix matches routes against the decoded request path
                let route = path::join(SPECS_PATH, &file_name);
                if !routes.insert(route.clone()) {
                    return Err(Error::DuplicateSpecRoute(path::join(base_url, &route)));
                }
                let public_url = path::join(
                    base_url,
                    &path::join(SPECS_PATH, &urlencoding::encode(&file_name)),
                );
                log::info!("serving spec '{}' from {} at {}", &spec_ref.name, file_path.display(), &public_url);
                local_specs.push(LocalSpecFile {
                    route,
                    path: file_path,
                });
                spec_ref.url = public_url;
            }
            Err(err) => {
                return Err(Error::SpecUrl {
                    url: spec_ref.url.clone(),
                    source: err,
                });
            }
        }
    }

    let ui_config = UiConfig {
        config,
        base_url: path::normalize(base_url),
    };
    Ok((ui_config, local_specs))
}
