//! Config file discovery, CLI flag overrides, and interactive credential
//! prompts on top of `omada_api::Config`.

use std::io::IsTerminal;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::{debug, info};

use omada_api::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

const FILE_NAME: &str = "config.yml";

/// Platform config location, e.g. `~/.config/omada/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "omada", "omada").map(|dirs| dirs.config_dir().join(FILE_NAME))
}

/// Pick the config file: `--config` if given, else `./config.yml`, else the
/// platform config path. `None` means no file was found.
fn resolve_path(global: &GlobalOpts) -> Option<PathBuf> {
    if let Some(ref path) = global.config {
        return Some(path.clone());
    }
    std::iter::once(PathBuf::from(FILE_NAME))
        .chain(user_config_path())
        .find(|p| p.is_file())
}

/// Load the config and apply CLI overrides. An explicit `--config` must
/// exist; otherwise a missing file means built-in defaults.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut config = if let Some(path) = resolve_path(global) {
        debug!(path = %path.display(), "loading config");
        Config::load(&path)?
    } else {
        info!("no config file found, using defaults");
        Config::load_or_default(FILE_NAME)?
    };

    if let Some(ref site) = global.site {
        config.site.clone_from(site);
    }
    if global.insecure {
        config.verify = false;
    }
    Ok(config)
}

/// Prompt for whatever credentials the config lacks. Fails with
/// `NoCredentials` when stdin is not a terminal.
pub fn ensure_credentials(config: Config) -> Result<Config, CliError> {
    if config.has_credentials() {
        return Ok(config);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NoCredentials);
    }

    let username = match config.username.clone() {
        Some(name) => name,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Omada login")
            .interact_text()?,
    };
    let password = match config.password.clone() {
        Some(pw) => pw,
        None => rpassword::prompt_password("password: ")?,
    };

    Ok(config.with_credentials(username, password))
}
