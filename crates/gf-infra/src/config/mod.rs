//! Configuration loading
//!
//! Layers, lowest to highest precedence: compiled-in defaults, an optional
//! TOML file, `GF_`-prefixed environment variables (`GF_PUSH__BASE_URL`).

use std::path::Path;

use gf_core::config::AppConfig;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    builder = builder.add_source(config::Environment::with_prefix("GF").separator("__"));

    let config = builder.build()?.try_deserialize()?;
    Ok(config)
}
