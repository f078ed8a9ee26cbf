use anyhow::Context;

use serde::{Deserialize, Serialize};

use tokio::sync::OnceCell;

use tracing::info;

use std::time::Duration;

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfiguration {
    pub bind_address: String,
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_context() -> String {
    "/api/v1".to_owned()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Configuration {
    pub server_configuration: ServerConfiguration,
}

static CONFIGURATION_INSTANCE: OnceCell<Configuration> = OnceCell::const_new();

pub fn parse_configuration(file_contents: &str) -> anyhow::Result<Configuration> {
    let configuration: Configuration =
        toml::from_str(file_contents).context("error parsing config file")?;

    anyhow::ensure!(
        configuration.server_configuration.context.starts_with('/')
            && configuration.server_configuration.context.len() > 1,
        "server_configuration.context must be a non-root path starting with '/', got {:?}",
        configuration.server_configuration.context,
    );

    Ok(configuration)
}

pub async fn read_configuration(config_file: String) -> anyhow::Result<()> {
    info!("reading '{}'", config_file);

    let file_contents = tokio::fs::read_to_string(&config_file)
        .await
        .with_context(|| format!("error reading config file '{config_file}'"))?;

    let configuration = parse_configuration(&file_contents)?;

    info!("configuration\n{:#?}", configuration);

    CONFIGURATION_INSTANCE
        .set(configuration)
        .context("CONFIGURATION_INSTANCE.set error")?;

    Ok(())
}

pub fn instance() -> &'static Configuration {
    CONFIGURATION_INSTANCE
        .get()
        .expect("configuration read before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_configuration() {
        let configuration = parse_configuration(
            r#"
            [server_configuration]
            bind_address = "127.0.0.1:10000"
            context = "/time-api"
            request_timeout = "2s 500ms"
            "#,
        )
        .unwrap();

        let server_configuration = &configuration.server_configuration;
        assert_eq!(server_configuration.bind_address, "127.0.0.1:10000");
        assert_eq!(server_configuration.context, "/time-api");
        assert_eq!(
            server_configuration.request_timeout,
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn context_defaults_to_api_v1() {
        let configuration = parse_configuration(
            r#"
            [server_configuration]
            bind_address = "0.0.0.0:10000"
            request_timeout = "10s"
            "#,
        )
        .unwrap();

        assert_eq!(configuration.server_configuration.context, "/api/v1");
    }

    #[test]
    fn rejects_root_context() {
        let result = parse_configuration(
            r#"
            [server_configuration]
            bind_address = "0.0.0.0:10000"
            context = "/"
            request_timeout = "10s"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_bad_duration() {
        let result = parse_configuration(
            r#"
            [server_configuration]
            bind_address = "0.0.0.0:10000"
            request_timeout = "soon"
            "#,
        );

        assert!(result.is_err());
    }
}
