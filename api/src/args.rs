use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser};
use zeus_core::{
    domain::common::{LLMConfig, StorageConfig, ZeusConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "zeus-api", version, about = "Zeus calorie meter API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-3-flash-preview"
    )]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Where the user and history records are kept. Defaults to the platform
    /// data directory.
    #[arg(long = "data-dir", env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for ZeusConfig {
    fn from(args: Args) -> Self {
        ZeusConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            storage: StorageConfig {
                data_dir: args
                    .storage
                    .data_dir
                    .unwrap_or_else(StorageConfig::default_data_dir),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_the_key_is_given() {
        let args = Args::try_parse_from(["zeus-api", "--gemini-api-key", "secret"]).unwrap();

        assert_eq!(args.server.port, 3333);
        assert!(args.server.metrics_enabled);
        assert_eq!(args.llm.gemini_model, "gemini-3-flash-preview");
        assert_eq!(args.llm.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert!(!args.log.json);
    }

    #[test]
    fn origins_are_comma_separated_and_data_dir_reaches_the_config() {
        let args = Args::try_parse_from([
            "zeus-api",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--metrics-enabled",
            "false",
            "--data-dir",
            "/tmp/zeus-data",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(!args.server.metrics_enabled);

        let config = ZeusConfig::from(args);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/zeus-data"));
        assert_eq!(config.llm.gemini_api_key, "secret");
    }
}
