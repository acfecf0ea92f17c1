use beam_sword_lark::client::DEFAULT_BASE_URL as LARK_DEFAULT_BASE_URL;
use beam_sword_llm_sdk::qwen::client::{DEFAULT_BASE_URL as QWEN_DEFAULT_BASE_URL, DEFAULT_MODEL};
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Optional file next to the binary, same keys as the environment
const CONFIG_FILE: &str = "beam-sword";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub lark: LarkConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct LarkConfig {
    pub app_id: String,
    pub app_secret: String,
    pub app_token: String,
    pub table_id: String,
    pub base_url: String,
}

/// Flat view of the environment variables (keys are lower-cased by `config`)
#[derive(Debug, Deserialize)]
struct RawSettings {
    api_key: String,
    bit_table_app_token: String,
    table_id: String,
    lark_app_id: String,
    lark_app_secret: String,
    bs_host: Option<String>,
    bs_port: Option<u16>,
    bs_model: Option<String>,
    bs_dashscope_base_url: Option<String>,
    bs_lark_base_url: Option<String>,
}

impl AppConfig {
    /// Load from `beam-sword.toml` (optional) and the process environment.
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let raw: RawSettings = builder.build()?.try_deserialize()?;

        for (name, value) in [
            ("API_KEY", &raw.api_key),
            ("BIT_TABLE_APP_TOKEN", &raw.bit_table_app_token),
            ("TABLE_ID", &raw.table_id),
            ("LARK_APP_ID", &raw.lark_app_id),
            ("LARK_APP_SECRET", &raw.lark_app_secret),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{name} must not be empty")));
            }
        }

        Ok(Self {
            server: ServerConfig {
                host: raw.bs_host.unwrap_or_else(|| "0.0.0.0".to_string()),
                port: raw.bs_port.unwrap_or(8080),
            },
            llm: LlmConfig {
                api_key: raw.api_key,
                model: raw.bs_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: raw
                    .bs_dashscope_base_url
                    .unwrap_or_else(|| QWEN_DEFAULT_BASE_URL.to_string()),
            },
            lark: LarkConfig {
                app_id: raw.lark_app_id,
                app_secret: raw.lark_app_secret,
                app_token: raw.bit_table_app_token,
                table_id: raw.table_id,
                base_url: raw
                    .bs_lark_base_url
                    .unwrap_or_else(|| LARK_DEFAULT_BASE_URL.to_string()),
            },
        })
    }
}
