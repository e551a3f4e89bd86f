use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub model_path: String,
    pub city_encoder_path: String,
    pub property_type_encoder_path: String,
    pub city_price_table_path: String,
    pub margin: Option<f64>,
}

pub fn create_test_config() -> Config {
    Config {
        model_path: "xxx".to_string(),
        city_encoder_path: "xxx".to_string(),
        property_type_encoder_path: "xxx".to_string(),
        city_price_table_path: "xxx".to_string(),
        margin: None,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
