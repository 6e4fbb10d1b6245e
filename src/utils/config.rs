use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: String,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            data_file: env::var("SHOP_DATA_FILE")
                .unwrap_or("products.json".to_string())
                .to_string(),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_string(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_string(),
        };

        tracing::debug!(
            "Config: successfully loaded for {} environment",
            config.environment
        );
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.data_file.is_empty() {
            return Err(anyhow::anyhow!("SHOP_DATA_FILE must not be empty"));
        }

        if !self.data_file.ends_with(".json") {
            return Err(anyhow::anyhow!(
                "SHOP_DATA_FILE must point to a .json file"
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
