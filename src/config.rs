/// Runtime configuration, read from the environment with local-dev defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub bind_addr: String,
    pub public_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mongodb_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mongodb_database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "wiki".to_string());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            mongodb_uri,
            mongodb_database,
            bind_addr,
            public_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Assumes the test runner does not set these variables.
        let config = AppConfig::from_env();
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.public_dir, "public");
    }
}
