use core_config::server::ServerConfig;
use core_config::{env_or_default, ConfigError, Environment, FromEnv};

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    /// REST listener (HOST/PORT, defaults 0.0.0.0:8080)
    pub http: ServerConfig,
    /// gRPC listener (GRPC_HOST/GRPC_PORT, defaults [::1]:50051)
    pub grpc: ServerConfig,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let http = ServerConfig::from_env()?;

        let grpc_host = env_or_default("GRPC_HOST", "[::1]");
        let grpc_port = env_or_default("GRPC_PORT", "50051")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "GRPC_PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            environment: Environment::from_env(),
            http,
            grpc: ServerConfig::new(grpc_host, grpc_port),
        })
    }
}
