use secrecy::SecretString;
use std::env;

/// Scoring constants read by the progression core. The core never mutates
/// these; they are wired once at startup.
#[derive(Clone, Copy, Debug)]
pub struct ScoringConfig {
    pub base_score: i64,
    pub penalty_per_attempt: i64,
    pub passing_percentage: i64,
    pub max_attempts_for_hint: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            penalty_per_attempt: 5,
            passing_percentage: 60,
            max_attempts_for_hint: 3,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub users_collection: String,
    pub activity_results_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub refresh_expiration_hours: i64,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "abaco-local".to_string()),
            users_collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| "users".to_string()),
            activity_results_collection: env::var("ACTIVITY_RESULTS_COLLECTION")
                .unwrap_or_else(|_| "activity_results".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            refresh_expiration_hours: env::var("REFRESH_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(168),
            scoring: ScoringConfig {
                base_score: env::var("BASE_SCORE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(50),
                penalty_per_attempt: env::var("PENALTY_PER_ATTEMPT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
                passing_percentage: env::var("PASSING_PERCENTAGE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
                max_attempts_for_hint: env::var("MAX_ATTEMPTS_FOR_HINT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3),
            },
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "abaco-test".to_string(),
            users_collection: "users".to_string(),
            activity_results_collection: "activity_results".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            refresh_expiration_hours: 168,
            scoring: ScoringConfig::default(),
        }
    }
}
