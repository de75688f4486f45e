/// Runtime settings, all environment-driven. `.env` files are loaded by
/// main before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:book_database.db".to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Config {
            database_url,
            bind_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        // Serial-unsafe env mutation is fine here: no other test in
        // this crate touches these variables.
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("BIND_ADDR");

        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite:book_database.db");
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
    }
}
