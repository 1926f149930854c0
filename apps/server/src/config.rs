//! Environment-driven server configuration.

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// GeoNames account used for nearby-article lookups.
    pub geonames_username: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("WAYMARK_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            geonames_username: std::env::var("GEONAMES_USERNAME")
                .unwrap_or_else(|_| "demo".to_string()),
        }
    }
}
