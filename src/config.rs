use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Process settings, read once at startup. Unset variables fall back to
/// defaults so the binary runs with no environment at all; malformed
/// values abort startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: String,
    pub host: Ipv4Addr,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Settings {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let host = match std::env::var("HOST") {
            Ok(raw) => raw.parse().expect("HOST is not in the correct format"),
            Err(_) => Ipv4Addr::LOCALHOST,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().expect("PORT is not in the correct format"),
            Err(_) => 8000,
        };

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Settings {
            environment,
            host,
            port,
            data_dir,
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
