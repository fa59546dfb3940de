use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/users.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    /// Reads `APP_BIND`, `PORT` and `APP_DATA_PATH`; unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind = match lookup("APP_BIND") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("ignoring invalid APP_BIND value {value:?}");
                defaults.bind
            }),
            None => defaults.bind,
        };
        let port = match lookup("PORT") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT value {value:?}");
                defaults.port
            }),
            None => defaults.port,
        };
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        Self {
            bind,
            port,
            data_path,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
