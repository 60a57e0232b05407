use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::ValueEnum;

pub const DEFAULT_PORT: u16 = 8080;

/// Which sample set, if any, to load before serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SeedMode {
    #[default]
    None,
    Full,
    Quick,
}

/// Server settings, resolved from flags and environment by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub seed: SeedMode,
    pub verbose: bool,
}

impl ApiConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Default level for the log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed: SeedMode::None,
            verbose: false,
        }
    }
}
