//! Server configuration
//!
//! Values come from command-line flags, falling back to environment
//! variables and then to the defaults below.

use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 8000;

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "BULLS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "BULLS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub const fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT)
    }
}
