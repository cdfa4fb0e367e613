//! Command-line and environment configuration for the HTTP server

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "textprep-server")]
#[command(about = "HTTP API for the text preprocessing pipeline", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TEXTPREP_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TEXTPREP_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Default log filter; `RUST_LOG` takes precedence
    #[arg(short, long, env = "TEXTPREP_LOG", default_value = "info")]
    pub log_level: String,

    /// Do not send cross-origin headers
    #[arg(long, env = "TEXTPREP_NO_CORS")]
    pub no_cors: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn cors_enabled(&self) -> bool {
        !self.no_cors
    }
}
