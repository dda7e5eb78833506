//! Server configuration loaded via OrthoConfig.
//!
//! Values layer defaults, an optional config file, `LKVK_*` environment
//! variables, and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LKVK")]
pub struct ServerSettings {
    /// Interface to bind. Defaults to all interfaces.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to bind. Defaults to 8080.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the bind address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host and port do not form a socket
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid bind address {}:{}: {err}", self.host, self.port),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("lkvk-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([("LKVK_HOST", None::<String>), ("LKVK_PORT", None::<String>)]);

        let settings = load_from_empty_args();

        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LKVK_HOST", Some("127.0.0.1".to_owned())),
            ("LKVK_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9090);
    }

    #[rstest]
    fn port_override_keeps_the_default_host() {
        let _guard = lock_env([
            ("LKVK_HOST", None::<String>),
            ("LKVK_PORT", Some("9191".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("address parses"),
            SocketAddr::from(([0, 0, 0, 0], 9191))
        );
    }

    #[rstest]
    fn unparseable_hosts_are_reported() {
        let settings = ServerSettings {
            host: "not a host".to_owned(),
            port: DEFAULT_PORT,
        };

        let err = settings.bind_addr().expect_err("invalid host");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
