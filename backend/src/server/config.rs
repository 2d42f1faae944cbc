//! Server settings loaded via OrthoConfig and the resolved server config.

use std::io;
use std::net::{IpAddr, SocketAddr};

use cruzo_backend::domain::EmailAddress;
use cruzo_backend::domain::site::{ContactDetails, PhoneNumber};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_WHATSAPP_NUMBER: &str = "+918438347944";
const DEFAULT_CONTACT_EMAIL: &str = "hello@cruzo.care";
const SERVICE_CITY: &str = "Chennai, Tamil Nadu";

/// Values read from `CRUZO_*` environment variables, config files and flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CRUZO")]
pub struct ServerSettings {
    /// IP address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Number behind the WhatsApp and call buttons.
    pub whatsapp_number: Option<String>,
    /// Address behind the email button.
    pub contact_email: Option<String>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp_number
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }

    pub fn contact_email(&self) -> &str {
        self.contact_email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }
}

fn invalid_setting(name: &str, value: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid {name} {value:?}: {err}"),
    )
}

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) contact: ContactDetails,
}

impl ServerConfig {
    /// Resolve settings, rejecting values the server cannot start with.
    pub fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let host = settings.host();
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|err| invalid_setting("host", host, err))?;

        let number = settings.whatsapp_number();
        let whatsapp =
            PhoneNumber::new(number).map_err(|err| invalid_setting("WhatsApp number", number, err))?;

        let email = settings.contact_email();
        let email =
            EmailAddress::new(email).map_err(|err| invalid_setting("contact email", email, err))?;

        Ok(Self {
            bind_addr: SocketAddr::new(ip, settings.port()),
            contact: ContactDetails {
                whatsapp,
                email,
                city: SERVICE_CITY.to_owned(),
            },
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "CRUZO_HOST",
        "CRUZO_PORT",
        "CRUZO_WHATSAPP_NUMBER",
        "CRUZO_CONTACT_EMAIL",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("cruzo-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        let config = ServerConfig::from_settings(&settings).expect("defaults are valid");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.contact.whatsapp.digits(), "918438347944");
        assert_eq!(config.contact.email.as_ref(), "hello@cruzo.care");
    }

    #[rstest]
    fn port_default_applies_alongside_other_overrides() {
        let _guard = lock_env([
            ("CRUZO_HOST", Some("127.0.0.1".to_owned())),
            ("CRUZO_PORT", None),
            ("CRUZO_WHATSAPP_NUMBER", None),
            ("CRUZO_CONTACT_EMAIL", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.whatsapp_number(), DEFAULT_WHATSAPP_NUMBER);
        let config = ServerConfig::from_settings(&settings).expect("defaults are valid");
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CRUZO_HOST", Some("127.0.0.1".to_owned())),
            ("CRUZO_PORT", Some("3000".to_owned())),
            ("CRUZO_WHATSAPP_NUMBER", Some("+91 90000 11111".to_owned())),
            ("CRUZO_CONTACT_EMAIL", Some("bookings@cruzo.care".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::from_settings(&settings).expect("overrides are valid");
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.contact.whatsapp.digits(), "919000011111");
        assert_eq!(config.contact.email.as_ref(), "bookings@cruzo.care");
    }

    #[rstest]
    #[case(Some("localhost"), None, "host")]
    #[case(None, Some("not a number"), "WhatsApp number")]
    #[case(None, None, "contact email")]
    fn invalid_values_fail_start_up(
        #[case] host: Option<&str>,
        #[case] whatsapp_number: Option<&str>,
        #[case] setting: &str,
    ) {
        let settings = ServerSettings {
            host: host.map(str::to_owned),
            port: 8080,
            whatsapp_number: whatsapp_number.map(str::to_owned),
            contact_email: Some(if setting == "contact email" {
                "nobody".to_owned()
            } else {
                DEFAULT_CONTACT_EMAIL.to_owned()
            }),
        };

        let err = ServerConfig::from_settings(&settings).expect_err("invalid setting");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains(setting), "{err}");
    }
}
