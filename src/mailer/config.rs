use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

pub const EMAIL_SENDER_NAME_ARG: &str = "--email-sender-name";
pub const EMAIL_SENDER_ADDRESS_ARG: &str = "--email-sender-address";
pub const SMTP_SERVER_ARG: &str = "--smtp-server";
pub const SMTP_PORT_ARG: &str = "--smtp-port";
pub const SMTP_LOGIN_ARG: &str = "--smtp-login";
pub const SMTP_PASSWORD_ARG: &str = "--smtp-password";
pub const SMTP_SSL_ARG: &str = "--smtp-ssl";

/// Every arg `SmtpConfig::from_args` knows about.
pub const CONFIG_ARGS: [&str; 7] = [
    EMAIL_SENDER_NAME_ARG,
    EMAIL_SENDER_ADDRESS_ARG,
    SMTP_SERVER_ARG,
    SMTP_PORT_ARG,
    SMTP_LOGIN_ARG,
    SMTP_PASSWORD_ARG,
    SMTP_SSL_ARG,
];

const DEFAULT_SENDER_NAME: &str = "Maillog e-mail";
const DEFAULT_SENDER_EMAIL: &str = "sender@provider.com";
const DEFAULT_SMTP_SERVER: &str = "mail.provider.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_LOGIN: &str = "sender@provider.com";
const DEFAULT_SMTP_PASSWORD: &str = "smtp_password";
const DEFAULT_USE_SSL: bool = false;

/// External SMTP account used to send messages.
#[derive(Getters, Clone, PartialEq)]
pub struct SmtpConfig {
    sender_name: String,
    sender_email: String,
    server: String,
    port: u16,
    login: String,
    password: String,
    use_ssl: bool,
}

impl SmtpConfig {
    pub fn new(
        sender_name: String,
        sender_email: String,
        server: String,
        port: u16,
        login: String,
        password: String,
        use_ssl: bool,
    ) -> Self {
        Self {
            sender_name,
            sender_email,
            server,
            port,
            login,
            password,
            use_ssl,
        }
    }

    /// Start from the default account and override each value given as a `--name=value` arg.
    pub fn from_args(args: &[String]) -> Self {
        let default = Self::default();
        Self {
            sender_name: retrieve_arg_value(args, EMAIL_SENDER_NAME_ARG)
                .unwrap_or(default.sender_name),
            sender_email: retrieve_arg_value(args, EMAIL_SENDER_ADDRESS_ARG)
                .unwrap_or(default.sender_email),
            server: retrieve_arg_value(args, SMTP_SERVER_ARG).unwrap_or(default.server),
            port: retrieve_parsed_arg_value(args, SMTP_PORT_ARG).unwrap_or(default.port),
            login: retrieve_arg_value(args, SMTP_LOGIN_ARG).unwrap_or(default.login),
            password: retrieve_arg_value(args, SMTP_PASSWORD_ARG).unwrap_or(default.password),
            use_ssl: retrieve_parsed_arg_value(args, SMTP_SSL_ARG).unwrap_or(default.use_ssl),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SENDER_NAME.to_owned(),
            DEFAULT_SENDER_EMAIL.to_owned(),
            DEFAULT_SMTP_SERVER.to_owned(),
            DEFAULT_SMTP_PORT,
            DEFAULT_SMTP_LOGIN.to_owned(),
            DEFAULT_SMTP_PASSWORD.to_owned(),
            DEFAULT_USE_SSL,
        )
    }
}

impl Debug for SmtpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("sender_name", &self.sender_name)
            .field("sender_email", &self.sender_email)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &"********")
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}
