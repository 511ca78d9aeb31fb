//! Send short plain-text emails, with optional attachments,
//! through an external SMTP account.

pub mod cli;
pub mod mailer;
mod tools;

pub use mailer::config::SmtpConfig;
pub use mailer::error::{MailerError, TransportError};
pub use mailer::list::AddressList;
pub use mailer::transport::{SmtpTransport, Transport};
pub use mailer::{send_mail, send_mail_with};
pub use tools::env_args::get_env_args;
