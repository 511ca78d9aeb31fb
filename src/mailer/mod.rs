pub mod config;
pub mod error;
pub mod list;
pub mod message;
pub mod transport;

use crate::mailer::config::SmtpConfig;
use crate::mailer::error::MailerError::NoRecipient;
use crate::mailer::error::Result;
use crate::mailer::list::AddressList;
use crate::mailer::message::{Attachment, Email};
use crate::mailer::transport::{SmtpTransport, Transport};
use log::{error, info};

/// Send a plain-text email, with optional attachments, through the configured SMTP account.
///
/// `destinations` and `files` are either `;`-separated strings or collections of strings.
/// Attachments are all read before any connection is made:
/// a single unreadable file aborts the whole send.
pub fn send_mail<D, F>(
    destinations: D,
    subject: &str,
    message: &str,
    files: F,
    config: &SmtpConfig,
) -> Result<()>
where
    D: Into<AddressList>,
    F: Into<AddressList>,
{
    send_mail_with(
        &SmtpTransport::new(config),
        destinations,
        subject,
        message,
        files,
        config,
    )
}

/// Same as [`send_mail`], delivering through the given transport.
pub fn send_mail_with<T, D, F>(
    transport: &T,
    destinations: D,
    subject: &str,
    message: &str,
    files: F,
    config: &SmtpConfig,
) -> Result<()>
where
    T: Transport,
    D: Into<AddressList>,
    F: Into<AddressList>,
{
    let destinations = destinations.into();
    let files = files.into();
    if destinations.is_empty() {
        error!("No recipient to send the message to.");
        return Err(NoRecipient);
    }

    let attachments = files
        .iter()
        .map(|path| Attachment::read(path))
        .collect::<Result<Vec<_>>>()?;
    let email = Email::new(
        config.sender_name().clone(),
        config.sender_email().clone(),
        destinations.to_vec(),
        subject.to_owned(),
        message.to_owned(),
        attachments,
    );
    let envelope = email.into_envelope()?;

    transport.send(&envelope)?;
    info!(
        "Message sent to {} recipient(s) with {} attachment(s).",
        envelope.recipients().len(),
        files.len()
    );
    Ok(())
}
