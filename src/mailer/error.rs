use thiserror::Error;

pub type Result<T, E = MailerError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum MailerError {
    #[error("Can't read attachment [path: {0}]")]
    Attachment(String),
    #[error("No recipient to send the message to.")]
    NoRecipient,
    #[error("Can't compose the message.")]
    CantComposeMessage,
    #[error("Can't send the message.")]
    Send(#[from] TransportError),
}

#[derive(Debug, Error, PartialEq)]
pub enum TransportError {
    #[error("Can't start the runtime driving the SMTP session.")]
    CantStartRuntime,
    #[error("Can't connect to SMTP server.")]
    CantConnectToSmtpServer,
    #[error("Can't send message.")]
    CantSendMessage,
}
