use crate::mailer::config::SmtpConfig;
use crate::mailer::error::TransportError;
use crate::mailer::error::TransportError::{
    CantConnectToSmtpServer, CantSendMessage, CantStartRuntime,
};
use crate::mailer::message::Envelope;
use crate::tools::log_message_and_return;
use log::debug;
use mail_send::SmtpClientBuilder;
use mail_send::smtp::message::Message;
use tokio::runtime::{Builder, Runtime};

/// Something able to deliver an envelope in a single transaction.
pub trait Transport {
    fn send(&self, envelope: &Envelope) -> Result<(), TransportError>;
}

/// Deliver through the SMTP account described by the config.
/// Each send opens its own connection, authenticates, then closes it.
pub struct SmtpTransport<'a> {
    config: &'a SmtpConfig,
}

impl<'a> SmtpTransport<'a> {
    pub fn new(config: &'a SmtpConfig) -> Self {
        Self { config }
    }

    async fn connect_and_send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        let config = self.config;
        debug!(
            "Connecting to {}:{} [implicit TLS: {}]...",
            config.server(),
            config.port(),
            config.use_ssl()
        );
        let smtp_client = SmtpClientBuilder::new(config.server().clone(), *config.port())
            .implicit_tls(*config.use_ssl())
            .credentials((config.login().clone(), config.password().clone()))
            .connect()
            .await;

        smtp_client
            .map_err(log_message_and_return(
                "Couldn't connect to SMTP server",
                CantConnectToSmtpServer,
            ))?
            .send(create_message(envelope))
            .await
            .map_err(log_message_and_return(
                "Couldn't send message",
                CantSendMessage,
            ))
    }
}

impl Transport for SmtpTransport<'_> {
    fn send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        build_runtime()?.block_on(self.connect_and_send(envelope))
    }
}

fn build_runtime() -> Result<Runtime, TransportError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(log_message_and_return(
            "Couldn't start runtime",
            CantStartRuntime,
        ))
}

fn create_message(envelope: &Envelope) -> Message<'_> {
    envelope
        .recipients()
        .iter()
        .fold(
            Message::empty().from(envelope.sender().as_str()),
            |message, recipient| message.to(recipient.as_str()),
        )
        .body(envelope.body().as_slice())
}
