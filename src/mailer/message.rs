use crate::mailer::error::MailerError::{Attachment as AttachmentError, CantComposeMessage};
use crate::mailer::error::Result;
use crate::tools::log_message_and_return;
use chrono::Local;
use derive_getters::Getters;
use log::{debug, error};
use mail_send::mail_builder::MessageBuilder;
use mail_send::mail_builder::headers::raw::Raw;
use std::fs;
use std::path::Path;

const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file to join to an email.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Attachment {
    filename: String,
    contents: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: String, contents: Vec<u8>) -> Self {
        Self { filename, contents }
    }

    /// Read the whole file. The attachment is named after the base name of the path.
    pub fn read(path: &str) -> Result<Self> {
        let contents = fs::read(path).map_err(|e| {
            error!("Can't read attachment `{path}`.\n{e:#?}");
            AttachmentError(path.to_owned())
        })?;
        let filename = Path::new(path)
            .file_name()
            .map(|filename| filename.to_string_lossy().into_owned())
            .ok_or_else(|| {
                error!("Attachment `{path}` doesn't name a file.");
                AttachmentError(path.to_owned())
            })?;
        debug!("Read {} bytes from attachment `{path}`.", contents.len());

        Ok(Self::new(filename, contents))
    }
}

/// What is actually handed over to a transport: one SMTP transaction.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Envelope {
    sender: String,
    recipients: Vec<String>,
    body: Vec<u8>,
}

impl Envelope {
    pub fn new(sender: String, recipients: Vec<String>, body: Vec<u8>) -> Self {
        Self {
            sender,
            recipients,
            body,
        }
    }
}

#[derive(Debug)]
pub struct Email {
    sender_name: String,
    sender_email: String,
    recipients: Vec<String>,
    subject: String,
    text_body: String,
    attachments: Vec<Attachment>,
}

impl Email {
    pub fn new(
        sender_name: String,
        sender_email: String,
        recipients: Vec<String>,
        subject: String,
        text_body: String,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            sender_name,
            sender_email,
            recipients,
            subject,
            text_body,
            attachments,
        }
    }

    fn create_message(&self) -> MessageBuilder<'_> {
        let recipients = self
            .recipients
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let message = MessageBuilder::new()
            .from((self.sender_name.as_str(), self.sender_email.as_str()))
            .to(recipients)
            .header("Date", Raw::new(Local::now().to_rfc2822()))
            .subject(self.subject.as_str())
            .text_body(self.text_body.as_str());

        self.attachments
            .iter()
            .fold(message, |message, attachment| {
                message.attachment(
                    ATTACHMENT_CONTENT_TYPE,
                    attachment.filename.as_str(),
                    attachment.contents.as_slice(),
                )
            })
    }

    /// Render the MIME message and wrap it with the SMTP sender and recipients.
    pub fn into_envelope(self) -> Result<Envelope> {
        let body = self
            .create_message()
            .write_to_vec()
            .map_err(log_message_and_return(
                "Couldn't compose message",
                CantComposeMessage,
            ))?;

        Ok(Envelope::new(self.sender_email, self.recipients, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test::tests::create_file;
    use mail_parser::{MessageParser, MimeHeaders};

    const TEST_EMAIL_SENDER_NAME: &str = "Maillog e-mail";
    const TEST_EMAIL_SENDER_ADDRESS: &str = "sender@provider.com";
    const TEST_SUBJECT: &str = "This is a subject";
    const TEST_TEXT_BODY: &str = "This is a slightly less important email";
    const TEST_BINARY_CONTENTS: &[u8] = &[0x00, 0xff, 0x10, 0x80, 0x7f, 0xfe, 0x01, 0xc3];

    fn create_email(
        recipients: &[&str],
        subject: &str,
        text_body: &str,
        attachments: Vec<Attachment>,
    ) -> Email {
        Email::new(
            TEST_EMAIL_SENDER_NAME.to_owned(),
            TEST_EMAIL_SENDER_ADDRESS.to_owned(),
            recipients.iter().map(|recipient| recipient.to_string()).collect(),
            subject.to_owned(),
            text_body.to_owned(),
            attachments,
        )
    }

    fn find_header<'a>(message: &'a str, name: &str) -> Option<&'a str> {
        let prefix = format!("{name}: ");
        message
            .lines()
            .find(|line| line.starts_with(&prefix))
            .map(|line| &line[prefix.len()..])
    }

    fn generate_contents(length: usize) -> Vec<u8> {
        (0..length).map(|i| (i * 7 % 256) as u8).collect()
    }

    // region Attachment
    #[test]
    fn should_read_attachment() {
        let path = create_file("report.bin", TEST_BINARY_CONTENTS);

        let attachment = Attachment::read(path.to_str().unwrap()).unwrap();

        assert_eq!("report.bin", attachment.filename());
        assert_eq!(TEST_BINARY_CONTENTS, attachment.contents().as_slice());
    }

    #[test]
    fn should_fail_to_read_missing_attachment() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = "/this/file/does/not/exist.txt";

        let result = Attachment::read(path);

        assert_eq!(Err(AttachmentError(path.to_owned())), result);
    }
    // endregion

    // region Email
    #[test]
    fn should_render_headers() {
        let recipients = ["a@x.com", "b@x.com", "c@x.com"];
        let email = create_email(&recipients, TEST_SUBJECT, TEST_TEXT_BODY, vec![]);

        let envelope = email.into_envelope().unwrap();

        let message = String::from_utf8(envelope.body().clone()).unwrap();
        assert_eq!(
            Some(r#""Maillog e-mail" <sender@provider.com>"#),
            find_header(&message, "From")
        );
        assert_eq!(
            Some("<a@x.com>, <b@x.com>, <c@x.com>"),
            find_header(&message, "To")
        );
        assert_eq!(Some(TEST_SUBJECT), find_header(&message, "Subject"));
        assert!(find_header(&message, "Date").is_some());
    }

    #[test]
    fn should_create_envelope() {
        let email = create_email(&["a@x.com", "b@x.com"], TEST_SUBJECT, TEST_TEXT_BODY, vec![]);

        let envelope = email.into_envelope().unwrap();

        assert_eq!(TEST_EMAIL_SENDER_ADDRESS, envelope.sender());
        assert_eq!(&vec!["a@x.com", "b@x.com"], envelope.recipients());
        let message = MessageParser::default()
            .parse(envelope.body().as_slice())
            .unwrap();
        let from = message.from().and_then(|from| from.first()).unwrap();
        assert_eq!(Some(TEST_EMAIL_SENDER_NAME), from.name());
        assert_eq!(Some(TEST_EMAIL_SENDER_ADDRESS), from.address());
        let recipients = message
            .to()
            .unwrap()
            .iter()
            .filter_map(|recipient| recipient.address())
            .collect::<Vec<_>>();
        assert_eq!(vec!["a@x.com", "b@x.com"], recipients);
        assert!(message.date().is_some());
        assert_eq!(1, message.text_body_count());
        assert_eq!(0, message.attachment_count());
    }

    #[test]
    fn should_keep_utf8_subject_and_multiline_body_intact() {
        let subject = "Olá ação — résumé";
        let text_body = "Bonjour,\nvoici le résumé : ça marche ✓\n\nÀ bientôt,\nMaillog";
        let email = create_email(&["a@x.com"], subject, text_body, vec![]);

        let envelope = email.into_envelope().unwrap();

        let message = MessageParser::default()
            .parse(envelope.body().as_slice())
            .unwrap();
        assert_eq!(Some(subject), message.subject());
        assert_eq!(1, message.text_body_count());
        assert_eq!(text_body, message.body_text(0).unwrap());
    }

    #[test]
    fn should_join_attachments_as_base64() {
        let large_contents = generate_contents(4096);
        let attachments = vec![
            Attachment::new("first.bin".to_owned(), TEST_BINARY_CONTENTS.to_vec()),
            Attachment::new("second.bin".to_owned(), large_contents.clone()),
        ];
        let email = create_email(&["a@x.com"], TEST_SUBJECT, TEST_TEXT_BODY, attachments);

        let envelope = email.into_envelope().unwrap();

        let raw_message = String::from_utf8(envelope.body().clone()).unwrap();
        assert!(raw_message.matches("Content-Transfer-Encoding: base64").count() >= 2);
        let message = MessageParser::default()
            .parse(envelope.body().as_slice())
            .unwrap();
        assert_eq!(1, message.text_body_count());
        assert_eq!(TEST_TEXT_BODY, message.body_text(0).unwrap());
        assert_eq!(2, message.attachment_count());
        let attachments = message
            .attachments()
            .map(|part| {
                let content_type = part.content_type().unwrap();
                assert_eq!("application", content_type.ctype());
                assert_eq!(Some("octet-stream"), content_type.subtype());
                (part.attachment_name().unwrap(), part.contents())
            })
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("first.bin", TEST_BINARY_CONTENTS),
                ("second.bin", large_contents.as_slice()),
            ],
            attachments
        );
    }
    // endregion
}
