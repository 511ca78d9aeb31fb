use crate::mailer::config::{CONFIG_ARGS, SmtpConfig};
use crate::mailer::error::Result;
use crate::mailer::send_mail_with;
use crate::mailer::transport::Transport;
use crate::tools::env_args::positional_args;
use log::debug;

const DEFAULT_PROGRAM_NAME: &str = "maillog";
const HELP_ARGS: [&str; 2] = ["-h", "--help"];
const MIN_POSITIONAL_ARGS: usize = 4;
const MAX_POSITIONAL_ARGS: usize = 5;

/// What the command line asks for.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    Usage { program: &'a str },
    Send {
        destinations: &'a str,
        subject: &'a str,
        message: &'a str,
        files: Option<&'a str>,
    },
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    UsagePrinted,
    Sent,
}

/// Read the positional args: `<program> <destinations> <subject> <message> [<files>]`.
/// Configuration args (`--smtp-server=...` and the like) are not positional.
pub fn parse_command(args: &[String]) -> Command<'_> {
    let positional = positional_args(args, &CONFIG_ARGS);
    let program = positional.first().copied().unwrap_or(DEFAULT_PROGRAM_NAME);
    let asks_for_help = positional
        .get(1)
        .is_some_and(|arg| HELP_ARGS.contains(arg));
    let expected_count = (MIN_POSITIONAL_ARGS..=MAX_POSITIONAL_ARGS).contains(&positional.len());
    if asks_for_help || !expected_count {
        return Command::Usage { program };
    }

    Command::Send {
        destinations: positional[1],
        subject: positional[2],
        message: positional[3],
        files: positional.get(4).copied(),
    }
}

pub fn usage(program: &str) -> String {
    let config_args = CONFIG_ARGS
        .iter()
        .map(|arg| format!("  {arg}=<value>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"Usage: {program} "<destination email addresses>" "<subject>" "<message>" ["<attachments>"]
Example: {program} "bob@gmail.com; ann@gmail.com" "Maillog test" "If you received this, it worked!"

In case of a single recipient, the first argument may not need quotes. For example:
{program} bob@gmail.com "Maillog test" "If you received this, it worked!"

Attachments are paths separated by `;`. For example:
{program} bob@gmail.com "Maillog test" "Files attached." "report.pdf; /tmp/picture.png"

The SMTP account can be set up with the following arguments:
{config_args}"#
    )
}

/// Run the command line: either print the usage or send the message through the transport.
pub fn run_with<T: Transport>(
    transport: &T,
    args: &[String],
    config: &SmtpConfig,
) -> Result<Outcome> {
    match parse_command(args) {
        Command::Usage { program } => {
            println!("{}", usage(program));
            Ok(Outcome::UsagePrinted)
        }
        Command::Send {
            destinations,
            subject,
            message,
            files,
        } => {
            debug!("Sending message with {config:?}");
            send_mail_with(transport, destinations, subject, message, files, config)?;
            println!("Successfully sent email");
            Ok(Outcome::Sent)
        }
    }
}
