use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::path::{Path, PathBuf};
use tokio::{fs, task};

use crate::errors::{EmailError, EmailResult};
use super::config::EmailConfig;

pub const SMTP_SERVER: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;
pub const DEFAULT_SUBJECT: &str = "PDF files from pdfebc";

/// Delivers assembled messages
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: Message) -> EmailResult<()>;
}

/// SMTP delivery with STARTTLS and login
pub struct SmtpMailer {
    server: String,
    port: u16,
    credentials: Credentials,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            server: SMTP_SERVER.to_string(),
            port: SMTP_PORT,
            credentials: Credentials::new(config.user.clone(), config.password.clone()),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: Message) -> EmailResult<()> {
        let server = self.server.clone();
        let port = self.port;
        let credentials = self.credentials.clone();

        // lettre's SmtpTransport blocks, so keep it off the async workers
        task::spawn_blocking(move || -> EmailResult<()> {
            let transport = SmtpTransport::starttls_relay(&server)?
                .port(port)
                .credentials(credentials)
                .build();
            let response = transport.send(&message)?;
            log::info!("Email accepted by {} with code {}", server, response.code());
            Ok(())
        })
        .await
        .map_err(|e| EmailError::Internal(format!("Task join error: {}", e)))?
    }
}

/// Assemble a multipart message with one attachment per path.
pub async fn build_message(
    config: &EmailConfig,
    subject: &str,
    body: &str,
    attachments: &[PathBuf],
) -> EmailResult<Message> {
    let content_type = ContentType::parse(mime::APPLICATION_PDF.as_ref())
        .map_err(|e| EmailError::Build(e.to_string()))?;

    let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(body.to_string()));
    for path in attachments {
        let data = fs::read(path).await?;
        multipart = multipart.singlepart(
            Attachment::new(attachment_name(path)).body(data, content_type.clone()),
        );
    }

    let message = Message::builder()
        .from(config.user.parse::<Mailbox>()?)
        .to(config.receiver.parse::<Mailbox>()?)
        .subject(subject)
        .multipart(multipart)?;
    Ok(message)
}

fn attachment_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Email `paths` to the configured receiver with the default subject and an empty body.
pub async fn send_files(config: &EmailConfig, paths: &[PathBuf], mailer: &dyn Mailer) -> EmailResult<()> {
    log::info!("Sending {} files to {}", paths.len(), config.receiver);
    let message = build_message(config, DEFAULT_SUBJECT, "", paths).await?;
    mailer.send(message).await
}
