// Mailing of the compressed results
pub mod config;
pub mod prompt;
pub mod service;

pub use config::EmailConfig;
pub use prompt::{prompt_email_config, prompt_email_config_with};
pub use service::{build_message, send_files, Mailer, SmtpMailer};
