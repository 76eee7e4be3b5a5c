//! Interactive collection of email credentials

use std::io::{self, BufRead, Write};

use crate::errors::{EmailError, EmailResult};
use super::config::EmailConfig;

/// Prompt on the terminal; the password is read without echo.
pub fn prompt_email_config() -> EmailResult<EmailConfig> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt_email_config_with(&mut input, &mut output, |label| rpassword::prompt_password(label))
}

/// Prompt using the given streams. `read_password` receives the prompt label.
pub fn prompt_email_config_with<R, W, P>(
    input: &mut R,
    output: &mut W,
    read_password: P,
) -> EmailResult<EmailConfig>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> io::Result<String>,
{
    let user = prompt_line(input, output, "Sender email address: ")?;
    let password = loop {
        let value = read_password("Password: ")
            .map_err(|e| EmailError::Prompt(format!("failed to read password: {}", e)))?;
        let value = value.trim_end_matches(['\r', '\n']).to_string();
        if !value.is_empty() {
            break value;
        }
        writeln!(output, "Password must not be empty")?;
    };
    let receiver = prompt_line(input, output, "Receiver email address: ")?;

    let config = EmailConfig::new(user, password, receiver);
    config.validate()?;
    Ok(config)
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> EmailResult<String> {
    loop {
        write!(output, "{}", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(EmailError::Prompt(format!("unexpected end of input at '{}'", label.trim())));
        }
        let value = line.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        writeln!(output, "Value must not be empty")?;
    }
}
