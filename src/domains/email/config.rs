//! Email settings stored in `$HOME/.config/pdfebc/config.ini`
//!
//! ```ini
//! [EMAIL]
//! user = sender@example.com
//! pass = password
//! receiver = receiver@example.com
//! ```

use ini::{EscapePolicy, Ini};
use lettre::message::Mailbox;
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{EmailError, EmailResult};

pub const CONFIG_RELATIVE_PATH: &str = ".config/pdfebc/config.ini";
pub const SECTION_KEY: &str = "EMAIL";
pub const USER_KEY: &str = "user";
pub const PASSWORD_KEY: &str = "pass";
pub const RECEIVER_KEY: &str = "receiver";
/// Key written by older versions of the tool
const LEGACY_RECEIVER_KEY: &str = "reciever";

/// Credentials and recipient used to mail the compressed files
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub user: String,
    pub password: String,
    pub receiver: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("receiver", &self.receiver)
            .finish()
    }
}

impl EmailConfig {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            receiver: receiver.into(),
        }
    }

    /// `$HOME/.config/pdfebc/config.ini`
    pub fn default_path() -> EmailResult<PathBuf> {
        let home = env::var("HOME")
            .map_err(|_| EmailError::Config("HOME is not set, cannot locate config file".to_string()))?;
        Ok(Path::new(&home).join(CONFIG_RELATIVE_PATH))
    }

    pub fn read_from(path: &Path) -> EmailResult<Self> {
        let ini = Ini::load_from_file_noescape(path).map_err(|e| match e {
            ini::Error::Io(io) => EmailError::Io(io),
            ini::Error::Parse(parse) => EmailError::Config(parse.to_string()),
        })?;
        let config = Self::from_ini(&ini)?;
        log::debug!("Read email config for {} from {}", config.user, path.display());
        Ok(config)
    }

    fn from_ini(ini: &Ini) -> EmailResult<Self> {
        let section = ini.section(Some(SECTION_KEY));
        let get = |key: &str| -> Option<String> {
            section
                .and_then(|props| props.get(key))
                .map(|value| value.trim().to_string())
        };
        let require = |key: &str| get(key).ok_or_else(|| EmailError::missing_attribute(SECTION_KEY, key));

        let user = require(USER_KEY)?;
        let password = require(PASSWORD_KEY)?;
        let receiver = match get(RECEIVER_KEY).or_else(|| get(LEGACY_RECEIVER_KEY)) {
            Some(receiver) => receiver,
            None => return Err(EmailError::missing_attribute(SECTION_KEY, RECEIVER_KEY)),
        };

        Ok(Self { user, password, receiver })
    }

    /// Write the config, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> EmailResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut ini = Ini::new();
        ini.with_section(Some(SECTION_KEY))
            .set(USER_KEY, self.user.as_str())
            .set(PASSWORD_KEY, self.password.as_str())
            .set(RECEIVER_KEY, self.receiver.as_str());
        ini.write_to_file_policy(path, EscapePolicy::Nothing)?;
        log::info!("Wrote email config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> EmailResult<()> {
        for (key, value) in [
            (USER_KEY, &self.user),
            (PASSWORD_KEY, &self.password),
            (RECEIVER_KEY, &self.receiver),
        ] {
            if value.trim().is_empty() {
                return Err(EmailError::Config(format!(
                    "Attribute '{}' in section '{}' is empty!",
                    key, SECTION_KEY
                )));
            }
        }
        self.user.parse::<Mailbox>()?;
        self.receiver.parse::<Mailbox>()?;
        Ok(())
    }
}
