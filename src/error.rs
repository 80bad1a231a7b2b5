use std::fmt;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    UnknownFlag(String),
    InvalidNumber(String, String),
    MissingValues(String, usize),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(arg) => {
                write!(f, "
                    \rUnknown argument {arg}",
                )
            }
            ConfigError::InvalidNumber(flag, arg) => {
                write!(f, "
                    \rInvalid value for {flag}: {arg} is not a number",
                )
            }
            ConfigError::MissingValues(flag, count) => {
                write!(f, "
                    \r{flag} expects {count} value(s)",
                )
            }
        }
    }
}
impl std::error::Error for ConfigError {}
