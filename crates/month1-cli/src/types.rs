use clap::ValueEnum;
use month1_types::{Destination, SessionType};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SessionArg {
    Theory,
    TellAndShow,
    Complementary,
}

impl From<SessionArg> for SessionType {
    fn from(arg: SessionArg) -> Self {
        match arg {
            SessionArg::Theory => SessionType::Theory,
            SessionArg::TellAndShow => SessionType::TellAndShow,
            SessionArg::Complementary => SessionType::Complementary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum DestinationArg {
    Theory,
    HandsOn,
    RealLife,
    TellAndShow,
    Events,
}

impl From<DestinationArg> for Destination {
    fn from(arg: DestinationArg) -> Self {
        match arg {
            DestinationArg::Theory => Destination::Theory,
            DestinationArg::HandsOn => Destination::HandsOn,
            DestinationArg::RealLife => Destination::RealLife,
            DestinationArg::TellAndShow => Destination::TellAndShow,
            DestinationArg::Events => Destination::Events,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewStyle {
    Compact,
    Standard,
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStyle::Compact => write!(f, "compact"),
            ViewStyle::Standard => write!(f, "standard"),
        }
    }
}
