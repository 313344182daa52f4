// Factory Method Pattern - Enum discriminant selects a trait object
// Each call builds a fresh handler; nothing is cached.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoggerKind {
    Memory,
    Redis,
}

impl LoggerKind {
    pub const ALL: [LoggerKind; 2] = [LoggerKind::Memory, LoggerKind::Redis];

    pub fn as_str(self) -> &'static str {
        match self {
            LoggerKind::Memory => "memory",
            LoggerKind::Redis => "redis",
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw discriminants: `0` is memory, `1` is redis.
impl TryFrom<u8> for LoggerKind {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(LoggerKind::Memory),
            1 => Ok(LoggerKind::Redis),
            other => Err(PatternError::unsupported_kind(other.to_string())),
        }
    }
}

impl FromStr for LoggerKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(LoggerKind::Memory),
            "redis" => Ok(LoggerKind::Redis),
            _ => Err(PatternError::unsupported_kind(s)),
        }
    }
}

pub trait Logger {
    fn kind(&self) -> LoggerKind;

    fn format(&self, message: &str) -> String;

    fn log(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "{}", self.format(message))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryLogger;

impl Logger for MemoryLogger {
    fn kind(&self) -> LoggerKind {
        LoggerKind::Memory
    }

    fn format(&self, message: &str) -> String {
        format!("Memory Log: {message}")
    }
}

/// Simulated; no connection is made.
#[derive(Debug, Default)]
pub struct RedisLogger;

impl Logger for RedisLogger {
    fn kind(&self) -> LoggerKind {
        LoggerKind::Redis
    }

    fn format(&self, message: &str) -> String {
        format!("Redis Log: {message}")
    }
}

#[derive(Debug, Default)]
pub struct LoggerFactory;

impl LoggerFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_logger(&self, kind: LoggerKind) -> Box<dyn Logger> {
        debug!(%kind, "creating logger");
        match kind {
            LoggerKind::Memory => Box::new(MemoryLogger),
            LoggerKind::Redis => Box::new(RedisLogger),
        }
    }

    pub fn create_logger_named(&self, name: &str) -> Result<Box<dyn Logger>> {
        let kind = name.parse::<LoggerKind>()?;
        Ok(self.create_logger(kind))
    }

    pub fn create_logger_from_discriminant(&self, value: u8) -> Result<Box<dyn Logger>> {
        let kind = LoggerKind::try_from(value)?;
        Ok(self.create_logger(kind))
    }
}

// ============================================================================
// Tests
// ============================================================================
