use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! text_id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_id_newtype!(SummaryHash);
text_id_newtype!(SummaryId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the summarizer backend found a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    Memory,
    Disk,
    Fresh,
}

impl CacheSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheSource::Memory => "memory",
            CacheSource::Disk => "disk",
            CacheSource::Fresh => "fresh",
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum CacheSourceWire {
    Flag(bool),
    Named(String),
}

impl Serialize for CacheSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CacheSource::Fresh => CacheSourceWire::Flag(false),
            other => CacheSourceWire::Named(other.as_str().to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CacheSource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The backend sends `false` for a fresh summary and a location name otherwise.
        Ok(match CacheSourceWire::deserialize(deserializer)? {
            CacheSourceWire::Flag(_) => CacheSource::Fresh,
            CacheSourceWire::Named(name) => match name.as_str() {
                "memory" => CacheSource::Memory,
                "disk" => CacheSource::Disk,
                _ => CacheSource::Fresh,
            },
        })
    }
}
