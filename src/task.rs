use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Failure;

/// The functional mode of a request. The wire names (`proofreader`,
/// `translator`) are also the keys used in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskType {
    #[serde(rename = "proofreader")]
    Proofread,
    #[serde(rename = "translator")]
    Translate,
}

impl TaskType {
    pub const ALL: [TaskType; 2] = [TaskType::Proofread, TaskType::Translate];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Proofread => "proofreader",
            TaskType::Translate => "translator",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Failure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "proofreader" => Ok(TaskType::Proofread),
            "translator" => Ok(TaskType::Translate),
            other => Err(Failure::UnknownTaskType(other.to_string())),
        }
    }
}
