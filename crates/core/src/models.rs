use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    TaskAssignment,
    ViewEmployeePerformance,
    ViewEmployeesUnderManager,
    UpdateTaskStatus,
    ViewPendingTasks,
    AddUser,
    DeleteUser,
}

impl Intent {
    pub const ALL: [Intent; 7] = [
        Intent::TaskAssignment,
        Intent::ViewEmployeePerformance,
        Intent::ViewEmployeesUnderManager,
        Intent::UpdateTaskStatus,
        Intent::ViewPendingTasks,
        Intent::AddUser,
        Intent::DeleteUser,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TASK_ASSIGNMENT" => Some(Self::TaskAssignment),
            "VIEW_EMPLOYEE_PERFORMANCE" => Some(Self::ViewEmployeePerformance),
            "VIEW_EMPLOYEES_UNDER_MANAGER" => Some(Self::ViewEmployeesUnderManager),
            "UPDATE_TASK_STATUS" => Some(Self::UpdateTaskStatus),
            "VIEW_PENDING_TASKS" => Some(Self::ViewPendingTasks),
            "ADD_USER" => Some(Self::AddUser),
            "DELETE_USER" => Some(Self::DeleteUser),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskAssignment => "TASK_ASSIGNMENT",
            Self::ViewEmployeePerformance => "VIEW_EMPLOYEE_PERFORMANCE",
            Self::ViewEmployeesUnderManager => "VIEW_EMPLOYEES_UNDER_MANAGER",
            Self::UpdateTaskStatus => "UPDATE_TASK_STATUS",
            Self::ViewPendingTasks => "VIEW_PENDING_TASKS",
            Self::AddUser => "ADD_USER",
            Self::DeleteUser => "DELETE_USER",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown intent `{0}`")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownIntent(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Model,
    Fallback,
}

impl ClassificationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}
