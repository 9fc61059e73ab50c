use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "Under Process")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl Status {
    /// Accepts the CLI spellings and the sheet literals.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "not-started" | "Not Started" => Ok(Self::NotStarted),
            "under-process" | "in-progress" | "Under Process" => Ok(Self::InProgress),
            "completed" | "Completed" => Ok(Self::Completed),
            _ => anyhow::bail!(
                "invalid status '{s}': must be not-started, under-process, or completed"
            ),
        }
    }

    /// The literal stored in the sheet's Status column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "Under Process",
            Self::Completed => "Completed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::NotStarted => ".",
            Self::InProgress => "*",
            Self::Completed => "x",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub status: Status,
    /// Set only when the status changes, `YYYY-MM-DD HH:MM:SS` local time.
    pub last_updated: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cli_spellings() {
        assert_eq!(Status::parse("not-started").unwrap(), Status::NotStarted);
        assert_eq!(Status::parse("under-process").unwrap(), Status::InProgress);
        assert_eq!(Status::parse("completed").unwrap(), Status::Completed);
    }

    #[test]
    fn parse_sheet_literals() {
        assert_eq!(Status::parse("Not Started").unwrap(), Status::NotStarted);
        assert_eq!(Status::parse("Under Process").unwrap(), Status::InProgress);
        assert_eq!(Status::parse("Completed").unwrap(), Status::Completed);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Status::parse("done").is_err());
        assert!(Status::parse("").is_err());
    }

    #[test]
    fn display_matches_sheet_literal() {
        assert_eq!(Status::InProgress.to_string(), "Under Process");
    }
}
