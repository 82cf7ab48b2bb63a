//! Shared wire DTOs for the browser/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate with the `ssr` feature and serializes the
//! same types it hands to the browser, so both sides stay on one schema. The
//! record shapes mirror rows owned by the external backend; nothing here
//! enforces invariants on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (UUID string).
    pub id: String,
    /// Sign-in email, if the backend exposes one.
    #[serde(default)]
    pub email: Option<String>,
    /// First name captured at sign-up.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name captured at sign-up.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// Label shown in the dashboard header: the email, else the full name, else the id.
    #[must_use]
    pub fn display_label(&self) -> String {
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            return email.to_owned();
        }
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() { self.id.clone() } else { name }
    }
}

/// A website or application registered for monitoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub is_active: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// One recorded bug-detection run against a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    pub id: String,
    pub project_id: String,
    pub status: ScanStatus,
    pub bugs_found: u64,
    /// RFC 3339 start timestamp.
    pub started_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Scan status as an open set: known values get variants, anything else is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanStatus {
    Completed,
    Running,
    Failed,
    Pending,
    Other(String),
}

impl ScanStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => Self::Completed,
            "running" => Self::Running,
            "failed" => Self::Failed,
            "pending" => Self::Pending,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire string this status was read from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Running => "running",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for ScanStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScanStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Body for `POST /api/auth/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Response of `POST /api/auth/sign-up`.
///
/// `confirmation_required` is set when the backend created the account but
/// issued no session until the email address is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpOutcome {
    pub user: User,
    pub confirmation_required: bool,
}

/// Error body returned by every `/api` route on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
