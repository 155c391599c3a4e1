//! # Application Models
//!
//! Payloads exchanged with the `applications` resource collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of application, as presented to the user.
///
/// The backend knows these under different names, see [`AppType::internal_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppType {
    /// End-to-end encryption application.
    #[default]
    E2ee,
    /// Password-hardening application.
    Pure,
}

impl AppType {
    /// Labels accepted at the interactive prompt.
    pub const LABELS: [&'static str; 2] = ["e2ee", "pure"];

    pub fn label(self) -> &'static str {
        match self {
            AppType::E2ee => "e2ee",
            AppType::Pure => "pure",
        }
    }

    /// Type code the backend expects in [`CreateApplicationRequest::app_type`].
    pub fn internal_code(self) -> &'static str {
        match self {
            AppType::E2ee => "pki",
            AppType::Pure => "phe",
        }
    }

    /// Lenient mapping: only `"pure"` selects [`AppType::Pure`], any other
    /// label falls back to the default.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for AppType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e2ee" => Ok(AppType::E2ee),
            "pure" => Ok(AppType::Pure),
            other => Err(format!("unknown application type: {other}")),
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: String,
}

impl CreateApplicationRequest {
    pub fn new(name: &str, app_type: AppType) -> Self {
        Self {
            name: name.to_string(),
            app_type: app_type.internal_code().to_string(),
        }
    }
}

/// Application as returned by the service. Only the identifier is read,
/// other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: String,
}

impl Application {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Error payload the service attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}
