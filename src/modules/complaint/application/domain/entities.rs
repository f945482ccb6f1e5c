use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DataIssue,
    Verification,
    Accessibility,
    Service,
    Technical,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DataIssue => "data_issue",
            Category::Verification => "verification",
            Category::Accessibility => "accessibility",
            Category::Service => "service",
            Category::Technical => "technical",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = ComplaintValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data_issue" => Ok(Category::DataIssue),
            "verification" => Ok(Category::Verification),
            "accessibility" => Ok(Category::Accessibility),
            "service" => Ok(Category::Service),
            "technical" => Ok(Category::Technical),
            "other" => Ok(Category::Other),
            _ => Err(ComplaintValidationError::InvalidCategory),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl FromStr for Priority {
    type Err = ComplaintValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(ComplaintValidationError::InvalidPriority),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Rejected => "rejected",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filed complaint ticket with its attachments.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: Uuid,
    pub ticket_id: String,
    pub user_id: Uuid,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub admin_notes: Option<String>,
    pub images: Vec<ComplaintImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attachment metadata. The bytes live on disk under the upload directory;
/// `path` is storage-relative.
#[derive(Debug, Clone)]
pub struct ComplaintImage {
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplaintValidationError {
    #[error("Invalid complaint category")]
    InvalidCategory,

    #[error("Invalid priority level")]
    InvalidPriority,

    #[error("Title must be between 5 and 100 characters")]
    InvalidTitle,

    #[error("Description must be between 10 and 1000 characters")]
    InvalidDescription,

    #[error("Location must be less than 100 characters")]
    InvalidLocation,
}

/// Validated input for filing a complaint. All field rules live here; the
/// HTTP layer only shuttles strings in.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    user_id: Uuid,
    category: Category,
    priority: Priority,
    title: String,
    description: String,
    location: Option<String>,
}

impl NewComplaint {
    pub fn new(
        user_id: Uuid,
        category: &str,
        priority: Option<&str>,
        title: &str,
        description: &str,
        location: Option<&str>,
    ) -> Result<Self, ComplaintValidationError> {
        let category = Category::from_str(category.trim())?;

        let priority = match priority.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Priority::from_str(p)?,
            None => Priority::default(),
        };

        let title = title.trim();
        if title.chars().count() < 5 || title.chars().count() > 100 {
            return Err(ComplaintValidationError::InvalidTitle);
        }

        let description = description.trim();
        let description_len = description.chars().count();
        if !(10..=1000).contains(&description_len) {
            return Err(ComplaintValidationError::InvalidDescription);
        }

        let location = match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(l) if l.chars().count() > 100 => {
                return Err(ComplaintValidationError::InvalidLocation)
            }
            Some(l) => Some(l.to_string()),
            None => None,
        };

        Ok(Self {
            user_id,
            category,
            priority,
            title: title.to_string(),
            description: description.to_string(),
            location,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Public ticket handle: `COMP` + year + zero-padded global sequence.
pub fn format_ticket_id(year: i32, sequence: i64) -> String {
    format!("COMP{}{:04}", year, sequence)
}
