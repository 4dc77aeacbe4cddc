//! User feedback tickets

use chrono::NaiveDate;

crate::string_enum!(
    /// Triage state of a feedback ticket
    FeedbackStatus {
        #[default]
        Pending = "pending",
        Reviewed = "reviewed",
        Resolved = "resolved",
    }
);

crate::impl_entity!(
    /// A feedback ticket, optionally with screenshot URLs
    Feedback,
    "feedback",
    "feedbacks",
    search: [title, description],
    required: [title, description],
    exposed: [title, description, created_at, status],
    {
        title: String,
        description: String,
        images: Vec<String>,
        created_at: NaiveDate,
        status: FeedbackStatus,
    }
);

/// What a user submits; the service stamps the date and status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSubmission {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

impl FeedbackSubmission {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Trimmed ticket dated `today`, pending review
    pub fn into_feedback(self, today: NaiveDate) -> Feedback {
        Feedback {
            id: String::new(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            images: self.images,
            created_at: today,
            status: FeedbackStatus::Pending,
        }
    }
}
