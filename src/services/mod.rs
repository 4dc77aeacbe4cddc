//! Entity services with behaviour beyond plain CRUD

pub mod feedback;

pub use feedback::FeedbackService;
