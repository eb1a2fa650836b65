pub mod http;
pub mod service;
pub mod types;

pub use http::HttpExplainService;
pub use service::{ApiError, ExplainService, FALLBACK_ERROR_MESSAGE};
pub use types::{Entry, Explanation, Language, LineNote, Refactor, Submission, SuggestedTest, Tab, TabContent};
