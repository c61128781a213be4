//! Profile Lens Common Library
//!
//! CLIとWeb(WASM)で共有されるワークフロー・型・ユーティリティ

pub mod types;
pub mod error;
pub mod report;
pub mod response;
pub mod workflow;

pub use types::{AnalysisReport, ErrorBody, FileId, ImageSource};
pub use error::{Error, Result};
pub use report::{ReportSection, SectionStyle};
pub use response::{interpret_response, rejection_message};
pub use workflow::{
    PreviewSlot, Submission, UploadWorkflow, ViewState,
    DEFAULT_ENDPOINT, MIN_IMAGES, UPLOAD_FIELD_NAME,
};
