pub mod outcome;
pub mod session;
pub mod workflow;

pub use outcome::Outcome;
pub use session::{BookingSession, NoticeSink};
pub use workflow::{SubmissionWorkflow, WorkflowConfig};
