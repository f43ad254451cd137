pub mod progress;
pub mod session;

pub use progress::TreatmentProgress;
pub use session::SessionRecord;
