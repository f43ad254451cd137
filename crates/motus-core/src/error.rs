use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} value {value} is outside range [{min}, {max}]")]
    MetricOutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("session {session_number}: date field does not match timestamp")]
    DateMismatch { session_number: u32 },
}
