use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid goal range {min}..={max}: goals must be positive and min <= max")]
    InvalidGoalRange { min: u32, max: u32 },
}
