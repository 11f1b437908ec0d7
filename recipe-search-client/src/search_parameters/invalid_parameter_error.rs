use super::filters::FilterField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("Please enter something to search for.")]
    EmptyQuery,
    #[error("Page numbers start at 1.")]
    ZeroPage,
    #[error("{field} must be a whole number of calories, got '{value}'.")]
    NotANumber { field: FilterField, value: String },
    #[error("{field} is not a numeric filter.")]
    NotNumeric { field: FilterField },
    #[error("Minimum calories ({min}) exceed maximum calories ({max}).")]
    CalorieRange { min: u32, max: u32 },
}
