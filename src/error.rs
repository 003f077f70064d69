use std::fmt;

/// Failure raised while constructing one of the opening-hours values.
///
/// Composite grammars never expose the failure of an inner segment: the
/// outer type reports its own message with the full offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Invalid {
        argument: &'static str,
        kind: &'static str,
        examples: &'static [&'static str],
        input: String,
    },
    UnknownWeekday {
        input: String,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    pub fn invalid(
        argument: &'static str,
        kind: &'static str,
        examples: &'static [&'static str],
        input: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            argument,
            kind,
            examples,
            input: input.into(),
        }
    }

    pub fn unknown_weekday(input: impl Into<String>) -> Self {
        Self::UnknownWeekday {
            input: input.into(),
        }
    }

    /// Logical name of the rejected argument, e.g. `hourRange`.
    pub fn argument(&self) -> &'static str {
        match self {
            ValidationError::Invalid { argument, .. } => *argument,
            ValidationError::UnknownWeekday { .. } => "dayOfTheWeek",
        }
    }

    /// The rejected text exactly as it was handed to the parser.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::Invalid { input, .. } | ValidationError::UnknownWeekday { input } => {
                input.as_str()
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Invalid {
                argument,
                kind,
                examples,
                input,
            } => {
                let examples = examples
                    .iter()
                    .map(|example| format!("'{example}'"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                write!(
                    f,
                    "The argument '{argument}' does not represent a valid {kind} like {examples}: '{input}'"
                )
            }
            ValidationError::UnknownWeekday { input } => {
                write!(f, "Unknown day of the week: '{input}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
