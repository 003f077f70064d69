use crate::error::ValidationError;

/// Common capability of every opening-hours value: parse from and render to
/// its canonical string.
///
/// Adapters (serialization, storage, UI) only ever talk to a value through
/// these two operations.
pub trait HoursValue: Sized {
    /// Logical argument name reported in validation messages.
    const ARGUMENT: &'static str;

    fn parse(text: &str) -> Result<Self, ValidationError>;

    fn render(&self) -> String;
}

/// Returns `true` if `text` parses as a `T`.
pub fn is_valid<T: HoursValue>(text: &str) -> bool {
    T::parse(text).is_ok()
}

/// Wires `FromStr`, `Display` and the string conversions used by serde onto a
/// type that already implements [`HoursValue`].
macro_rules! impl_string_value {
    ($name:ident) => {
        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::value::HoursValue>::parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&<$name as $crate::value::HoursValue>::render(self))
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
                <$name as $crate::value::HoursValue>::parse(&value)
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(value: $name) -> Self {
                <$name as $crate::value::HoursValue>::render(&value)
            }
        }
    };
}

pub(crate) use impl_string_value;
