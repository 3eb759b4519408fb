use std::fmt::Debug;

/// Returned when a value is read through the accessor of a variant it was not created as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("trying to get value of invalid type: expected {expected:?}, found {actual:?}")]
pub struct TypeMismatch<E: Debug> {
    /// The tag of the accessor that was called.
    pub expected: E,
    /// The tag the value was created with.
    pub actual: E,
}

impl<E: Debug> TypeMismatch<E> {
    pub fn new(expected: E, actual: E) -> Self {
        Self { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::TypeMismatch;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Setting {
        Host,
        Port,
    }

    #[test]
    fn display() {
        assert_eq!(
            TypeMismatch::new(Setting::Port, Setting::Host).to_string(),
            "trying to get value of invalid type: expected Port, found Host"
        );
    }
}
