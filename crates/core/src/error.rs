#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One message per violated field, in field-declaration order.
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
}

impl CoreError {
    /// The individual violation messages carried by this error.
    pub fn messages(&self) -> &[String] {
        match self {
            CoreError::Validation(messages) => messages,
        }
    }

    pub fn into_messages(self) -> Vec<String> {
        match self {
            CoreError::Validation(messages) => messages,
        }
    }
}
