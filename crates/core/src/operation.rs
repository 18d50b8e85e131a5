//! The closed set of operations the game controller answers to.

/// A controller operation resolved from its route name.
///
/// Names outside the known set resolve to [`Operation::Unknown`] rather
/// than failing, so every request has somewhere to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Index,
    Detail,
    Create,
    Search,
    Error,
    Unknown(String),
}

impl Operation {
    /// Resolve a route segment such as `detail` to an operation.
    ///
    /// Matching ignores ASCII case, so `Detail` is `detail`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "" | "index" => Operation::Index,
            "detail" => Operation::Detail,
            "create" => Operation::Create,
            "search" => Operation::Search,
            "error" => Operation::Error,
            _ => Operation::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Operation::Index => "index",
            Operation::Detail => "detail",
            Operation::Create => "create",
            Operation::Search => "search",
            Operation::Error => "error",
            Operation::Unknown(name) => name,
        }
    }
}
