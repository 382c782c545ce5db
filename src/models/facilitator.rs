//! Facilitator model.
//!
//! Facilitators are drawn from a closed enumerated set declared in the
//! catalog. Activities reference them by identifier in their preference
//! sets; the references are checked by `validation`.

use serde::{Deserialize, Serialize};

/// An instructor who can be assigned to activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facilitator {
    /// Unique facilitator identifier (e.g. "Glen").
    pub id: String,
}

impl Facilitator {
    /// Creates a new facilitator.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facilitator() {
        let f = Facilitator::new("Glen");
        assert_eq!(f.id, "Glen");
        assert_eq!(f, Facilitator::new("Glen"));
        assert_ne!(f, Facilitator::new("Lock"));
    }
}
