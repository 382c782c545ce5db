//! Activity (course section) model.
//!
//! An activity is the smallest assignable unit of the timetable: one
//! section of a course with an expected enrollment and the facilitators
//! who can plausibly run it. Facilitator preferences are soft —
//! assigning someone outside both sets is allowed and scored by the
//! fitness rules, never rejected.

use serde::{Deserialize, Serialize};

/// A course section to be placed on the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier (e.g. "SLA100A").
    pub id: String,
    /// Expected enrollment (seats needed).
    pub enrollment: u32,
    /// Facilitators best suited to run this activity.
    pub preferred_facilitators: Vec<String>,
    /// Acceptable fallback facilitators.
    pub other_facilitators: Vec<String>,
}

impl Activity {
    /// Creates a new activity with empty facilitator sets.
    pub fn new(id: impl Into<String>, enrollment: u32) -> Self {
        Self {
            id: id.into(),
            enrollment,
            preferred_facilitators: Vec::new(),
            other_facilitators: Vec::new(),
        }
    }

    /// Sets the preferred facilitators.
    pub fn with_preferred(mut self, facilitators: Vec<String>) -> Self {
        self.preferred_facilitators = facilitators;
        self
    }

    /// Sets the acceptable fallback facilitators.
    pub fn with_other(mut self, facilitators: Vec<String>) -> Self {
        self.other_facilitators = facilitators;
        self
    }

    /// Whether the facilitator is in the preferred set.
    pub fn prefers(&self, facilitator: &str) -> bool {
        self.preferred_facilitators.iter().any(|f| f == facilitator)
    }

    /// Whether the facilitator is in the fallback set.
    pub fn accepts(&self, facilitator: &str) -> bool {
        self.other_facilitators.iter().any(|f| f == facilitator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("SLA100A", 50)
            .with_preferred(vec!["Glen".into(), "Lock".into()])
            .with_other(vec!["Numen".into()]);

        assert_eq!(act.id, "SLA100A");
        assert_eq!(act.enrollment, 50);
        assert_eq!(act.preferred_facilitators.len(), 2);
        assert_eq!(act.other_facilitators, vec!["Numen"]);
    }

    #[test]
    fn test_facilitator_membership() {
        let act = Activity::new("SLA394", 20)
            .with_preferred(vec!["Tyler".into(), "Singer".into()])
            .with_other(vec!["Richards".into(), "Zeldin".into()]);

        assert!(act.prefers("Tyler"));
        assert!(!act.prefers("Richards"));
        assert!(act.accepts("Richards"));
        assert!(!act.accepts("Tyler"));
        assert!(!act.prefers("Uther"));
        assert!(!act.accepts("Uther"));
    }
}
