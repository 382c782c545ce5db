//! Input validation for timetabling problems.
//!
//! Checks structural integrity of a catalog before optimization runs.
//! Detects:
//! - Empty catalog sections
//! - Duplicate IDs
//! - Facilitator references that name no catalog facilitator
//! - Pairing-policy sections that name no catalog activity
//! - Zero enrollments and capacities
//!
//! Soft-constraint violations (conflicts, overloads) are NOT errors —
//! they are scored by `fitness`. Validation only rejects inputs the
//! optimizer cannot meaningfully run on.

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A catalog section (activities, rooms, slots, facilitators) is empty.
    EmptyCatalog,
    /// Two entities share the same ID.
    DuplicateId,
    /// A preference set or policy references an unknown facilitator.
    UnknownFacilitator,
    /// The pairing policy references an unknown activity.
    UnknownActivity,
    /// An enrollment or capacity is zero.
    InvalidQuantity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before optimization.
///
/// Checks:
/// 1. All four reference sections are non-empty
/// 2. No duplicate activity, room, slot, or facilitator IDs
/// 3. Every facilitator named in a preference set exists
/// 4. Every enrollment and room capacity is positive
/// 5. Pairing-policy sections name existing, distinct activities
/// 6. The load-exempt facilitator (if set) exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    if catalog.activities().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no activities",
        ));
    }
    if catalog.rooms().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no rooms",
        ));
    }
    if catalog.time_slots().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no time slots",
        ));
    }
    if catalog.facilitators().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no facilitators",
        ));
    }

    let mut facilitator_ids = HashSet::new();
    for f in catalog.facilitators() {
        if !facilitator_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate facilitator ID: {}", f.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in catalog.rooms() {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!("Room '{}' has zero capacity", r.id),
            ));
        }
    }

    let mut slot_labels = HashSet::new();
    for s in catalog.time_slots() {
        if !slot_labels.insert(s.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot: {}", s.label),
            ));
        }
    }

    let mut activity_ids = HashSet::new();
    for a in catalog.activities() {
        if !activity_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", a.id),
            ));
        }
        if a.enrollment == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!("Activity '{}' has zero enrollment", a.id),
            ));
        }
        for f in a
            .preferred_facilitators
            .iter()
            .chain(&a.other_facilitators)
        {
            if !facilitator_ids.contains(f.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFacilitator,
                    format!("Activity '{}' references unknown facilitator '{}'", a.id, f),
                ));
            }
        }
    }

    if let Some(pairing) = catalog.pairing() {
        for group in [&pairing.group_a, &pairing.group_b] {
            for section in group {
                if !activity_ids.contains(section.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownActivity,
                        format!("Pairing policy references unknown activity '{section}'"),
                    ));
                }
            }
            if group[0] == group[1] {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Pairing group lists activity '{}' twice", group[0]),
                ));
            }
        }
    }

    if let Some(exempt) = catalog.load_exempt_facilitator() {
        if !facilitator_ids.contains(exempt) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFacilitator,
                format!("Load-exempt facilitator '{exempt}' is not in the catalog"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
