//! Custom actions for the Registration actor.

/// Custom actions for Registration entities.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationAction {
    /// Records that the user attended. Idempotent and one-way.
    MarkAttended,
}
