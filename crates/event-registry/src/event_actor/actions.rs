//! Custom actions for the Event actor.

/// Custom actions for Event entities.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    /// Stops accepting registrations. Idempotent and one-way.
    CloseRegistration,
}
