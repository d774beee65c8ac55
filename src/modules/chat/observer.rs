use super::ChatSession;

/// What part of the session a transition touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Messages,
    Loading,
    Input,
}

/// Side effect that runs after a session transition has been applied.
pub trait StateObserver {
    fn observe(&mut self, change: StateChange, session: &ChatSession);
}
