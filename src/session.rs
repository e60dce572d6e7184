//! Session-scoped calculation counter.
//!
//! The counter lives on an explicit context owned by the interactive session
//! rather than in process-global state: created at session start, incremented
//! on demand, reset or dropped when the session ends.

#[derive(Clone, Debug)]
pub struct SessionContext {
    session_id: String,
    count: u32,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            count: 0,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Increment the calculation counter, returning the new count.
    pub fn increment(&mut self) -> u32 {
        self.count += 1;
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
