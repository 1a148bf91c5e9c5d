//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Event handled; stop the chain.
    Stop,
    /// Not for this handler, try next.
    Ignore,
}
