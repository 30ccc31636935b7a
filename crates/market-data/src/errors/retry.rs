/// Classification for retry policy.
///
/// Used by providers to decide whether a failed request is worth repeating
/// before the error is handed back to the caller.
///
/// | Class | Retried by the provider? |
/// |-------|--------------------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, with exponential backoff |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad request, missing data or malformed payload.
    /// Repeating the same request would produce the same outcome.
    Never,

    /// Transient failure (rate limiting, timeout, connection reset, 5xx).
    /// Retry after an exponentially growing delay.
    WithBackoff,
}
