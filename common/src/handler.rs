//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous and runs to completion before the next one
/// starts: handlers are driven by discrete user input events delivered one
/// at a time.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Propagates the [`Handler::Err`] of the underlying operation.
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
