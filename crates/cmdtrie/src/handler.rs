//! Command handler types.
//!
//! A handler is the zero-argument callable bound to a node of the trie. The
//! trie never passes arguments: handlers close over whatever state they need
//! at registration time, and the frontend invokes the handler it gets back
//! from [`CommandTrie::parse`](crate::CommandTrie::parse).
//!
//! # Core Types
//!
//! - [`Handler`]: Trait for command handlers (`&self`)
//! - [`HandlerResult`]: The result type for handlers (`Result<(), Error>`)
//! - [`FnHandler`]: Adapter for `Fn()` closures
//! - [`MessageHandler`]: Prints a fixed message to stdout
//!
//! # Closures
//!
//! Closures returning either `()` or `Result<(), E>` can be registered
//! directly:
//!
//! ```rust
//! use cmdtrie::CommandTrie;
//!
//! let mut trie = CommandTrie::new(|| println!("usage: app <command>"));
//! trie.add_command(|| println!("listing"), &["list"])?;
//! trie.add_command(|| -> anyhow::Result<()> { Ok(()) }, &["sync"])?;
//! # Ok::<(), cmdtrie::TrieError>(())
//! ```

use std::fmt;
use std::io::{self, Write};

/// The result type for command handlers.
///
/// Enables use of the `?` operator for error propagation.
pub type HandlerResult = Result<(), anyhow::Error>;

/// Trait for types that can be converted into a [`HandlerResult`].
///
/// This lets closures return `()` when they cannot fail and `Result<(), E>`
/// when they can.
pub trait IntoHandlerResult {
    /// Convert this type into a [`HandlerResult`].
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}

/// Trait for command handlers.
///
/// Handlers take `&self`; handlers that mutate captured state use interior
/// mutability (`Cell`, `RefCell`), which fits the single-threaded model of
/// the trie.
///
/// # Example
///
/// ```rust
/// use cmdtrie::{Handler, HandlerResult};
/// use std::cell::Cell;
///
/// struct Counter { count: Cell<u32> }
///
/// impl Handler for Counter {
///     fn handle(&self) -> HandlerResult {
///         self.count.set(self.count.get() + 1);
///         Ok(())
///     }
/// }
/// ```
pub trait Handler {
    /// Run the handler.
    fn handle(&self) -> HandlerResult;
}

impl fmt::Debug for dyn Handler + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

/// A wrapper that implements [`Handler`] for `Fn` closures.
///
/// The closure can return either:
/// - `()` - always succeeds
/// - `Result<(), E>` - errors are converted into `anyhow::Error`
///
/// # Example
///
/// ```rust
/// use cmdtrie::{FnHandler, Handler};
///
/// let handler = FnHandler::new(|| println!("hello"));
/// handler.handle()?;
///
/// let failing = FnHandler::new(|| -> Result<(), std::io::Error> {
///     Err(std::io::Error::other("nope"))
/// });
/// assert!(failing.handle().is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct FnHandler<F, R = ()> {
    f: F,
    _phantom: std::marker::PhantomData<fn() -> R>,
}

impl<F, R> FnHandler<F, R>
where
    F: Fn() -> R,
    R: IntoHandlerResult,
{
    /// Creates a new FnHandler wrapping the given closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F, R> Handler for FnHandler<F, R>
where
    F: Fn() -> R,
    R: IntoHandlerResult,
{
    fn handle(&self) -> HandlerResult {
        (self.f)().into_handler_result()
    }
}

/// Conversion into a boxed handler, used by the registration methods.
///
/// Implemented for every `Fn() -> R` closure and for boxed handlers, so both
/// closures and custom [`Handler`] types can be registered.
pub trait IntoBoxedHandler<M> {
    /// Box this value as a handler.
    fn into_boxed_handler(self) -> Box<dyn Handler>;
}

/// Marker for closure conversions.
#[doc(hidden)]
pub struct ClosureMarker<R>(std::marker::PhantomData<fn() -> R>);

/// Marker for already-boxed handlers.
#[doc(hidden)]
pub struct BoxedMarker;

impl<F, R> IntoBoxedHandler<ClosureMarker<R>> for F
where
    F: Fn() -> R + 'static,
    R: IntoHandlerResult + 'static,
{
    fn into_boxed_handler(self) -> Box<dyn Handler> {
        Box::new(FnHandler::new(self))
    }
}

impl IntoBoxedHandler<BoxedMarker> for Box<dyn Handler> {
    fn into_boxed_handler(self) -> Box<dyn Handler> {
        self
    }
}

/// A handler that prints a fixed message followed by a newline.
///
/// This backs [`CommandTrie::simple_message`](crate::CommandTrie::simple_message)
/// and is handy for help and version nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHandler {
    message: String,
}

impl MessageHandler {
    /// Creates a handler for the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message this handler prints.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Writes the message and a trailing newline to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.message)
    }
}

impl Handler for MessageHandler {
    fn handle(&self) -> HandlerResult {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
