//! Argument entities
//!
//! An [`Argument`] is the descriptor of one registered command or option.
//! Commands and options share one record and are told apart by
//! [`ArgumentKind`]; the registry stamps the name at insertion time.
//!
//! # Parameters
//!
//! Parameters are flat and positional. Required parameters render as
//! `<name>`, optional ones as `[name]`. A trailing `...` on the last
//! declared parameter marks it variadic: it absorbs every remaining token.
//!
//! ```rust,ignore
//! use shellkit_core::argument::{Argument, ArgumentOptions, handler_fn};
//! use shellkit_core::wizard::Completion;
//!
//! let greet = Argument::command(
//!     "print a greeting",
//!     ArgumentOptions::default().required("who"),
//!     handler_fn(|args| async move {
//!         println!("Hello, {}", args[0]);
//!         Ok(Completion::Done)
//!     }),
//! );
//! ```

mod description;
mod handler;
mod options;
mod types;

pub use description::Description;
pub use handler::{ArgumentHandler, Builtin, FnHandler, Handler, handler_fn};
pub use options::{ArgumentOptions, GLOBAL_SCOPE, Params, WILDCARD_SCOPE};
pub use types::{Argument, ArgumentKind, is_variadic};
