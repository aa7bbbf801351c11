//! Taskgate
//!
//! A small runtime for cancellable, gate-driven stepped tasks.
//!
//! ## Features
//!
//! - **Stepped controller**: runs a fixed-length sequence of cooperative
//!   steps, polling a one-shot cancellation signal before each step
//! - **Executability gate**: mutually-exclusive `can_start`/`can_cancel`
//!   predicates with payload-free recheck fan-out to observers
//! - **Bindable commands**: query/invoke pairs a presentation layer can wire
//!   to buttons without knowing the controller
//! - **Event protocol**: run lifecycle and progress text as a single stream,
//!   with JSON-lines output adapters
//!
//! # Example
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use taskgate::runtime::prelude::{NoDelay, RunConfig, RunOutcome, TaskController};
//!
//! # async fn run() -> taskgate::runtime::error::TaskResult<()> {
//! let controller = TaskController::new(RunConfig::new().with_steps(3))
//!     .with_delay(Arc::new(NoDelay));
//!
//! let gate = controller.gate();
//! assert!(gate.can_start());
//!
//! let outcome = controller.start().await?;
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert_eq!(controller.progress_message(), "done");
//! # Ok(())
//! # }
//! ```

pub mod runtime;
