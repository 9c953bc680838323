//! Background job processing.
//!
//! Jobs enter the queue through the [`dispatcher`], sit in the `jobs`
//! table until due, and are drained by the [`processor`] when the cron
//! trigger fires. Each job type maps to one task in [`tasks`]; a task
//! failure fails that job only and never the processing run.

pub mod dispatcher;
pub mod processor;
pub mod report;
pub mod tasks;

pub use dispatcher::JobDispatcher;
pub use processor::JobProcessor;
pub use tasks::TaskContext;
