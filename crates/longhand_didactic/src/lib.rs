//! Step recording and rendering shared by every longhand solver.
//!
//! A solve builds a [`Trace`] as it goes and hands it back next to the
//! answer as a [`Solved`] pair. Nothing here touches global state: two
//! solves running on different threads each own their own trace.
//!
//! # Example
//! ```
//! use longhand_didactic::Trace;
//!
//! let mut trace = Trace::new();
//! trace.record("Adding units", "9 + 1 + carry(0) = 10", "write 0");
//! trace.note("Set carry to 1");
//! assert_eq!(trace.len(), 2);
//! assert!(trace.render_scratchpad().contains("2. Set carry to 1"));
//! ```

mod number;
mod render;
mod step;

pub use number::format_number;
pub use render::ascii;
pub use step::{Solved, StepRecord, Trace};
