//! debug-toggle: comment and uncomment marked debug sections in source files.
//!
//! A debug section is the run of lines between a `// DEBUG START` marker (optionally tagged,
//! as in `// DEBUG START [perf]`) and the next `// DEBUG END` marker. The engine wraps such a
//! section in a `/*` ... `*/` pair or unwraps it, leaving every other line untouched.

pub mod batch;
pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod section;
pub mod session;
