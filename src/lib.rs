//! # stacktrace_core
//!
//! Structured, lazy parsing of rendered .NET and Mono stack traces.
//!
//! Log viewers, error reporters and crash aggregators receive stack traces
//! as free text. This crate locates the frame lines inside that text and
//! decomposes each one into declaring type, method name, parameter list,
//! individual (type, name) parameter pairs, and the optional (file, line)
//! source location - without callers writing per-dialect regular
//! expressions. Both the .NET location suffix (`in <file>:line <N>`) and
//! the Mono one (`[0x...] in <location>:<N>`) are understood, and noise
//! lines (exception headers, wrapped message text, inner-exception
//! banners) are skipped silently.
//!
//! Parsing is a pure text-to-iterator transform: no shared state, nothing
//! cached, one result per recognized frame in document order. Frame lines
//! without a balanced parenthesis pair are treated as noise and skipped.
//!
//! # Examples
//!
//! ```
//! let trace = r"
//! System.FormatException: Input string was not in a correct format.
//!    at System.Number.ParseInt32(String s) in C:\dotnet\Number.cs:line 126
//!    at Demo.Program.Main(String[] args)";
//!
//! let frames: Vec<_> = stacktrace_core::frames(trace).collect();
//! assert_eq!(frames.len(), 2);
//! assert_eq!(frames[0].declaring_type, "System.Number");
//! assert_eq!(frames[0].method, "ParseInt32");
//! assert_eq!(frames[0].file, r"C:\dotnet\Number.cs");
//! assert_eq!(frames[0].line, "126");
//! assert_eq!(frames[1].file, "");
//! ```
//!
//! Callers that want their own representation supply selectors, either one
//! for the whole frame ([`parse`]) or one per decomposition stage
//! ([`Pipeline`]).

pub mod decomposer;
pub mod error;
pub mod frame;
pub mod locator;
pub mod pipeline;

pub use decomposer::decompose;
pub use error::{Error, SelectorStage};
pub use frame::{Frame, Parameter};
pub use locator::FrameLines;
pub use pipeline::{frames, parse, Pipeline};
