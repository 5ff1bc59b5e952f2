// The installation pipeline, one module per stage.
//
// Stage order is fixed: prerequisites -> runtime -> cli_tool -> exactly
// one of {macos, linux, windows}. Each stage assumes every previous
// stage succeeded; the first error aborts the rest of the pipeline.

pub mod cli_tool;
pub mod ide;
pub mod linux;
pub mod macos;
pub mod prerequisites;
pub mod runtime;
pub mod windows;
