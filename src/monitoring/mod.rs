/*!
 * Monitoring
 * Structured logging setup shared by the library and the binary
 */

mod tracer;

pub use tracer::{init_tracing, json_output_requested, TRACE_JSON_ENV};
