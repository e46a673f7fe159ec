//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. CORS
//! 2. `Cache-Control: no-store`
//! 3. Access logger

pub mod audit;
