//! Resource operations
//!
//! One `impl NjallaClient` block per resource family. Each operation is a
//! fixed RPC verb, a fixed parameter mapping and a fixed result shape.

mod domains;
mod records;
mod servers;
