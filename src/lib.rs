//! Escalera - deterministic typed call-chain fixture for tracer testsuites
//!
//! This library provides a fixed chain of eight distinctly typed functions
//! so an external instrumentation agent (systemtap-style entry/exit probes)
//! can observe a known sequence of call-boundary events, each tagged with a
//! different primitive parameter type. The program computes nothing and
//! emits no output by default; the call boundaries are the product.

pub mod chain;
pub mod cli;
