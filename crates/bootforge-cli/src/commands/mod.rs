//! Command handlers: translate parsed arguments into core invocations.

pub mod apply;
pub mod features;
