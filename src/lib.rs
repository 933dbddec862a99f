//! Enumerates every fixed-size subset of a finite universe as a bitmask,
//! stepping with Gosper's hack, and verifies the resulting counts against
//! a closed-form binomial oracle.

pub mod choose;
pub mod subsets;
pub mod verify;
