#![no_std]

extern crate alloc;

pub mod error;
pub use error::OptionalError;

pub mod nullable;
pub use nullable::Nullable;

pub mod optional;
pub use optional::Optional;
