#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod matrix;
pub use matrix::Matrix;
