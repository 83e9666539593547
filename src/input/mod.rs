// src/input/mod.rs

//! Input collaborator: turns a delimited activity file into raw rows for the
//! activity registry. Nothing here interprets durations or predecessor names.

pub mod reader;

pub use reader::{read_rows, read_rows_from};
