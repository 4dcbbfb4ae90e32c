pub mod date_accumulator;
pub mod error;
pub mod navigator;
pub mod parser;
pub mod row_decoder;
