pub mod api;
pub mod evaluator;
pub mod parser;
pub mod printer;
pub mod reader;
pub mod values;
