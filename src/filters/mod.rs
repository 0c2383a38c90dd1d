pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::apply_filters;
pub use ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
pub use parser::parse_filter;
