/// Fields a filter term can test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Filter by message kind (user, assistant, tool, event, unknown)
    Kind,
    /// Messages created on or after a date (YYYY-MM-DD, UTC)
    Since,
    /// Messages created before a date (YYYY-MM-DD, UTC)
    Until,
}

/// Logical operators for combining filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    /// Both conditions must match (default between different fields)
    And,
    /// Either condition matches (default within same field)
    Or,
}

/// Single field:value filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: String) -> Self {
        Self { field, value }
    }
}

/// Filter expression combining field filters with operators
///
/// No parentheses; terms are evaluated left to right.
/// - Same-field filters are OR'd together: kind:user kind:assistant → (user OR assistant)
/// - Cross-field filters are AND'd together: kind:user since:2024-01-01 → (user AND since)
/// - Explicit operators override defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub filters: Vec<FieldFilter>,
    pub operators: Vec<FilterOperator>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self { filters: Vec::new(), operators: Vec::new() }
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn add_operator(&mut self, operator: FilterOperator) {
        self.operators.push(operator);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterExpr {
    fn default() -> Self {
        Self::new()
    }
}
