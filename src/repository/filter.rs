//! Dynamic filter construction for listing queries.
//!
//! Scalar filter values are always bound as `$n` parameters; only allow-listed
//! column identifiers and the fixed clause skeleton ever reach the query text.

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A value bound into a filter predicate
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    Float(f64),
    Date(NaiveDate),
}

/// Per-entity sort allow-list with a fixed fallback column
pub struct SortSpec {
    pub allowed: &'static [&'static str],
    pub default: &'static str,
}

impl SortSpec {
    /// Resolve the requested sort column and direction. Columns outside the
    /// allow-list fall back to the default; any direction other than "desc"
    /// sorts ascending.
    pub fn resolve(&self, sort_by: Option<&str>, order: Option<&str>) -> (&'static str, &'static str) {
        let column = sort_by
            .and_then(|requested| self.allowed.iter().find(|c| **c == requested))
            .copied()
            .unwrap_or(self.default);

        let direction = match order {
            Some(o) if o.eq_ignore_ascii_case("desc") => "DESC",
            _ => "ASC",
        };

        (column, direction)
    }
}

/// Accumulates conjunctive predicates over an always-true base clause.
/// Absent filters impose no constraint.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    conditions: Vec<String>,
    params: Vec<BindValue>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_placeholder(&mut self, value: BindValue) -> usize {
        self.params.push(value);
        self.params.len()
    }

    /// Exact match on a text column
    pub fn eq_text(&mut self, column: &str, value: Option<&str>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Text(v.to_string()));
            self.conditions.push(format!("{} = ${}", column, n));
        }
    }

    /// Exact match on an integer column
    pub fn eq_int(&mut self, column: &str, value: Option<i32>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Int(v));
            self.conditions.push(format!("{} = ${}", column, n));
        }
    }

    /// Lower bound on an integer column (inclusive)
    pub fn min_int(&mut self, column: &str, value: Option<i32>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Int(v));
            self.conditions.push(format!("{} >= ${}", column, n));
        }
    }

    /// Upper bound on an integer column (inclusive)
    pub fn max_int(&mut self, column: &str, value: Option<i32>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Int(v));
            self.conditions.push(format!("{} <= ${}", column, n));
        }
    }

    /// Lower bound on a float column (inclusive)
    pub fn min_float(&mut self, column: &str, value: Option<f64>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Float(v));
            self.conditions.push(format!("{} >= ${}", column, n));
        }
    }

    /// Upper bound on a float column (inclusive)
    pub fn max_float(&mut self, column: &str, value: Option<f64>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Float(v));
            self.conditions.push(format!("{} <= ${}", column, n));
        }
    }

    /// Lower bound on a date column (inclusive)
    pub fn min_date(&mut self, column: &str, value: Option<NaiveDate>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Date(v));
            self.conditions.push(format!("{} >= ${}", column, n));
        }
    }

    /// Upper bound on a date column (inclusive)
    pub fn max_date(&mut self, column: &str, value: Option<NaiveDate>) {
        if let Some(v) = value {
            let n = self.next_placeholder(BindValue::Date(v));
            self.conditions.push(format!("{} <= ${}", column, n));
        }
    }

    /// Case-insensitive substring search, OR-combined across the given columns.
    /// One bound parameter shared by all branches.
    pub fn search(&mut self, columns: &[&str], term: Option<&str>) {
        if let Some(t) = term {
            let n = self.next_placeholder(BindValue::Text(format!("%{}%", t.to_lowercase())));
            let branches: Vec<String> = columns
                .iter()
                .map(|c| format!("LOWER({}) LIKE ${}", c, n))
                .collect();
            self.conditions.push(format!("({})", branches.join(" OR ")));
        }
    }

    /// Raw condition with no bound value (fixed clause skeleton only)
    pub fn raw(&mut self, condition: &str) {
        self.conditions.push(condition.to_string());
    }

    /// WHERE clause body: always-true base predicate plus conjunctive clauses
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "1=1".to_string()
        } else {
            format!("1=1 AND {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    /// Bind all accumulated values, in placeholder order
    pub fn bind_to<'q, O>(
        &self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for param in &self.params {
            query = match param {
                BindValue::Text(s) => query.bind(s.clone()),
                BindValue::Int(i) => query.bind(*i),
                BindValue::Float(f) => query.bind(*f),
                BindValue::Date(d) => query.bind(*d),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORT: SortSpec = SortSpec {
        allowed: &["name", "count", "last_survey"],
        default: "name",
    };

    #[test]
    fn test_empty_filter_is_always_true() {
        let f = FilterBuilder::new();
        assert_eq!(f.where_clause(), "1=1");
        assert!(f.params().is_empty());
    }

    #[test]
    fn test_conditions_are_conjunctive_and_numbered() {
        let mut f = FilterBuilder::new();
        f.eq_text("status", Some("Endangered"));
        f.min_int("count", Some(5));
        f.max_int("count", Some(50));
        assert_eq!(
            f.where_clause(),
            "1=1 AND status = $1 AND count >= $2 AND count <= $3"
        );
        assert_eq!(f.params().len(), 3);
    }

    #[test]
    fn test_absent_filters_impose_no_constraint() {
        let mut f = FilterBuilder::new();
        f.eq_text("status", None);
        f.min_int("count", None);
        f.search(&["name"], None);
        assert_eq!(f.where_clause(), "1=1");
        assert!(f.params().is_empty());
    }

    #[test]
    fn test_search_is_or_combined_with_one_param() {
        let mut f = FilterBuilder::new();
        f.search(&["name", "status", "habitat_zone"], Some("Tig"));
        assert_eq!(
            f.where_clause(),
            "1=1 AND (LOWER(name) LIKE $1 OR LOWER(status) LIKE $1 OR LOWER(habitat_zone) LIKE $1)"
        );
        assert_eq!(f.params(), &[BindValue::Text("%tig%".to_string())]);
    }

    #[test]
    fn test_values_never_reach_query_text() {
        let mut f = FilterBuilder::new();
        f.eq_text("status", Some("'; DROP TABLE animals; --"));
        assert!(!f.where_clause().contains("DROP TABLE"));
    }

    #[test]
    fn test_sort_allow_list_fallback() {
        assert_eq!(SORT.resolve(Some("count"), Some("desc")), ("count", "DESC"));
        assert_eq!(SORT.resolve(Some("DROP TABLE"), None), ("name", "ASC"));
        assert_eq!(SORT.resolve(None, Some("sideways")), ("name", "ASC"));
        assert_eq!(SORT.resolve(Some("last_survey"), Some("DESC")), ("last_survey", "DESC"));
    }
}
