//! Dynamic filter composition for aggregation queries

use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use stats_core::value_objects::DateRange;

/// A value bound to one positional parameter
#[derive(Debug, Clone)]
enum BindValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// Accumulates `(clause fragment, bound value)` pairs and renders them as a
/// parameterized `WHERE` clause.
///
/// Filters compose additively in a fixed order: guild, then emoji when the
/// query is emoji-scoped, then the start bound, then the end bound. Each
/// present filter contributes exactly one positional parameter; omitted
/// filters contribute none. Every query shape in the stats repository goes
/// through this builder, so totals and breakdowns are computed over the same
/// predicate. Values are only ever bound by position, never interpolated into
/// the SQL text.
#[derive(Debug)]
pub(crate) struct ReactionFilter {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl ReactionFilter {
    /// Start a filter scoped to a guild; the guild predicate always comes first
    pub fn for_guild(guild_id: &str) -> Self {
        let mut filter = Self {
            clauses: Vec::new(),
            binds: Vec::new(),
        };
        filter.push("guild_id =", BindValue::Text(guild_id.to_string()));
        filter
    }

    /// Narrow to a single emoji identifier
    pub fn emoji(mut self, emoji_id: &str) -> Self {
        self.push("emoji_id =", BindValue::Text(emoji_id.to_string()));
        self
    }

    /// Apply the optional date bounds: `created_at >= start`, `created_at < end`
    pub fn date_range(mut self, range: &DateRange) -> Self {
        if let Some(start) = range.start {
            self.push("created_at >=", BindValue::Timestamp(start));
        }
        if let Some(end) = range.end {
            self.push("created_at <", BindValue::Timestamp(end));
        }
        self
    }

    fn push(&mut self, fragment: &str, value: BindValue) {
        self.clauses
            .push(format!("{fragment} ${}", self.binds.len() + 1));
        self.binds.push(value);
    }

    /// Render the `WHERE` clause with positional parameters
    pub fn where_sql(&self) -> String {
        format!("WHERE {}", self.clauses.join(" AND "))
    }

    /// Placeholder for one extra parameter bound after the filter (the LIMIT)
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.binds.len() + 1)
    }

    /// Bind the accumulated values, in order, onto a query
    pub fn bind_to<'q, O>(
        self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for value in self.binds {
            query = match value {
                BindValue::Text(s) => query.bind(s),
                BindValue::Timestamp(t) => query.bind(t),
            };
        }
        query
    }
}
