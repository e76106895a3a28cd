//! Property search query builder
//!
//! Turns a [`FilterCriteria`] and a result limit into a parameterized
//! `SELECT` over `properties` joined to `property_reviews`. Clause order is
//! fixed: row filters, `GROUP BY`, the rating filter, then `ORDER BY`/`LIMIT`.

use crate::backend::DatabaseType;
use crate::models::FilterCriteria;
use serde::Serialize;

/// Number of rows returned when the caller does not supply a limit
pub const DEFAULT_LIMIT: i64 = 10;

const BASE_SELECT: &str = "SELECT properties.*, CAST(AVG(property_reviews.rating) AS DOUBLE PRECISION) AS average_rating \
FROM properties \
JOIN property_reviews ON properties.id = property_reviews.property_id";

const GROUP_BY: &str = "GROUP BY properties.id";

const RATING_PREDICATE: &str = "AVG(property_reviews.rating) >=";

/// A value bound to one positional placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Statement text plus its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

/// One row filter applied before grouping
struct RowFilter {
    predicate: &'static str,
    extract: fn(&FilterCriteria) -> Option<QueryParam>,
}

/// Row filters in emission order
const ROW_FILTERS: [RowFilter; 4] = [
    RowFilter {
        predicate: "city LIKE",
        extract: city_param,
    },
    RowFilter {
        predicate: "owner_id =",
        extract: owner_param,
    },
    RowFilter {
        predicate: "cost_per_night >=",
        extract: minimum_price_param,
    },
    RowFilter {
        predicate: "cost_per_night <=",
        extract: maximum_price_param,
    },
];

// Empty strings and zero values count as absent, like unset form fields.

fn city_param(criteria: &FilterCriteria) -> Option<QueryParam> {
    criteria
        .city
        .as_deref()
        .filter(|city| !city.is_empty())
        .map(|city| QueryParam::Text(format!("%{}%", city)))
}

fn owner_param(criteria: &FilterCriteria) -> Option<QueryParam> {
    criteria
        .owner_id
        .filter(|id| *id != 0)
        .map(QueryParam::Integer)
}

fn minimum_price_param(criteria: &FilterCriteria) -> Option<QueryParam> {
    criteria.minimum_price_per_night.and_then(cents_param)
}

fn maximum_price_param(criteria: &FilterCriteria) -> Option<QueryParam> {
    criteria.maximum_price_per_night.and_then(cents_param)
}

fn rating_param(criteria: &FilterCriteria) -> Option<QueryParam> {
    criteria
        .minimum_rating
        .filter(|rating| *rating != 0.0 && !rating.is_nan())
        .map(QueryParam::Float)
}

/// Major currency units to stored cents
fn cents_param(price: f64) -> Option<QueryParam> {
    if price == 0.0 || price.is_nan() {
        return None;
    }
    Some(QueryParam::Integer((price * 100.0).round() as i64))
}

struct QueryBuilder {
    database_type: DatabaseType,
    sql: String,
    params: Vec<QueryParam>,
    clause_emitted: bool,
}

impl QueryBuilder {
    fn new(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            sql: BASE_SELECT.to_string(),
            params: Vec::new(),
            clause_emitted: false,
        }
    }

    /// Record a parameter and return its placeholder
    fn bind(&mut self, param: QueryParam) -> String {
        self.params.push(param);
        self.database_type.placeholder(self.params.len())
    }

    fn append(&mut self, fragment: &str) {
        self.sql.push(' ');
        self.sql.push_str(fragment);
    }

    fn filter(&mut self, subsequent_keyword: &str, predicate: &str, param: QueryParam) {
        let keyword = if self.clause_emitted {
            subsequent_keyword
        } else {
            "WHERE"
        };
        let placeholder = self.bind(param);
        self.append(&format!("{} {} {}", keyword, predicate, placeholder));
        self.clause_emitted = true;
    }

    fn finish(mut self, limit: i64) -> PropertyQuery {
        let placeholder = self.bind(QueryParam::Integer(limit));
        self.append(&format!("ORDER BY cost_per_night ASC LIMIT {}", placeholder));
        PropertyQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

/// Build the property search statement with PostgreSQL placeholders
///
/// `limit` must be positive; it is bound as-is.
pub fn build_property_query(criteria: &FilterCriteria, limit: i64) -> PropertyQuery {
    build_property_query_for(DatabaseType::PostgreSQL, criteria, limit)
}

/// Build the property search statement for a specific database
///
/// A rating filter uses `WHERE` when it is the only filter and `HAVING`
/// otherwise. The rating-only form lands after `GROUP BY` and is rejected by
/// the database; callers see that as a data-access error.
pub fn build_property_query_for(
    database_type: DatabaseType,
    criteria: &FilterCriteria,
    limit: i64,
) -> PropertyQuery {
    let mut builder = QueryBuilder::new(database_type);

    for row_filter in ROW_FILTERS.iter() {
        if let Some(param) = (row_filter.extract)(criteria) {
            builder.filter("AND", row_filter.predicate, param);
        }
    }

    builder.append(GROUP_BY);

    if let Some(param) = rating_param(criteria) {
        builder.filter("HAVING", RATING_PREDICATE, param);
    }

    builder.finish(limit)
}
