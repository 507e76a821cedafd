//! Shared query infrastructure: [`QueryOptions`], [`SortSpec`], and
//! [`SortDirection`], plus the query-string encoding used by every list
//! endpoint.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// Sort order for API results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first). This is the server default.
    #[default]
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Sort specification for a list request.
///
/// The API accepts a comma-joined list of `FIELD` or `FIELD direction`
/// tokens in a single `sort` parameter. When a direction is given for a
/// multi-field sort it is applied to every field individually.
#[derive(Clone, Debug, PartialEq)]
pub enum SortSpec {
    /// A single field, server-default direction.
    Field(String),
    /// A single field with an explicit direction.
    FieldDirected(String, SortDirection),
    /// Several fields, all ascending (no direction token is emitted).
    Fields(Vec<String>),
    /// Several fields, the direction repeated for each one.
    FieldsDirected(Vec<String>, SortDirection),
}

impl SortSpec {
    fn to_param(&self) -> String {
        match self {
            SortSpec::Field(field) => field.clone(),
            SortSpec::FieldDirected(field, direction) => format!("{} {}", field, direction),
            SortSpec::Fields(fields) => fields.join(","),
            SortSpec::FieldsDirected(fields, direction) => fields
                .iter()
                .map(|field| format!("{} {}", field, direction))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for SortSpec {
    fn from(field: &str) -> Self {
        SortSpec::Field(field.to_string())
    }
}

impl From<String> for SortSpec {
    fn from(field: String) -> Self {
        SortSpec::Field(field)
    }
}

impl From<(&str, SortDirection)> for SortSpec {
    fn from((field, direction): (&str, SortDirection)) -> Self {
        SortSpec::FieldDirected(field.to_string(), direction)
    }
}

impl From<&[&str]> for SortSpec {
    fn from(fields: &[&str]) -> Self {
        SortSpec::Fields(fields.iter().map(|field| field.to_string()).collect())
    }
}

impl From<(&[&str], SortDirection)> for SortSpec {
    fn from((fields, direction): (&[&str], SortDirection)) -> Self {
        SortSpec::FieldsDirected(
            fields.iter().map(|field| field.to_string()).collect(),
            direction,
        )
    }
}

/// Value of an additional query parameter. Lists are joined with commas
/// into a single parameter, never repeated as multiple same-named pairs.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    fn to_param(&self) -> String {
        match self {
            ParamValue::Str(value) => value.clone(),
            ParamValue::Int(value) => value.to_string(),
            ParamValue::Bool(value) => value.to_string(),
            ParamValue::List(values) => values.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|value| value.to_string()).collect())
    }
}

/// Options controlling a single list/fetch request: pagination window,
/// field selection, sort specification, filter expression, and count flag.
///
/// Unset options are omitted from the encoded query string entirely; an
/// explicitly empty string is preserved (`q=`).
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    /// Maximum number of rows to return.
    pub limit: Option<u32>,
    /// Number of rows to skip before the first returned row.
    pub offset: Option<u32>,
    /// Fields to include in each row, joined into one `fields` parameter.
    pub fields: Option<Vec<String>>,
    /// Sort specification, normalized into one `sort` parameter.
    pub sort: Option<SortSpec>,
    /// Pre-built filter expression, passed through opaquely as `q`.
    pub q: Option<String>,
    /// Requests a total-count computation alongside the rows.
    pub count: Option<bool>,
    extra: Vec<(String, ParamValue)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.iter().map(|field| field.to_string()).collect());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the `q` filter expression, usually the output of
    /// [`SearchCriteria::build`](crate::SearchCriteria::build).
    pub fn with_filter(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the `q` filter expression when one was produced; `None` leaves
    /// the filter out of the query string entirely.
    pub fn with_filter_opt(mut self, q: Option<String>) -> Self {
        self.q = q;
        self
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Appends an additional query parameter. Parameters are emitted after
    /// the named options, in the order they were added.
    pub fn with_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.to_string(), value.into()));
        self
    }

    /// Serializes the options into a form-urlencoded query string with no
    /// leading `?`. Unset options produce no parameter; an empty options
    /// value yields the empty string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            serializer.append_pair("offset", &offset.to_string());
        }
        if let Some(fields) = &self.fields {
            serializer.append_pair("fields", &fields.join(","));
        }
        if let Some(sort) = &self.sort {
            serializer.append_pair("sort", &sort.to_param());
        }
        if let Some(q) = &self.q {
            serializer.append_pair("q", q);
        }
        if let Some(count) = self.count {
            serializer.append_pair("count", if count { "true" } else { "false" });
        }
        for (name, value) in &self.extra {
            serializer.append_pair(name, &value.to_param());
        }
        serializer.finish()
    }
}
