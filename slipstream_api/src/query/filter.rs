//! Search criteria and their compilation into filter expressions.
//!
//! A [`SearchCriteria`] maps wire field names to a [`FieldValue`] each and
//! compiles into the boolean expression the API accepts in its `q`
//! parameter (`eq`, `like`, `gte`, `lte` comparisons composed with `and`
//! and `or`). Entries that carry no usable value are skipped rather than
//! rejected: an empty operator set, an empty value list, or an absent
//! optional value simply contributes no clause.

/// A literal operand in a filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Renders the expression literal: single quotes around strings, bare
    /// text otherwise. Embedded quotes are passed through unchanged, which
    /// is what the backend parser expects.
    fn literal(&self) -> String {
        match self {
            Scalar::Str(value) => format!("'{}'", value),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

fn eq_or_chain(field: &str, values: &[Scalar]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let clauses: Vec<String> = values
        .iter()
        .map(|value| format!("{} eq {}", field, value.literal()))
        .collect();
    Some(format!("({})", clauses.join(" or ")))
}

/// Comparison operators applied to a single field.
///
/// Operators left unset contribute no clause; a fully empty set contributes
/// nothing at all. When several operators are set, their clauses are joined
/// with ` and ` in the order `eq`, `like`, `gte`, `lte`, `in`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperatorSet {
    eq: Option<Scalar>,
    like: Option<String>,
    gte: Option<Scalar>,
    lte: Option<Scalar>,
    within: Option<Vec<Scalar>>,
}

impl OperatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact equality. Strings are quoted, numbers and booleans are not.
    pub fn eq(mut self, value: impl Into<Scalar>) -> Self {
        self.eq = Some(value.into());
        self
    }

    /// Pattern match. The pattern is used as-is; the caller supplies any
    /// wildcard characters.
    pub fn like(mut self, pattern: impl Into<String>) -> Self {
        self.like = Some(pattern.into());
        self
    }

    /// Greater-than-or-equal comparison.
    pub fn gte(mut self, value: impl Into<Scalar>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Less-than-or-equal comparison.
    pub fn lte(mut self, value: impl Into<Scalar>) -> Self {
        self.lte = Some(value.into());
        self
    }

    /// Membership test, emitted as a parenthesized OR-chain of equality
    /// clauses. An empty list contributes nothing.
    pub fn is_in<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        self.within = Some(values.into_iter().map(Into::into).collect());
        self
    }

    fn contribution(&self, field: &str) -> Option<String> {
        let mut clauses = Vec::new();
        if let Some(value) = &self.eq {
            clauses.push(format!("{} eq {}", field, value.literal()));
        }
        if let Some(pattern) = &self.like {
            clauses.push(format!("{} like '{}'", field, pattern));
        }
        if let Some(value) = &self.gte {
            clauses.push(format!("{} gte {}", field, value.literal()));
        }
        if let Some(value) = &self.lte {
            clauses.push(format!("{} lte {}", field, value.literal()));
        }
        if let Some(values) = &self.within {
            if let Some(chain) = eq_or_chain(field, values) {
                clauses.push(chain);
            }
        }
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" and "))
        }
    }
}

/// The filter intent attached to a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Shorthand form: a string becomes a prefix match
    /// (`FIELD like 'value*'`), a number or boolean an equality test.
    Scalar(Scalar),
    /// OR-disjunction of equality tests, one per value, in list order.
    OneOf(Vec<Scalar>),
    /// Explicit operator set.
    Ops(OperatorSet),
}

impl FieldValue {
    fn contribution(&self, field: &str) -> Option<String> {
        match self {
            FieldValue::Scalar(Scalar::Str(value)) => {
                Some(format!("{} like '{}*'", field, value))
            }
            FieldValue::Scalar(value) => Some(format!("{} eq {}", field, value.literal())),
            FieldValue::OneOf(values) => eq_or_chain(field, values),
            FieldValue::Ops(operators) => operators.contribution(field),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl<S: Into<Scalar>> From<Vec<S>> for FieldValue {
    fn from(values: Vec<S>) -> Self {
        FieldValue::OneOf(values.into_iter().map(Into::into).collect())
    }
}

impl From<OperatorSet> for FieldValue {
    fn from(operators: OperatorSet) -> Self {
        FieldValue::Ops(operators)
    }
}

/// Ordered set of per-field filter intents.
///
/// Fields are compiled in insertion order and joined with ` and `. Field
/// names are wire names, usually supplied via the per-entity field enums
/// such as [`DemandSlipField`](crate::DemandSlipField).
#[derive(Clone, Debug, Default)]
pub struct SearchCriteria {
    entries: Vec<(String, FieldValue)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter intent for a field.
    pub fn field(mut self, field: impl ToString, value: impl Into<FieldValue>) -> Self {
        self.entries.push((field.to_string(), value.into()));
        self
    }

    /// Like [`field`](Self::field), but skips the entry when the value is
    /// absent. A field you did not ask about filters nothing.
    pub fn field_opt<V: Into<FieldValue>>(self, field: impl ToString, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(field, value),
            None => self,
        }
    }

    /// Compiles the criteria into a filter expression.
    ///
    /// Returns `None` when no field contributed a clause, signaling that
    /// the `q` parameter should be omitted entirely. Callers must not
    /// conflate this with an empty-string filter.
    pub fn build(&self) -> Option<String> {
        let contributions: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(field, value)| value.contribution(field))
            .collect();
        if contributions.is_empty() {
            None
        } else {
            Some(contributions.join(" and "))
        }
    }
}
