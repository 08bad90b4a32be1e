use chrono::NaiveDate;

use super::{DateRange, Primitive};

/// Composite date predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Primitive(Primitive),
    /// Intersection: both sides must match.
    And(Box<Expr>, Box<Expr>),
    /// Union: either side may match.
    Or(Box<Expr>, Box<Expr>),
}

impl From<Primitive> for Expr {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl Expr {
    #[must_use]
    pub fn and(self, other: impl Into<Expr>) -> Self {
        Self::And(Box::new(self), Box::new(other.into()))
    }

    #[must_use]
    pub fn or(self, other: impl Into<Expr>) -> Self {
        Self::Or(Box::new(self), Box::new(other.into()))
    }

    /// ## Summary
    /// Folds the expressions into a single intersection.
    ///
    /// Returns `None` when `exprs` is empty.
    pub fn all<I>(exprs: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        exprs.into_iter().map(Into::<Expr>::into).reduce(|acc, next| acc.and(next))
    }

    /// ## Summary
    /// Folds the expressions into a single union.
    ///
    /// Returns `None` when `exprs` is empty.
    pub fn any<I>(exprs: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        exprs.into_iter().map(Into::<Expr>::into).reduce(|acc, next| acc.or(next))
    }

    /// ## Summary
    /// Evaluates the predicate for a single date.
    #[must_use]
    pub fn includes(&self, date: NaiveDate) -> bool {
        match self {
            Self::Primitive(primitive) => primitive.includes(date),
            Self::And(left, right) => left.includes(date) && right.includes(date),
            Self::Or(left, right) => left.includes(date) || right.includes(date),
        }
    }

    /// ## Summary
    /// Returns every matching date of `range` in ascending order.
    #[must_use]
    pub fn dates(&self, range: &DateRange) -> Vec<NaiveDate> {
        range.days().filter(|day| self.includes(*day)).collect()
    }

    /// ## Summary
    /// Returns the first `limit` matching dates of `range` in ascending order.
    #[must_use]
    pub fn dates_limited(&self, range: &DateRange, limit: usize) -> Vec<NaiveDate> {
        range
            .days()
            .filter(|day| self.includes(*day))
            .take(limit)
            .collect()
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::And(left, right) => write!(f, "({left} & {right})"),
            Self::Or(left, right) => write!(f, "({left} | {right})"),
        }
    }
}
