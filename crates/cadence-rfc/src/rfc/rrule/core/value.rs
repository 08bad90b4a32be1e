use std::borrow::Cow;

/// Raw rule part value: a scalar, or a list when the source contained a comma.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleValue {
    Scalar(String),
    List(Vec<String>),
}

impl RuleValue {
    /// ## Summary
    /// Builds a value from raw text, splitting on commas when present.
    ///
    /// List items are trimmed and empty items dropped. A list left with at
    /// most one item collapses to a scalar, so `MO,` reads as `MO`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if !raw.contains(',') {
            return Self::Scalar(raw.to_string());
        }

        let mut items: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();

        match items.len() {
            0 => Self::Scalar(String::new()),
            1 => Self::Scalar(items.remove(0)),
            _ => Self::List(items),
        }
    }

    /// Items of the value; a scalar yields itself.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Scalar(value) => vec![value.as_str()],
            Self::List(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Value as text; lists are re-joined with commas.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Scalar(value) => Cow::Borrowed(value.as_str()),
            Self::List(values) => Cow::Owned(values.join(",")),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Scalar(value) => value.trim().is_empty(),
            Self::List(values) => values.is_empty(),
        }
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}
