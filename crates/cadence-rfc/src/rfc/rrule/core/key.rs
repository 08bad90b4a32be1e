/// Rule part name. Parsing is case-insensitive; [`RuleKey::as_str`] is the
/// canonical upper-case spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKey {
    Freq,
    Interval,
    ByDay,
    ByMonth,
    ByMonthDay,
    Until,
    Count,
    /// Any other part, kept verbatim (upper-cased) but never interpreted.
    Other(String),
}

impl RuleKey {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let upper = raw.trim().to_ascii_uppercase();
        match upper.as_str() {
            "FREQ" => Self::Freq,
            "INTERVAL" => Self::Interval,
            "BYDAY" => Self::ByDay,
            "BYMONTH" => Self::ByMonth,
            "BYMONTHDAY" => Self::ByMonthDay,
            "UNTIL" => Self::Until,
            "COUNT" => Self::Count,
            _ => Self::Other(upper),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Freq => "FREQ",
            Self::Interval => "INTERVAL",
            Self::ByDay => "BYDAY",
            Self::ByMonth => "BYMONTH",
            Self::ByMonthDay => "BYMONTHDAY",
            Self::Until => "UNTIL",
            Self::Count => "COUNT",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
