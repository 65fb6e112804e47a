//! Lexical forms of scalar element and attribute values.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::time::{self, DateTime, Time};
use crate::core::vocab::*;

/// A scalar with an XML Schema lexical representation.
pub trait XmlValue: Sized {
    /// Human-readable name of the lexical type, used in error messages.
    const KIND: &'static str;

    fn to_xml_value(&self) -> String;

    /// `None` when `s` is not a valid lexical form.
    fn from_xml_value(s: &str) -> Option<Self>;
}

impl XmlValue for String {
    const KIND: &'static str = "string";

    fn to_xml_value(&self) -> String {
        self.clone()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        Some(s.to_string())
    }
}

macro_rules! integer_value {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl XmlValue for $ty {
                const KIND: &'static str = $kind;

                fn to_xml_value(&self) -> String {
                    self.to_string()
                }

                fn from_xml_value(s: &str) -> Option<Self> {
                    s.trim().parse().ok()
                }
            }
        )+
    };
}

integer_value!(u32 => "non-negative integer", u64 => "non-negative integer", i32 => "integer");

/// `xsd:double`: shortest round-trip form, with the schema's special values.
impl XmlValue for f64 {
    const KIND: &'static str = "double";

    fn to_xml_value(&self) -> String {
        if self.is_nan() {
            "NaN".to_string()
        } else if *self == f64::INFINITY {
            "INF".to_string()
        } else if *self == f64::NEG_INFINITY {
            "-INF".to_string()
        } else {
            self.to_string()
        }
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        match s.trim() {
            "INF" | "+INF" => Some(f64::INFINITY),
            "-INF" => Some(f64::NEG_INFINITY),
            "NaN" => Some(f64::NAN),
            other
                if !other.is_empty()
                    && other
                        .bytes()
                        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
            {
                other.parse().ok()
            }
            _ => None,
        }
    }
}

impl XmlValue for bool {
    const KIND: &'static str = "boolean";

    fn to_xml_value(&self) -> String {
        self.to_string()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// Written through `Display`, so the scale given at construction survives.
impl XmlValue for Decimal {
    const KIND: &'static str = "decimal";

    fn to_xml_value(&self) -> String {
        self.to_string()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }
}

impl XmlValue for NaiveDate {
    const KIND: &'static str = "date";

    fn to_xml_value(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        time::parse_date(s.trim()).ok()
    }
}

impl XmlValue for DateTime {
    const KIND: &'static str = "date/time";

    fn to_xml_value(&self) -> String {
        self.to_string()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }
}

impl XmlValue for Time {
    const KIND: &'static str = "time";

    fn to_xml_value(&self) -> String {
        self.to_string()
    }

    fn from_xml_value(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }
}

macro_rules! vocabulary_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl XmlValue for $ty {
                const KIND: &'static str = <$ty>::VOCABULARY;

                fn to_xml_value(&self) -> String {
                    self.as_str().to_string()
                }

                fn from_xml_value(s: &str) -> Option<Self> {
                    <$ty>::from_token(s.trim())
                }
            }
        )+
    };
}

vocabulary_value!(
    Sex,
    ContactType,
    OrganisationType,
    FeeType,
    EventClassStatus,
    RaceClassStatus,
    ResultListMode,
    ControlType,
    MapUnit,
    ResultStatus,
    EventStatus,
    EventClassification,
    EventForm,
    RaceDiscipline,
    EventUrlType,
    ResultListStatus,
    SplitTimeStatus,
    RankingScope,
    StartTimeAllocationRequestType,
    SpecialInstruction,
);
