//! Core types shared by the uploaders.
//!
//! `Service` names the remote host a request is aimed at, `Retention` is the
//! Litterbox `time` code.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Remote file host targeted by an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Permanent host (catbox.moe)
    Catbox,
    /// Temporary host (litterbox.catbox.moe)
    Litterbox,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Catbox => f.write_str("Catbox"),
            Service::Litterbox => f.write_str("Litterbox"),
        }
    }
}

/// How long Litterbox keeps an uploaded file.
///
/// The named variants are the codes Litterbox documents. `Other` carries any
/// other code verbatim; it is sent as-is and the remote service decides
/// whether to accept it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Retention {
    #[default]
    OneHour,
    TwelveHours,
    OneDay,
    ThreeDays,
    OneWeek,
    Other(String),
}

impl Retention {
    /// Every code Litterbox documents, shortest first
    pub const KNOWN: [Retention; 5] = [
        Retention::OneHour,
        Retention::TwelveHours,
        Retention::OneDay,
        Retention::ThreeDays,
        Retention::OneWeek,
    ];

    /// The code sent in the `time` form field
    pub fn as_str(&self) -> &str {
        match self {
            Retention::OneHour => "1h",
            Retention::TwelveHours => "12h",
            Retention::OneDay => "24h",
            Retention::ThreeDays => "72h",
            Retention::OneWeek => "1w",
            Retention::Other(code) => code,
        }
    }

    /// Whether this is one of the documented codes
    pub fn is_known(&self) -> bool {
        !matches!(self, Retention::Other(_))
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Retention {
    fn from(code: String) -> Self {
        match code.as_str() {
            "1h" => Retention::OneHour,
            "12h" => Retention::TwelveHours,
            "24h" => Retention::OneDay,
            "72h" => Retention::ThreeDays,
            "1w" => Retention::OneWeek,
            _ => Retention::Other(code),
        }
    }
}

impl From<&str> for Retention {
    fn from(code: &str) -> Self {
        Retention::from(code.to_string())
    }
}

impl From<Retention> for String {
    fn from(retention: Retention) -> Self {
        match retention {
            Retention::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Retention {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Retention::from(s))
    }
}
