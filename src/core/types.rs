use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypesError {
    #[error("Unknown marketplace: {0}")]
    UnknownMarketplace(String),
}

/// Locale the request is sent to. Each locale has its own endpoint host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    #[default]
    Us,
    Br,
    Ca,
    Cn,
    De,
    Es,
    Fr,
    In,
    It,
    Jp,
    Mx,
    Uk,
}

impl Marketplace {
    pub const ALL: [Self; 12] = [
        Self::Us,
        Self::Br,
        Self::Ca,
        Self::Cn,
        Self::De,
        Self::Es,
        Self::Fr,
        Self::In,
        Self::It,
        Self::Jp,
        Self::Mx,
        Self::Uk,
    ];

    /// Endpoint host for this locale
    pub const fn host(self) -> &'static str {
        match self {
            Self::Us => "webservices.amazon.com",
            Self::Br => "webservices.amazon.com.br",
            Self::Ca => "webservices.amazon.ca",
            Self::Cn => "webservices.amazon.cn",
            Self::De => "webservices.amazon.de",
            Self::Es => "webservices.amazon.es",
            Self::Fr => "webservices.amazon.fr",
            Self::In => "webservices.amazon.in",
            Self::It => "webservices.amazon.it",
            Self::Jp => "webservices.amazon.jp",
            Self::Mx => "webservices.amazon.com.mx",
            Self::Uk => "webservices.amazon.co.uk",
        }
    }

    /// Two-letter locale code
    pub const fn code(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Br => "br",
            Self::Ca => "ca",
            Self::Cn => "cn",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::In => "in",
            Self::It => "it",
            Self::Jp => "jp",
            Self::Mx => "mx",
            Self::Uk => "uk",
        }
    }
}

impl FromStr for Marketplace {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or_else(|| TypesError::UnknownMarketplace(s.to_string()))
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Optional data bundle the server is asked to include for each item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseGroup {
    Small,
    Medium,
    Large,
    ItemIds,
    ItemAttributes,
    Images,
    OfferSummary,
    Offers,
    OfferFull,
    SalesRank,
    BrowseNodes,
    Custom(String),
}

impl ResponseGroup {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ItemIds => "ItemIds",
            Self::ItemAttributes => "ItemAttributes",
            Self::Images => "Images",
            Self::OfferSummary => "OfferSummary",
            Self::Offers => "Offers",
            Self::OfferFull => "OfferFull",
            Self::SalesRank => "SalesRank",
            Self::BrowseNodes => "BrowseNodes",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for ResponseGroup {
    fn from(name: &str) -> Self {
        match name {
            "Small" => Self::Small,
            "Medium" => Self::Medium,
            "Large" => Self::Large,
            "ItemIds" => Self::ItemIds,
            "ItemAttributes" => Self::ItemAttributes,
            "Images" => Self::Images,
            "OfferSummary" => Self::OfferSummary,
            "Offers" => Self::Offers,
            "OfferFull" => Self::OfferFull,
            "SalesRank" => Self::SalesRank,
            "BrowseNodes" => Self::BrowseNodes,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ResponseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
