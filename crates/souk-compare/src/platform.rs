//! Registry of external marketplaces.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Jumia,
    Aliexpress,
    Amazon,
    Ebay,
}

/// Static description of where a platform lives and how to search it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub name: &'static str,
    pub base_url: &'static str,
    /// Path and query-string prefix; the encoded query is appended.
    pub search_path: &'static str,
}

impl PlatformDescriptor {
    /// Search URL for `query` with the query percent-encoded.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}{}{encoded}", self.base_url, self.search_path)
    }
}

const JUMIA: PlatformDescriptor = PlatformDescriptor {
    name: "Jumia",
    base_url: "https://www.jumia.com.ng",
    search_path: "/catalog/?q=",
};

const ALIEXPRESS: PlatformDescriptor = PlatformDescriptor {
    name: "AliExpress",
    base_url: "https://www.aliexpress.com",
    search_path: "/wholesale?SearchText=",
};

const AMAZON: PlatformDescriptor = PlatformDescriptor {
    name: "Amazon",
    base_url: "https://www.amazon.com",
    search_path: "/s?k=",
};

const EBAY: PlatformDescriptor = PlatformDescriptor {
    name: "eBay",
    base_url: "https://www.ebay.com",
    search_path: "/sch/i.html?_nkw=",
};

impl Platform {
    #[must_use]
    pub fn all() -> [Platform; 4] {
        [
            Platform::Jumia,
            Platform::Aliexpress,
            Platform::Amazon,
            Platform::Ebay,
        ]
    }

    #[must_use]
    pub fn descriptor(self) -> &'static PlatformDescriptor {
        match self {
            Platform::Jumia => &JUMIA,
            Platform::Aliexpress => &ALIEXPRESS,
            Platform::Amazon => &AMAZON,
            Platform::Ebay => &EBAY,
        }
    }

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Jumia => "jumia",
            Platform::Aliexpress => "aliexpress",
            Platform::Amazon => "amazon",
            Platform::Ebay => "ebay",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
