use serde::{Deserialize, Serialize};

/// Where the ephemeris document is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSource {
    /// URL of the JSON document, relative to the page or absolute.
    pub url: String,
    /// Query parameter carrying the cache-busting timestamp.
    pub cache_param: String,
}

impl Default for EphemerisSource {
    fn default() -> Self {
        Self {
            url: "positions.json".to_string(),
            cache_param: "cache".to_string(),
        }
    }
}

impl EphemerisSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// URL for a request issued at `now_ms` (Unix milliseconds). The stamp
    /// defeats intermediary caches so a refreshed file is always picked up.
    pub fn request_url(&self, now_ms: i64) -> String {
        if self.cache_param.is_empty() {
            return self.url.clone();
        }
        let (base, fragment) = match self.url.split_once('#') {
            Some((base, frag)) => (base, Some(frag)),
            None => (self.url.as_str(), None),
        };
        let sep = if base.contains('?') { '&' } else { '?' };
        let mut url = format!("{base}{sep}{}={now_ms}", self.cache_param);
        if let Some(frag) = fragment {
            url.push('#');
            url.push_str(frag);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_query_parameter() {
        let src = EphemerisSource::default();
        assert_eq!(src.request_url(1_700_000_000_000), "positions.json?cache=1700000000000");
    }

    #[test]
    fn extends_existing_query() {
        let src = EphemerisSource::new("https://example.org/eph.json?site=padua");
        assert_eq!(src.request_url(5), "https://example.org/eph.json?site=padua&cache=5");
    }

    #[test]
    fn keeps_fragment_last() {
        let src = EphemerisSource::new("eph.json#latest");
        assert_eq!(src.request_url(7), "eph.json?cache=7#latest");
    }

    #[test]
    fn empty_param_disables_busting() {
        let src = EphemerisSource {
            url: "eph.json".into(),
            cache_param: String::new(),
        };
        assert_eq!(src.request_url(7), "eph.json");
    }
}
