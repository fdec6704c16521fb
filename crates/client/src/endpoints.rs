//! Ranked endpoint candidates.
//!
//! The session tries base URLs in a fixed priority order: the URL that
//! already worked this session, then a configured override, then the
//! production host, then local development. Absent entries are skipped
//! and duplicates removed while preserving order.

use veltrix_config::EndpointsConfig;

/// The configured candidate set. The session-scoped "remembered" slot
/// lives on the session itself, not here.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub override_url: Option<String>,
    pub production_url: String,
    pub local_url: String,
}

impl Endpoints {
    /// Build the ordered candidate list for one probe or send cycle.
    pub fn candidates(&self, remembered: Option<&str>) -> Vec<String> {
        let raw = [
            remembered.map(str::to_string),
            self.override_url.clone(),
            Some(self.production_url.clone()),
            Some(self.local_url.clone()),
        ];

        let mut out: Vec<String> = Vec::with_capacity(4);
        for candidate in raw.into_iter().flatten() {
            let trimmed = candidate.trim_end_matches('/').to_string();
            if !trimmed.is_empty() && !out.contains(&trimmed) {
                out.push(trimmed);
            }
        }
        out
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        EndpointsConfig::default().into()
    }
}

impl From<EndpointsConfig> for Endpoints {
    fn from(cfg: EndpointsConfig) -> Self {
        Self {
            override_url: cfg.override_url,
            production_url: cfg.production_url,
            local_url: cfg.local_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(override_url: Option<&str>) -> Endpoints {
        Endpoints {
            override_url: override_url.map(str::to_string),
            production_url: "https://prod".into(),
            local_url: "http://localhost:3001".into(),
        }
    }

    #[test]
    fn full_priority_order() {
        let list = endpoints(Some("https://override")).candidates(Some("https://worked"));
        assert_eq!(
            list,
            vec![
                "https://worked",
                "https://override",
                "https://prod",
                "http://localhost:3001"
            ]
        );
    }

    #[test]
    fn absent_entries_skipped() {
        let list = endpoints(None).candidates(None);
        assert_eq!(list, vec!["https://prod", "http://localhost:3001"]);
    }

    #[test]
    fn remembered_duplicate_not_repeated() {
        let list = endpoints(None).candidates(Some("https://prod"));
        assert_eq!(list, vec!["https://prod", "http://localhost:3001"]);
    }

    #[test]
    fn trailing_slash_normalized() {
        let list = endpoints(Some("https://prod/")).candidates(None);
        assert_eq!(list, vec!["https://prod", "http://localhost:3001"]);
    }

    #[test]
    fn default_candidates_from_config() {
        let list = Endpoints::default().candidates(None);
        assert_eq!(
            list,
            vec!["https://api.veltrixlabs.com", "http://localhost:3001"]
        );
    }
}
