//! Hypermedia link relations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Link relations exposed on a resource under `_links`.
///
/// Each relation maps a name (usually `href`) to a URL. Relations missing
/// from the payload stay `None`; an empty object in the payload decodes to
/// `Some` of an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Location of the attached EULA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eula: Option<HashMap<String, String>>,

    /// Location to download the resource from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<HashMap<String, String>>,

    /// Location of the release's product files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_files: Option<HashMap<String, String>>,

    /// Location to POST an EULA acceptance to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eula_acceptance: Option<HashMap<String, String>>,
}

impl Links {
    /// The `href` of the download relation, if present.
    pub fn download_href(&self) -> Option<&str> {
        href(&self.download)
    }

    /// The `href` of the EULA acceptance relation, if present.
    pub fn eula_acceptance_href(&self) -> Option<&str> {
        href(&self.eula_acceptance)
    }

    /// Returns true if no relation is populated.
    pub fn is_empty(&self) -> bool {
        self.eula.is_none()
            && self.download.is_none()
            && self.product_files.is_none()
            && self.eula_acceptance.is_none()
    }
}

fn href(relation: &Option<HashMap<String, String>>) -> Option<&str> {
    relation
        .as_ref()
        .and_then(|r| r.get("href"))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_relations_stay_none() {
        let links: Links = serde_json::from_str(r#"{"download":{"href":"https://d"}}"#).unwrap();

        assert!(links.eula.is_none());
        assert!(links.product_files.is_none());
        assert!(links.eula_acceptance.is_none());
        assert_eq!(links.download_href(), Some("https://d"));
    }

    #[test]
    fn test_present_relations_populate_exact_pairs() {
        let links: Links = serde_json::from_value(serde_json::json!({
            "eula": {"href": "https://e", "method": "GET"},
            "eula_acceptance": {"href": "https://a"}
        }))
        .unwrap();

        let eula = links.eula.as_ref().unwrap();
        assert_eq!(eula.len(), 2);
        assert_eq!(eula["href"], "https://e");
        assert_eq!(eula["method"], "GET");
        assert_eq!(links.eula_acceptance_href(), Some("https://a"));
        assert!(links.download.is_none());
    }

    #[test]
    fn test_empty_links_serialize_to_empty_object() {
        let links = Links::default();
        assert!(links.is_empty());
        assert_eq!(serde_json::to_string(&links).unwrap(), "{}");
    }
}
