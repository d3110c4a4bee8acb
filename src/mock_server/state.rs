//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Pivnet API server.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Eula, EulaAcceptance, Product, ProductFile, Release, UserGroup};

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers.
#[derive(Debug, Default)]
pub struct MockState {
    /// Products indexed by slug.
    pub products: HashMap<String, Product>,

    /// Releases per product slug, in listing order.
    pub releases: HashMap<String, Vec<Release>>,

    /// EULAs indexed by slug.
    pub eulas: BTreeMap<String, Eula>,

    /// User groups indexed by ID.
    pub user_groups: BTreeMap<u64, UserGroup>,

    /// User group IDs attached to each release.
    pub release_user_groups: HashMap<u64, BTreeSet<u64>>,

    /// Product files per product slug.
    pub product_files: HashMap<String, Vec<ProductFile>>,

    /// Product file IDs attached to each release.
    pub release_product_files: HashMap<u64, BTreeSet<u64>>,

    /// Release IDs whose EULA has been accepted.
    pub accepted_eulas: BTreeSet<u64>,

    /// Optional authentication token. If set, requests must send
    /// `Authorization: Token <token>`.
    pub required_token: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a product.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.slug.clone(), product);
        self
    }

    /// Add a release to a product.
    pub fn with_release(mut self, product_slug: &str, release: Release) -> Self {
        self.releases
            .entry(product_slug.to_string())
            .or_default()
            .push(release);
        self
    }

    /// Add a EULA.
    pub fn with_eula(mut self, eula: Eula) -> Self {
        let slug = eula.slug.clone().unwrap_or_default();
        self.eulas.insert(slug, eula);
        self
    }

    /// Add a user group.
    pub fn with_user_group(mut self, group: UserGroup) -> Self {
        self.user_groups.insert(group.id, group);
        self
    }

    /// Add a product file to a product.
    pub fn with_product_file(mut self, product_slug: &str, file: ProductFile) -> Self {
        self.product_files
            .entry(product_slug.to_string())
            .or_default()
            .push(file);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Check an `Authorization` header value against the required token.
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        match &self.required_token {
            Some(token) => header == Some(format!("Token {token}").as_str()),
            None => true,
        }
    }

    /// Get a product by slug.
    pub fn get_product(&self, slug: &str) -> Option<&Product> {
        self.products.get(slug)
    }

    /// List all products ordered by ID.
    pub fn list_products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by_key(|p| p.id);
        products
    }

    /// List the releases of a product.
    pub fn list_releases(&self, product_slug: &str) -> Option<&Vec<Release>> {
        self.releases.get(product_slug)
    }

    /// Get a release of a product by ID.
    pub fn get_release(&self, product_slug: &str, release_id: u64) -> Option<&Release> {
        self.releases
            .get(product_slug)?
            .iter()
            .find(|r| r.id == release_id)
    }

    /// Insert a release, assigning the next free ID.
    pub fn create_release(&mut self, product_slug: &str, mut release: Release) -> Option<Release> {
        if !self.products.contains_key(product_slug) {
            return None;
        }
        release.id = self.next_release_id();
        self.releases
            .entry(product_slug.to_string())
            .or_default()
            .push(release.clone());
        Some(release)
    }

    /// Overwrite a release, keeping its ID and links.
    pub fn update_release(&mut self, product_slug: &str, release: Release) -> Option<Release> {
        let existing = self
            .releases
            .get_mut(product_slug)?
            .iter_mut()
            .find(|r| r.id == release.id)?;
        let links = existing.links.take();
        *existing = Release { links, ..release };
        Some(existing.clone())
    }

    /// Remove a release. Returns false if it did not exist.
    pub fn delete_release(&mut self, product_slug: &str, release_id: u64) -> bool {
        let Some(releases) = self.releases.get_mut(product_slug) else {
            return false;
        };
        let before = releases.len();
        releases.retain(|r| r.id != release_id);
        let removed = releases.len() != before;
        if removed {
            self.release_user_groups.remove(&release_id);
            self.release_product_files.remove(&release_id);
            self.accepted_eulas.remove(&release_id);
        }
        removed
    }

    /// Record EULA acceptance for a release.
    pub fn accept_eula(&mut self, product_slug: &str, release_id: u64) -> Option<EulaAcceptance> {
        self.get_release(product_slug, release_id)?;
        self.accepted_eulas.insert(release_id);
        Some(EulaAcceptance {
            accepted_at: Some("2016-01-11".to_string()),
            links: None,
        })
    }

    /// User groups attached to a release.
    pub fn user_groups_for_release(&self, release_id: u64) -> Vec<UserGroup> {
        self.release_user_groups
            .get(&release_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.user_groups.get(id).cloned())
            .collect()
    }

    /// Product files attached to a release.
    pub fn product_files_for_release(&self, product_slug: &str, release_id: u64) -> Vec<ProductFile> {
        let attached = self.release_product_files.get(&release_id);
        self.product_files
            .get(product_slug)
            .into_iter()
            .flatten()
            .filter(|f| attached.is_some_and(|ids| ids.contains(&f.id)))
            .cloned()
            .collect()
    }

    /// Get a product file by ID.
    pub fn get_product_file(&self, product_slug: &str, id: u64) -> Option<&ProductFile> {
        self.product_files
            .get(product_slug)?
            .iter()
            .find(|f| f.id == id)
    }

    fn next_release_id(&self) -> u64 {
        self.releases
            .values()
            .flatten()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_get_release() {
        let state = MockState::new()
            .with_product(Fixtures::product(1, "banana"))
            .with_release("banana", Fixtures::release(10, "1.0.0"));

        let release = state.get_release("banana", 10);
        assert_eq!(release.unwrap().version, "1.0.0");
        assert!(state.get_release("banana", 11).is_none());
        assert!(state.get_release("apple", 10).is_none());
    }

    #[test]
    fn test_state_create_assigns_next_id() {
        let mut state = MockState::new()
            .with_product(Fixtures::product(1, "banana"))
            .with_release("banana", Fixtures::release(10, "1.0.0"));

        let created = state
            .create_release("banana", Fixtures::release(0, "2.0.0"))
            .unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(state.list_releases("banana").unwrap().len(), 2);

        assert!(state
            .create_release("missing", Fixtures::release(0, "1.0.0"))
            .is_none());
    }

    #[test]
    fn test_state_delete_release_drops_associations() {
        let mut state = MockState::new()
            .with_product(Fixtures::product(1, "banana"))
            .with_release("banana", Fixtures::release(10, "1.0.0"))
            .with_user_group(Fixtures::user_group(2, "group 1"));
        state.release_user_groups.entry(10).or_default().insert(2);

        assert!(state.delete_release("banana", 10));
        assert!(state.user_groups_for_release(10).is_empty());
        assert!(!state.delete_release("banana", 10));
    }

    #[test]
    fn test_state_authorization() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_token("secret");
        assert!(locked.is_authorized(Some("Token secret")));
        assert!(!locked.is_authorized(Some("Token other")));
        assert!(!locked.is_authorized(None));
    }
}
