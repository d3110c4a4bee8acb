//! Capability traits for Pivnet resource families.
//!
//! CLI commands and other consumers depend on these traits rather than on
//! [`PivnetClient`](crate::PivnetClient), so tests can substitute doubles.

mod eulas;
mod product_files;
mod products;
mod releases;
mod user_groups;

pub use eulas::EulaClient;
pub use product_files::ProductFileClient;
pub use products::ProductClient;
pub use releases::ReleaseClient;
pub use user_groups::UserGroupClient;

#[cfg(test)]
pub use eulas::MockEulaClient;
#[cfg(test)]
pub use product_files::MockProductFileClient;
#[cfg(test)]
pub use products::MockProductClient;
#[cfg(test)]
pub use releases::MockReleaseClient;
#[cfg(test)]
pub use user_groups::MockUserGroupClient;
