//! Pivnet API model types and the resource clients that return them.

mod eula;
mod links;
mod product;
mod product_file;
mod release;
mod user_group;

pub use eula::*;
pub use links::*;
pub use product::*;
pub use product_file::*;
pub use release::*;
pub use user_group::*;

use serde::Serialize;

/// Request body referencing another resource by ID, e.g.
/// `{"user_group":{"id":3456}}`.
#[derive(Debug, Serialize)]
pub(crate) struct IdReference {
    pub(crate) id: u64,
}
