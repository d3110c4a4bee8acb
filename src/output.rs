//! Output formatting for CLI display.
//!
//! Values are rendered as a `tabled` table, pretty JSON or YAML depending on
//! [`PrintAs`].

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::{PivnetError, Result};
use crate::{Eula, EulaAcceptance, Product, ProductFile, Release, UserGroup};

/// Output format selected with `--print-as`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintAs {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Conversion of a model into a single table row.
pub trait TableRow {
    type Row: Tabled;

    fn to_row(&self) -> Self::Row;
}

/// Render a list of items.
pub fn print_list<T>(out: &mut dyn Write, format: PrintAs, items: &[T]) -> Result<()>
where
    T: Serialize + TableRow,
{
    match format {
        PrintAs::Table => {
            let rows: Vec<T::Row> = items.iter().map(TableRow::to_row).collect();
            writeln!(out, "{}", Table::new(rows))?;
        }
        PrintAs::Json => writeln!(out, "{}", to_json(items)?)?,
        PrintAs::Yaml => write!(out, "{}", serde_yaml::to_string(items)?)?,
    }
    Ok(())
}

/// Render a single item; tables get one row.
pub fn print_single<T>(out: &mut dyn Write, format: PrintAs, item: &T) -> Result<()>
where
    T: Serialize + TableRow,
{
    match format {
        PrintAs::Table => writeln!(out, "{}", Table::new([item.to_row()]))?,
        PrintAs::Json => writeln!(out, "{}", to_json(item)?)?,
        PrintAs::Yaml => write!(out, "{}", serde_yaml::to_string(item)?)?,
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PivnetError::OutputError(e.to_string()))
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[derive(Tabled)]
pub struct ProductRow {
    id: u64,
    slug: String,
    name: String,
}

impl TableRow for Product {
    type Row = ProductRow;

    fn to_row(&self) -> ProductRow {
        ProductRow {
            id: self.id,
            slug: self.slug.clone(),
            name: or_empty(&self.name),
        }
    }
}

#[derive(Tabled)]
pub struct ReleaseRow {
    id: u64,
    version: String,
    description: String,
}

impl TableRow for Release {
    type Row = ReleaseRow;

    fn to_row(&self) -> ReleaseRow {
        ReleaseRow {
            id: self.id,
            version: self.version.clone(),
            description: or_empty(&self.description),
        }
    }
}

#[derive(Tabled)]
pub struct EulaRow {
    id: u64,
    slug: String,
    name: String,
}

impl TableRow for Eula {
    type Row = EulaRow;

    fn to_row(&self) -> EulaRow {
        EulaRow {
            id: self.id,
            slug: or_empty(&self.slug),
            name: or_empty(&self.name),
        }
    }
}

#[derive(Tabled)]
pub struct EulaAcceptanceRow {
    accepted_at: String,
}

impl TableRow for EulaAcceptance {
    type Row = EulaAcceptanceRow;

    fn to_row(&self) -> EulaAcceptanceRow {
        EulaAcceptanceRow {
            accepted_at: or_empty(&self.accepted_at),
        }
    }
}

#[derive(Tabled)]
pub struct UserGroupRow {
    id: u64,
    name: String,
    description: String,
}

impl TableRow for UserGroup {
    type Row = UserGroupRow;

    fn to_row(&self) -> UserGroupRow {
        UserGroupRow {
            id: self.id,
            name: self.name.clone(),
            description: or_empty(&self.description),
        }
    }
}

#[derive(Tabled)]
pub struct ProductFileRow {
    id: u64,
    name: String,
    #[tabled(rename = "type")]
    file_type: String,
    version: String,
    md5: String,
}

impl TableRow for ProductFile {
    type Row = ProductFileRow;

    fn to_row(&self) -> ProductFileRow {
        ProductFileRow {
            id: self.id,
            name: or_empty(&self.name),
            file_type: or_empty(&self.file_type),
            version: or_empty(&self.file_version),
            md5: or_empty(&self.md5),
        }
    }
}
