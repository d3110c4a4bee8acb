//! CLI command execution.
//!
//! Each handler depends only on the capability trait it needs and writes to
//! a caller-supplied writer, so commands can be exercised with test doubles.
//! Client errors are returned unchanged.

use std::io::Write;

use crate::cli::{Command, ReleaseArgs};
use crate::client::PivnetClient;
use crate::error::Result;
use crate::output::{print_list, print_single, PrintAs};
use crate::traits::{EulaClient, ProductClient, ProductFileClient, ReleaseClient, UserGroupClient};

/// Run `command` against the live API and flush `out`.
pub async fn run(
    client: &PivnetClient,
    command: Command,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    execute(client, command, format, out).await?;
    out.flush()?;
    Ok(())
}

async fn execute(
    client: &PivnetClient,
    command: Command,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Products => products(&client.products(), format, out).await,
        Command::Product(args) => {
            product(&client.products(), &args.product_slug, format, out).await
        }
        Command::Releases(args) => {
            releases(&client.releases(), &args.product_slug, format, out).await
        }
        Command::Release(args) => release(&client.releases(), &args, format, out).await,
        Command::DeleteRelease(args) => delete_release(&client.releases(), &args).await,
        Command::Eulas => eulas(&client.eulas(), format, out).await,
        Command::Eula { eula_slug } => eula(&client.eulas(), &eula_slug, format, out).await,
        Command::AcceptEula(args) => {
            accept_eula(&client.releases(), &client.eulas(), &args, format, out).await
        }
        Command::UserGroups {
            product_slug,
            release_version,
        } => {
            let release_args = match (product_slug, release_version) {
                (Some(product_slug), Some(release_version)) => Some(ReleaseArgs {
                    product_slug,
                    release_version,
                }),
                _ => None,
            };
            user_groups(
                &client.releases(),
                &client.user_groups(),
                release_args.as_ref(),
                format,
                out,
            )
            .await
        }
        Command::AddUserGroup {
            release,
            user_group_id,
        } => add_user_group(&client.releases(), &client.user_groups(), &release, user_group_id).await,
        Command::RemoveUserGroup {
            release,
            user_group_id,
        } => {
            remove_user_group(&client.releases(), &client.user_groups(), &release, user_group_id)
                .await
        }
        Command::ProductFiles {
            product_slug,
            release_version,
        } => {
            product_files(
                &client.releases(),
                &client.product_files(),
                &product_slug,
                release_version.as_deref(),
                format,
                out,
            )
            .await
        }
        Command::ProductFile {
            product_slug,
            product_file_id,
        } => {
            product_file(
                &client.product_files(),
                &product_slug,
                product_file_id,
                format,
                out,
            )
            .await
        }
    }
}

pub async fn products(
    client: &impl ProductClient,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let products = client.list().await?;
    print_list(out, format, &products)
}

pub async fn product(
    client: &impl ProductClient,
    product_slug: &str,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let product = client.get(product_slug).await?;
    print_single(out, format, &product)
}

pub async fn releases(
    client: &impl ReleaseClient,
    product_slug: &str,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let releases = client.list(product_slug).await?;
    print_list(out, format, &releases)
}

pub async fn release(
    client: &impl ReleaseClient,
    args: &ReleaseArgs,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let release = client
        .get_by_version(&args.product_slug, &args.release_version)
        .await?;
    print_single(out, format, &release)
}

pub async fn delete_release(client: &impl ReleaseClient, args: &ReleaseArgs) -> Result<()> {
    let release = client
        .get_by_version(&args.product_slug, &args.release_version)
        .await?;
    client.delete(&args.product_slug, release.id).await
}

pub async fn eulas(client: &impl EulaClient, format: PrintAs, out: &mut dyn Write) -> Result<()> {
    let eulas = client.list().await?;
    print_list(out, format, &eulas)
}

pub async fn eula(
    client: &impl EulaClient,
    eula_slug: &str,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let eula = client.get(eula_slug).await?;
    print_single(out, format, &eula)
}

pub async fn accept_eula(
    releases: &impl ReleaseClient,
    eulas: &impl EulaClient,
    args: &ReleaseArgs,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let release = releases
        .get_by_version(&args.product_slug, &args.release_version)
        .await?;
    let acceptance = eulas.accept(&args.product_slug, release.id).await?;

    if format == PrintAs::Table {
        return Ok(());
    }
    print_single(out, format, &acceptance)
}

pub async fn user_groups(
    releases: &impl ReleaseClient,
    user_groups: &impl UserGroupClient,
    release_args: Option<&ReleaseArgs>,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let groups = match release_args {
        Some(args) => {
            let release = releases
                .get_by_version(&args.product_slug, &args.release_version)
                .await?;
            user_groups
                .list_for_release(&args.product_slug, release.id)
                .await?
        }
        None => user_groups.list().await?,
    };
    print_list(out, format, &groups)
}

pub async fn add_user_group(
    releases: &impl ReleaseClient,
    user_groups: &impl UserGroupClient,
    args: &ReleaseArgs,
    user_group_id: u64,
) -> Result<()> {
    let release = releases
        .get_by_version(&args.product_slug, &args.release_version)
        .await?;
    user_groups
        .add_to_release(&args.product_slug, release.id, user_group_id)
        .await
}

pub async fn remove_user_group(
    releases: &impl ReleaseClient,
    user_groups: &impl UserGroupClient,
    args: &ReleaseArgs,
    user_group_id: u64,
) -> Result<()> {
    let release = releases
        .get_by_version(&args.product_slug, &args.release_version)
        .await?;
    user_groups
        .remove_from_release(&args.product_slug, release.id, user_group_id)
        .await
}

pub async fn product_files(
    releases: &impl ReleaseClient,
    product_files: &impl ProductFileClient,
    product_slug: &str,
    release_version: Option<&str>,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let files = match release_version {
        Some(version) => {
            let release = releases.get_by_version(product_slug, version).await?;
            product_files
                .list_for_release(product_slug, release.id)
                .await?
        }
        None => product_files.list(product_slug).await?,
    };
    print_list(out, format, &files)
}

pub async fn product_file(
    client: &impl ProductFileClient,
    product_slug: &str,
    product_file_id: u64,
    format: PrintAs,
    out: &mut dyn Write,
) -> Result<()> {
    let file = client.get(product_slug, product_file_id).await?;
    print_single(out, format, &file)
}
