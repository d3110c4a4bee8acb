//! Basic example demonstrating the Pivnet API client.
//!
//! Run with:
//! ```
//! PIVNET_API_TOKEN=your-token cargo run --example basic -- pivotal-cf
//! ```

use pivnet::{PivnetClient, ProductClient, ProductFileClient, ReleaseClient, UserGroupClient};

#[tokio::main]
async fn main() -> pivnet::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let product_slug = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pivotal-cf".to_string());

    // Create client from environment variables
    println!("Creating Pivnet client...");
    let client = PivnetClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    let product = client.products().get(&product_slug).await?;
    println!(
        "\nProduct {} ({})",
        product.slug,
        product.name.as_deref().unwrap_or("-")
    );

    println!("\n--- Releases ---");
    let releases = client.releases().list(&product_slug).await?;
    for release in releases.iter().take(5) {
        println!(
            "  {} {} [{}]",
            release.id,
            release.version,
            release.eula_slug().unwrap_or("no EULA")
        );
    }
    if releases.len() > 5 {
        println!("  ... and {} more", releases.len() - 5);
    }

    let Some(latest) = releases.first() else {
        println!("No releases found");
        return Ok(());
    };

    println!("\n--- Release {} ---", latest.version);
    let groups = client
        .user_groups()
        .list_for_release(&product_slug, latest.id)
        .await?;
    println!("User groups: {}", groups.len());
    for group in &groups {
        println!("  {} {}", group.id, group.name);
    }

    let files = client
        .product_files()
        .list_for_release(&product_slug, latest.id)
        .await?;
    println!("Product files: {}", files.len());
    for file in &files {
        println!(
            "  {} {}",
            file.id,
            file.aws_object_url.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
