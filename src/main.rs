use clap::Parser;
use spice_rack::domain::composition::{derive_blend_colors, format_colors_for_gradient};
use spice_rack::utils::{logger, validation::Validate};
use spice_rack::{
    Catalog, CliConfig, Command, HttpCatalogSource, JsonBlendStore, NewBlend, SpiceFilter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting spice-rack CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = HttpCatalogSource::new(config.api_endpoint.clone());
    let store = JsonBlendStore::new(config.store_path.clone());
    let catalog = Catalog::new(source, store);

    if let Err(e) = run(&catalog, config.command).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    catalog: &Catalog<HttpCatalogSource, JsonBlendStore>,
    command: Command,
) -> spice_rack::Result<()> {
    match command {
        Command::Spices { search, price, heat } => {
            let snapshot = catalog.snapshot().await?;
            let filter = SpiceFilter { search, price, heat };
            let spices = catalog.spices(&snapshot, &filter);
            for spice in &spices {
                println!(
                    "{:>4}  #{}  {:<24} {:<6} {}",
                    spice.id,
                    spice.color,
                    spice.name,
                    spice.price,
                    spice.heat_label()
                );
            }
            println!("{} spice(s)", spices.len());
        }
        Command::Blends { search } => {
            let snapshot = catalog.snapshot().await?;
            let blends = catalog.blends(&snapshot, search.as_deref());
            for blend in &blends {
                let colors = derive_blend_colors(blend, &snapshot.spices, &snapshot.blends);
                println!(
                    "{:>4}  {:<28} [{}]",
                    blend.id,
                    blend.name,
                    format_colors_for_gradient(&colors)
                );
            }
            println!("{} blend(s)", blends.len());
        }
        Command::Show { id } => {
            let snapshot = catalog.snapshot().await?;
            let detail = catalog.blend_with_spices(&snapshot, id)?;
            let colors = derive_blend_colors(&detail.blend, &snapshot.spices, &snapshot.blends);

            println!("{} (id {})", detail.blend.name, detail.blend.id);
            println!("{}", detail.blend.description);
            println!("swatch: {}", format_colors_for_gradient(&colors));
            println!("spices ({}):", detail.all_spices.len());
            for spice in &detail.all_spices {
                println!(
                    "  - {} (#{}, {}, {})",
                    spice.name,
                    spice.color,
                    spice.price,
                    spice.heat_label()
                );
            }
        }
        Command::Create {
            name,
            description,
            spices,
            blends,
        } => {
            let blend = catalog
                .create_blend(NewBlend {
                    name,
                    description,
                    spices,
                    blends,
                })
                .await?;
            println!("✅ Created blend '{}' with id {}", blend.name, blend.id);
        }
        Command::Reset => {
            catalog.reset_blends()?;
            println!("✅ Local blends cleared");
        }
    }

    Ok(())
}
