use clap::Parser;
use pokemon_do_dia::core::picker::{choose_ids, RandomIds};
use pokemon_do_dia::domain::ports::ConfigProvider;
use pokemon_do_dia::utils::{logger, validation::Validate};
use pokemon_do_dia::{error_line, CliConfig, HttpFetcher, PokedexEngine, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pokemon-do-dia");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.settings().and_then(|s: Settings| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {} ({:?})", e, e.kind());
            println!("{}", error_line(&e));
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let ids = choose_ids(
        &settings.ids,
        settings.entity_count(),
        &mut RandomIds,
        settings.max_id(),
    );
    let engine = PokedexEngine::new(HttpFetcher::new(settings.base_url()));

    if settings.compare() {
        let outcome = engine.duel(ids[0], ids[1]).await;
        println!("{}", outcome.render());
        if !outcome.is_complete() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match engine.report(ids[0], settings.variant()).await {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!("Pokémon #{} failed: {} ({:?})", ids[0], e, e.kind());
            println!("{}", error_line(&e));
            std::process::exit(1);
        }
    }

    Ok(())
}
