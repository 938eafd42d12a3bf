use anyhow::Result;
use okuke::cli::{self, CliArgs};
use okuke::config::Config;
use okuke::context::{AppContext, StandardContext};
use okuke::controller::Session;
use okuke::logging;
use okuke::storage::LocalStorage;
use okuke::ui::ConsoleUi;
use std::env;
use std::io;

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;
    if args.help {
        cli::print_help("okuke");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let (config, config_error) = Config::load_or_default(&ctx);

    let log_file = if config.log_to_file {
        Some(ctx.get_log_file_path()?)
    } else {
        None
    };
    logging::init_logging(&config.log_level, log_file.as_deref())?;
    if let Some(e) = config_error {
        log::warn!("{:#}; using default settings", e);
    }

    let data_file = match args.file {
        Some(path) => path,
        None => config.resolve_data_file(&ctx)?,
    };

    let mut session = Session::open(LocalStorage::new(data_file));
    log::info!("Using data file {}", session.storage().path().display());
    let mut ui = ConsoleUi::stdout();
    cli::run_loop(&mut session, io::stdin().lock(), &mut ui, config.show_banner);
    Ok(())
}
