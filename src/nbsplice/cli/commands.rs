use super::print::print_messages;
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use nbsplice::api::{
    parse_opt_ref, parse_ref_list, NbspliceApi, PlacementFlags, SelectionFlags,
};
use nbsplice::config::NbspliceConfig;
use nbsplice::error::Result;
use nbsplice::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "NBSPLICE_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let selection = SelectionFlags {
        cells: parse_ref_list(cli.cell_ids_or_indexes.as_deref())?,
        before: parse_opt_ref(cli.before_id_or_index.as_deref())?,
        after: parse_opt_ref(cli.after_id_or_index.as_deref())?,
        all: cli.all_cells,
        top: cli.top_n,
        bottom: cli.bottom_n,
    };
    let placement = PlacementFlags {
        before: parse_opt_ref(cli.place_before_id_or_index.as_deref())?,
        after: parse_opt_ref(cli.place_after_id_or_index.as_deref())?,
        top: cli.place_at_top,
        bottom: cli.place_at_bottom,
    };

    let config = load_config(cli.config_dir)?;
    let mut api = NbspliceApi::new(FileStore::from_config(&config));
    let result = api.merge_flags(&cli.source_nb, &cli.dest_nb, selection, placement)?;
    print_messages(&result.messages);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "nbsplice=debug"
    } else {
        "nbsplice=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config dir precedence: `--config-dir`, then `$NBSPLICE_CONFIG_DIR`, then
/// the platform config dir. No dir at all means defaults.
fn load_config(flag: Option<PathBuf>) -> Result<NbspliceConfig> {
    let dir = flag
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "nbsplice", "nbsplice")
                .map(|dirs| dirs.config_dir().to_path_buf())
        });
    match dir {
        Some(dir) => NbspliceConfig::load(dir),
        None => Ok(NbspliceConfig::default()),
    }
}
