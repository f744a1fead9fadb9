use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nbsplice", bin_name = "nbsplice", version)]
#[command(
    about = "Extract cells from one Jupyter notebook and place them into another",
    long_about = None
)]
#[command(group(ArgGroup::new("selection").required(true).multiple(false)))]
#[command(group(ArgGroup::new("placement").required(false).multiple(false)))]
pub struct Cli {
    /// Path to the source Jupyter notebook
    pub source_nb: PathBuf,

    /// Path to the destination Jupyter notebook
    pub dest_nb: PathBuf,

    /// GUIDs or indexes of the cells to extract
    #[arg(
        long = "cell_ids_or_indexes",
        alias = "cell-ids-or-indexes",
        value_name = "ID_OR_INDEX",
        num_args = 1..,
        group = "selection",
        help_heading = "Selection"
    )]
    pub cell_ids_or_indexes: Option<Vec<String>>,

    /// Extract all cells before this cell ID or index
    #[arg(
        long = "before_id_or_index",
        alias = "before-id-or-index",
        value_name = "ID_OR_INDEX",
        group = "selection",
        help_heading = "Selection"
    )]
    pub before_id_or_index: Option<String>,

    /// Extract all cells after this cell ID or index
    #[arg(
        long = "after_id_or_index",
        alias = "after-id-or-index",
        value_name = "ID_OR_INDEX",
        group = "selection",
        help_heading = "Selection"
    )]
    pub after_id_or_index: Option<String>,

    /// Extract all cells from the source notebook
    #[arg(
        long = "all_cells",
        alias = "all-cells",
        group = "selection",
        help_heading = "Selection"
    )]
    pub all_cells: bool,

    /// Extract the top N cells (negative N: all but the last N)
    #[arg(
        long = "top_n",
        alias = "top-n",
        value_name = "N",
        allow_negative_numbers = true,
        group = "selection",
        help_heading = "Selection"
    )]
    pub top_n: Option<i64>,

    /// Extract the bottom N cells (negative N: all but the first N)
    #[arg(
        long = "bottom_n",
        alias = "bottom-n",
        value_name = "N",
        allow_negative_numbers = true,
        group = "selection",
        help_heading = "Selection"
    )]
    pub bottom_n: Option<i64>,

    /// Place extracted cells before this cell ID or index in the destination
    #[arg(
        long = "place_before_id_or_index",
        alias = "place-before-id-or-index",
        value_name = "ID_OR_INDEX",
        group = "placement",
        help_heading = "Placement"
    )]
    pub place_before_id_or_index: Option<String>,

    /// Place extracted cells after this cell ID or index in the destination
    #[arg(
        long = "place_after_id_or_index",
        alias = "place-after-id-or-index",
        value_name = "ID_OR_INDEX",
        group = "placement",
        help_heading = "Placement"
    )]
    pub place_after_id_or_index: Option<String>,

    /// Place extracted cells at the top of the destination
    #[arg(
        long = "place_at_top",
        alias = "place-at-top",
        group = "placement",
        help_heading = "Placement"
    )]
    pub place_at_top: bool,

    /// Place extracted cells at the bottom of the destination (default)
    #[arg(
        long = "place_at_bottom",
        alias = "place-at-bottom",
        group = "placement",
        help_heading = "Placement"
    )]
    pub place_at_bottom: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}
