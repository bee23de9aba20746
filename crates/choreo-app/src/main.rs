//! Main application entry point.

use choreo_app::{App, AppConfig};
use choreo_render::GridStyle;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GridArg {
    None,
    Lines,
    Dots,
}

impl From<GridArg> for GridStyle {
    fn from(arg: GridArg) -> Self {
        match arg {
            GridArg::None => GridStyle::None,
            GridArg::Lines => GridStyle::Lines,
            GridArg::Dots => GridStyle::Dots,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "choreo")]
#[command(version, about = "Replay a formation session and render the board as SVG")]
struct Cli {
    /// Session script (JSON) to replay
    session: PathBuf,

    /// Board configuration file (JSON)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the SVG here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    out: Option<PathBuf>,

    /// Load dancers (JSON, as written by --export) before replaying
    #[arg(long, value_name = "PATH")]
    dancers: Option<PathBuf>,

    /// Export the dancers as JSON
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Grid style
    #[arg(long, value_enum, default_value = "lines")]
    grid: GridArg,
}

fn main() {
    env_logger::init();
    log::info!("Starting Choreo");

    let cli = Cli::parse();
    let to_stdout = cli.out.is_none();
    let config = AppConfig {
        board_config: cli.config,
        dancers: cli.dancers,
        session: cli.session,
        output: cli.out,
        export: cli.export,
        grid_style: cli.grid.into(),
    };

    let result = App::new(config).and_then(|mut app| app.run());
    match result {
        Ok(svg) => {
            if to_stdout {
                let mut stdout = std::io::stdout().lock();
                if let Err(e) = stdout.write_all(svg.as_bytes()) {
                    log::error!("Failed to write SVG: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
