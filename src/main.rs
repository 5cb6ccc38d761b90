use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wallpaper_xml::app::{self, AppError, Environment, Request};
use wallpaper_xml::config;
use wallpaper_xml::prompt::Prompter;
use wallpaper_xml::types::{DocumentKind, Scope};

#[derive(Parser)]
#[command(name = "wallpaper-xml")]
#[command(about = "Register image directories as GNOME wallpapers or slideshows")]
#[command(long_about = "\
Register image directories as GNOME wallpapers or slideshows

Each directory becomes one XML descriptor named after it:

  photos/  →  photos-wallpapers.xml   (wallpapers)
  photos/  →  photos-slideshow.xml    (slideshow)

Only files whose contents are recognised as images are included; anything
else is listed and skipped. Descriptors go to a system directory (--scope
global, requires root) or to your home directory (--scope local).

Slideshows ask, per directory, for a random or fixed display interval and
a transition time.

Run 'wallpaper-xml gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/wallpaper-xml/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Install globally or locally instead of asking
    #[arg(long, value_enum, global = true)]
    scope: Option<Scope>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add every image as a static wallpaper
    Wallpapers {
        /// Image directories
        #[arg(required = true)]
        directories: Vec<PathBuf>,
    },
    /// Build a timed slideshow from each directory
    Slideshow {
        /// Image directories
        #[arg(required = true)]
        directories: Vec<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let (kind, directories) = match cli.command {
        Command::Wallpapers { directories } => (DocumentKind::Wallpapers, directories),
        Command::Slideshow { directories } => (DocumentKind::Slideshow, directories),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
    };

    let config = match (cli.config, config::default_config_path()) {
        (Some(path), _) => config::load_explicit_config(&path)?,
        (None, Some(path)) => config::load_config(&path)?,
        (None, None) => config::resolve_config(None)?,
    };

    let request = Request {
        kind,
        directories,
        scope: cli.scope,
    };
    let env = Environment::current()?;
    log::debug!("cwd {}, superuser: {}", env.cwd.display(), env.is_superuser);

    let mut prompter = Prompter::stdio();
    app::run(&request, &config, &env, &mut prompter, &mut rand::rng())?;
    Ok(())
}
