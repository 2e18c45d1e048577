//! Line-oriented showroom browser and entry point.
//!
//! A thin host for the showroom library: it reads commands from stdin, turns them
//! into library [`Event`]s and prints the resulting listing as plain text. All
//! state lives in the library [`Session`]; this file only parses and prints.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse arguments, read config (`--config`, then the default config
//!    file, then defaults)
//! 2. **Trace**: Install the tracing subscriber
//! 3. **Initialize**: Load catalog and theme, build the session
//! 4. **Loop**: Parse command → `handle_event` → print the current screen
//!
//! # Commands
//!
//! - `search <text>`: Replace the search text (empty clears it)
//! - `brand <name|all>`, `fuel <type|all>`, `transmission <type|all>`
//! - `sort <default|price_low|price_high|year_new|year_old>`
//! - `fav <id>`: Toggle a favorite
//! - `clear`: Reset every filter and the search text
//! - `home`, `list`, `favorites`: Switch screen
//! - `help`, `quit`

use clap::Parser;
use showroom::domain::{FuelType, Transmission, VehicleId};
use showroom::ui::{ListingViewModel, Theme};
use showroom::{handle_event, infrastructure, initialize, observability, Choice, Config, Event, Screen, SortMode};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  search <text>                 filter by brand/model text
  brand <name|all>              select a brand
  fuel <petrol|diesel|hybrid|electric|all>
  transmission <automatic|manual|cvt|all>
  sort <default|price_low|price_high|year_new|year_old>
  fav <id>                      toggle a favorite
  clear                         reset filters and search
  home | list | favorites       switch screen
  help | quit";

#[derive(Debug, Parser)]
#[command(name = "showroom")]
#[command(about = "Browse the vehicle inventory from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML); defaults to the user config file when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `trace_level` from the configuration.
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(Event),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match head.to_lowercase().as_str() {
        "" | "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "search" => Event::SetSearch(rest.to_string()),
        "brand" => {
            if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                Event::SelectBrand(None)
            } else {
                Event::SelectBrand(Some(rest.to_string()))
            }
        }
        "fuel" => Event::SelectFuel(Choice::<FuelType>::parse_lenient(rest)),
        "transmission" => Event::SelectTransmission(Choice::<Transmission>::parse_lenient(rest)),
        "sort" => Event::SelectSort(SortMode::parse_lenient(rest)),
        "fav" => {
            let id = rest
                .parse::<VehicleId>()
                .map_err(|e| format!("fav needs a vehicle id: {e}"))?;
            Event::ToggleFavorite(id)
        }
        "clear" => Event::ClearFilters,
        other => match other.parse::<Screen>() {
            Ok(screen) => Event::ShowScreen(screen),
            Err(_) => return Err(format!("unknown command '{other}', type 'help'")),
        },
    };

    Ok(Command::Event(event))
}

fn render(viewmodel: &ListingViewModel, theme: &Theme) -> String {
    let mut out = String::new();
    let colors = &theme.colors;

    out.push_str(&format!(
        "{}{}{}{}\n",
        Theme::bold(),
        Theme::fg(&colors.primary),
        viewmodel.header.title,
        Theme::reset()
    ));

    if let Some(search) = &viewmodel.search_bar {
        if !search.query.is_empty() {
            out.push_str(&format!("search: {}\n", search.query));
        }
    }
    if let Some(badge) = &viewmodel.filter_badge {
        out.push_str(&format!("{}{}{}\n", Theme::fg(&colors.primary), badge.text, Theme::reset()));
    }

    if let Some(empty) = &viewmodel.empty_state {
        out.push_str(&format!(
            "  {}\n  {}{}{}\n",
            empty.message,
            Theme::fg(&colors.text_muted),
            empty.subtitle,
            Theme::reset()
        ));
        return out;
    }

    for card in &viewmodel.cards {
        let heart = if card.is_favorite { "♥" } else { " " };
        out.push_str(&format!(
            "{heart} [{}] {} {} | {} | {} | {} | {} {}{}{}\n",
            card.id,
            card.year,
            card.title,
            card.price,
            card.mileage,
            card.fuel_type,
            card.transmission,
            Theme::fg(&card.status_color),
            card.status_label,
            Theme::reset()
        ));
    }

    out
}

/// Resolves configuration from the command line.
///
/// An explicit `--config` that cannot be loaded is an error; a broken default
/// config file is reported and skipped.
fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| format!("cannot load config {}: {e}", path.display()))?,
        None => infrastructure::default_config_path()
            .filter(|p| p.exists())
            .map_or_else(Config::default, |path| {
                Config::from_file(&path).unwrap_or_else(|e| {
                    eprintln!("showroom: ignoring config {}: {e}", path.display());
                    Config::default()
                })
            }),
    };

    if let Some(level) = &cli.log_level {
        config.trace_level = Some(level.clone());
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("showroom: {message}");
            std::process::exit(2);
        }
    };
    observability::init_tracing(&config);
    tracing::info!(catalog = ?config.catalog_file, "showroom starting");

    let mut session = match initialize(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize session");
            eprintln!("showroom: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let screen = session.screen();
    let _ = write!(out, "{}", render(&session.compute_viewmodel(screen), session.theme()));
    let _ = out.flush();

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                let _ = writeln!(out, "{HELP}");
            }
            Ok(Command::Event(event)) => {
                let (needs_render, actions) = handle_event(&mut session, &event);
                tracing::debug!(?actions, needs_render, "event handled");
                if needs_render {
                    let screen = session.screen();
                    let viewmodel = session.compute_viewmodel(screen);
                    let _ = write!(out, "{}", render(&viewmodel, session.theme()));
                }
            }
            Err(message) => {
                let _ = writeln!(out, "{message}");
            }
        }
        let _ = out.flush();
    }

    tracing::info!("showroom exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_flag_is_not_taken_as_a_config_path() {
        let err = Cli::try_parse_from(["showroom", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        assert!(Cli::try_parse_from(["showroom", "catalog.toml"]).is_err());
        assert!(Cli::try_parse_from(["showroom", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn config_flag_and_log_level_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"warn\"\nhighlight_count = 2").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["showroom", "--config", path.as_str(), "--log-level", "debug"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.highlight_count, 2);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from(["showroom", "-c", "/no/such/showroom.toml"]).unwrap();
        assert!(load_config(&cli).unwrap_err().contains("/no/such/showroom.toml"));
    }

    #[test]
    fn parses_filter_commands() {
        assert_eq!(
            parse_command("brand Suzuki"),
            Ok(Command::Event(Event::SelectBrand(Some("Suzuki".to_string()))))
        );
        assert_eq!(parse_command("brand all"), Ok(Command::Event(Event::SelectBrand(None))));
        assert_eq!(
            parse_command("fuel diesel"),
            Ok(Command::Event(Event::SelectFuel(Choice::Only(FuelType::Diesel))))
        );
        assert_eq!(
            parse_command("transmission gearbox"),
            Ok(Command::Event(Event::SelectTransmission(Choice::All)))
        );
        assert_eq!(
            parse_command("sort price_high"),
            Ok(Command::Event(Event::SelectSort(SortMode::PriceDescending)))
        );
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("search  suzuki swift "),
            Ok(Command::Event(Event::SetSearch("suzuki swift".to_string())))
        );
        assert_eq!(parse_command("search"), Ok(Command::Event(Event::SetSearch(String::new()))));
    }

    #[test]
    fn parses_navigation_and_control() {
        assert_eq!(parse_command("favorites"), Ok(Command::Event(Event::ShowScreen(Screen::Favorites))));
        assert_eq!(parse_command("list"), Ok(Command::Event(Event::ShowScreen(Screen::Inventory))));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command(""), Ok(Command::Help));
        assert_eq!(parse_command("fav 5"), Ok(Command::Event(Event::ToggleFavorite(VehicleId(5)))));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("fav five").is_err());
        assert!(parse_command("teleport").is_err());
    }

    #[test]
    fn renders_empty_state() {
        let mut session = initialize(&Config::default()).unwrap();
        handle_event(&mut session, &Event::ShowScreen(Screen::Favorites));
        let text = render(&session.compute_viewmodel(Screen::Favorites), session.theme());
        assert!(text.contains("Favorites (0 Cars)"));
        assert!(text.contains("No Favorites Yet"));
    }

    #[test]
    fn renders_cards_with_favorite_marker() {
        let mut session = initialize(&Config::default()).unwrap();
        handle_event(&mut session, &Event::ToggleFavorite(VehicleId(5)));
        let text = render(&session.compute_viewmodel(Screen::Inventory), session.theme());
        assert!(text.contains("Inventory (7 Cars)"));
        assert!(text.contains("♥ [5] 2021 Suzuki APV GLX"));
    }
}
