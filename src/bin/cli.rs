use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use weekly_hours::{
    CliConfig, DaySchedule, HoursCatalog, HoursValue, TimeOfDay, TimeRange, TimeRangeSet,
    WeekSchedule, Weekday, WeekdaySet, load_catalog_from_csv, load_catalog_from_json,
    save_catalog_to_csv, save_catalog_to_json,
};

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  parse <kind> <text...>             Parse text and print its canonical form\n                                     kinds: hour, range, ranges, day, days, day-hours, weekly\n  check <text...>                    Validate weekly opening hours\n  add <name> <weekly...>             Add or replace a named weekly schedule\n  remove <name>                      Remove a named schedule\n  show                               List the catalog\n  save <json|csv> <path>             Persist the catalog to disk\n  load <json|csv> <path>             Load the catalog from disk\n  quit|exit                          Exit"
    );
}

fn canonical<T: HoursValue>(text: &str) -> Result<String, String> {
    T::parse(text)
        .map(|value| value.render())
        .map_err(|err| err.to_string())
}

fn parse_kind(kind: &str, text: &str) -> Option<Result<String, String>> {
    let result = match kind {
        "hour" => canonical::<TimeOfDay>(text),
        "range" => canonical::<TimeRange>(text),
        "ranges" => canonical::<TimeRangeSet>(text),
        "day" => canonical::<Weekday>(text),
        "days" => canonical::<WeekdaySet>(text),
        "day-hours" => canonical::<DaySchedule>(text),
        "weekly" => canonical::<WeekSchedule>(text),
        _ => return None,
    };
    Some(result)
}

fn print_catalog(catalog: &HoursCatalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    let width = catalog.names().map(str::len).max().unwrap_or(0);
    for (name, schedule) in catalog.iter() {
        println!("  {:<width$}  {}", name, schedule);
    }
}

/// Returns the text following the first `n` whitespace-separated words.
fn rest_after(input: &str, n: usize) -> &str {
    let mut rest = input.trim_start();
    for _ in 0..n {
        rest = match rest.split_once(char::is_whitespace) {
            Some((_, tail)) => tail.trim_start(),
            None => "",
        };
    }
    rest.trim_end()
}

fn main() {
    let config = CliConfig::from_env();
    init_tracing(&config);

    let mut catalog = HoursCatalog::new();
    if let Some(path) = &config.catalog_path {
        match weekly_hours::load_catalog(path) {
            Ok(loaded) => catalog = loaded,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not load startup catalog");
                println!("Error loading {}: {}", path.display(), e);
            }
        }
    }

    println!("Weekly Hours (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "parse" => match parts.next() {
                Some(kind) => {
                    let text = rest_after(input, 2);
                    match parse_kind(kind, text) {
                        Some(Ok(rendered)) => println!("{}", rendered),
                        Some(Err(message)) => println!("Error: {}", message),
                        None => println!("Unknown kind '{}'", kind),
                    }
                }
                None => println!("Usage: parse <kind> <text...>"),
            },
            "check" => {
                let text = rest_after(input, 1);
                match WeekSchedule::parse(text) {
                    Ok(schedule) => println!(
                        "Valid: {} ({} day group(s))",
                        schedule.render(),
                        schedule.len()
                    ),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "add" => match parts.next() {
                Some(name) => {
                    let text = rest_after(input, 2);
                    match WeekSchedule::parse(text) {
                        Ok(schedule) => match catalog.insert(name, schedule) {
                            Ok(Some(_)) => println!("Replaced schedule '{}'.", name),
                            Ok(None) => println!("Added schedule '{}'.", name),
                            Err(e) => println!("Error: {}", e),
                        },
                        Err(e) => println!("Error: {}", e),
                    }
                }
                None => println!("Usage: add <name> <weekly...>"),
            },
            "remove" => match parts.next() {
                Some(name) => match catalog.remove(name) {
                    Some(_) => println!("Removed schedule '{}'.", name),
                    None => println!("Schedule '{}' not found.", name),
                },
                None => println!("Usage: remove <name>"),
            },
            "show" => print_catalog(&catalog),
            "save" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some("json"), Some(path)) => match save_catalog_to_json(&catalog, path) {
                        Ok(_) => println!("Catalog saved to {}", path),
                        Err(e) => println!("Error saving catalog: {}", e),
                    },
                    (Some("csv"), Some(path)) => match save_catalog_to_csv(&catalog, path) {
                        Ok(_) => println!("Catalog saved to {}", path),
                        Err(e) => println!("Error saving catalog: {}", e),
                    },
                    _ => println!("Usage: save <json|csv> <path>"),
                }
            }
            "load" => {
                let format = parts.next();
                let path = parts.next();
                let loaded = match (format, path) {
                    (Some("json"), Some(path)) => Some((path, load_catalog_from_json(path))),
                    (Some("csv"), Some(path)) => Some((path, load_catalog_from_csv(path))),
                    _ => None,
                };
                match loaded {
                    Some((path, Ok(loaded))) => {
                        catalog = loaded;
                        println!("Catalog loaded from {}", path);
                        print_catalog(&catalog);
                    }
                    Some((_, Err(e))) => println!("Error loading catalog: {}", e),
                    None => println!("Usage: load <json|csv> <path>"),
                }
            }
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }
}
