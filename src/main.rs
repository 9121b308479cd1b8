use slate_settings::{Config, PreferenceEntry};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: slate-settings [--file <path>] <command>

Commands:
  list                 Show every preference and its effective value
  get <key>            Show one preference
  set <key> <value>    Change a preference
  reset <key>          Revert a preference to its default
  reset-shortcuts      Revert every shortcut to its default
  path                 Show where settings and data are stored";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--file") {
        Some(i) if i + 1 < args.len() => {
            let path = PathBuf::from(args.remove(i + 1));
            args.remove(i);
            Config::with_settings_path(path)
        }
        Some(_) => return Err("--file needs a path".into()),
        None => Config::load()?,
    };

    let settings = config.open_settings();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => {
            for entry in settings.entries() {
                print_entry(&entry);
            }
        }
        ["get", key] => print_entry(&settings.entry(key)?),
        ["set", key, value] => {
            if settings.set_from_str(key, value)? {
                println!("{} updated", key);
            } else {
                println!("{} unchanged", key);
            }
        }
        ["reset", key] => {
            settings.reset_key(key)?;
            print_entry(&settings.entry(key)?);
        }
        ["reset-shortcuts"] => {
            let changed = settings.reset_shortcuts_to_defaults();
            println!("{} shortcut(s) restored to defaults", changed);
        }
        ["path"] => print_paths(&config),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_entry(entry: &PreferenceEntry) {
    let marker = if entry.stored { "*" } else { " " };
    println!("{} {:<26} {:<9} {}", marker, entry.key, entry.kind, entry.value);
}

fn print_paths(config: &Config) {
    println!("Settings file: {}", config.settings_path().display());
    match Config::data_dir() {
        Ok(dir) => println!("Data directory: {}", dir.display()),
        Err(e) => println!("Data directory: unavailable ({})", e),
    }
}
