use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{get_config_path, parse_page_url, save_config, Config};
use crate::scoring::{validate_thresholds, LengthThresholds, Thresholds};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until the answer parses as a `T`.
fn prompt_parsed<T>(message: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
{
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("  Invalid: expected a number. Try again."),
        }
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(12));
    }
    println!();
}

fn prompt_length_window(label: &str, defaults: LengthThresholds) -> Result<LengthThresholds> {
    Ok(LengthThresholds {
        min: prompt_parsed(&format!("  {} minimum characters", label), defaults.min)?,
        max: prompt_parsed(&format!("  {} maximum characters", label), defaults.max)?,
        optimal: prompt_parsed(&format!("  {} optimal characters", label), defaults.optimal)?,
    })
}

fn prompt_thresholds() -> Result<Thresholds> {
    let defaults = Thresholds::default();
    loop {
        let mut thresholds = defaults.clone();

        println!();
        typewriter("Titles and descriptions score best near their optimal length and are penalized outside the min-max window.");
        thresholds.title = prompt_length_window("Title", defaults.title)?;
        thresholds.description = prompt_length_window("Description", defaults.description)?;

        println!();
        typewriter("Content below the minimum word count is penalized; at the optimal count it scores full marks.");
        thresholds.content_length.min =
            prompt_parsed("  Content minimum words", defaults.content_length.min)?;
        thresholds.content_length.optimal =
            prompt_parsed("  Content optimal words", defaults.content_length.optimal)?;

        println!();
        typewriter("Keyphrase density is the share of words that are the keyphrase, in percent.");
        thresholds.keyphrase_density.min =
            prompt_parsed("  Minimum density %", defaults.keyphrase_density.min)?;
        thresholds.keyphrase_density.max =
            prompt_parsed("  Maximum density %", defaults.keyphrase_density.max)?;

        match validate_thresholds(&thresholds) {
            Ok(()) => return Ok(thresholds),
            Err(errors) => {
                println!("  Those thresholds don't fit together:");
                for error in errors {
                    println!("    - {}", error);
                }
                println!("  Let's try again.");
            }
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("SEO Analyzer Configuration Wizard");
    println!("=================================");
    println!();

    // 1. Page URL
    typewriter("Links in your content are counted as internal when they point at the same host as your site.");
    let page_url = loop {
        let input = prompt_with_default("Site or page URL", "https://www.example.com/")?;
        match parse_page_url(&input) {
            Ok(url) => break url.to_string(),
            Err(e) => println!("  Invalid URL: {}. Try again.", e),
        }
    };

    // 2. Keywords field
    println!();
    typewriter("Some content types expose a comma-separated keywords field. When it is enabled, the keyword count is scored too.");
    let keywords_enabled = prompt_yes_no("Is the keywords field enabled?", false)?;

    // 3. Thresholds
    println!();
    let customize = prompt_yes_no("Customize scoring thresholds? (n accepts defaults)", false)?;
    let thresholds = if customize {
        Some(prompt_thresholds()?)
    } else {
        None
    };

    // 4. Config path
    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 5. Write config
    let config = Config {
        page_url: Some(page_url),
        keywords_enabled: Some(keywords_enabled),
        thresholds,
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `seo-analyzer analyze <file>` to score a page.");

    Ok(())
}
