use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use pogoda_core::{Config, OpenWeatherClient, Session, WeatherQuery, fetch_record};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "pogoda", version, about = "Простая погода в терминале")]
pub struct Cli {
    /// Without a subcommand the interactive weather screen starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key, default city and language.
    Configure,

    /// Show current weather for a city once and exit.
    Show {
        /// City name, e.g. "Gomel".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => interactive().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut cfg = Config::load()?;

    let current_city = cfg.default_city().to_string();
    let current_lang = cfg.lang().to_string();

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let city = Text::new("Город по умолчанию:").with_default(&current_city).prompt()?;
    let lang = Text::new("Язык ответов:").with_default(&current_lang).prompt()?;

    cfg.api_key = Some(api_key);
    cfg.default_city = Some(city);
    cfg.lang = Some(lang);
    cfg.save()?;

    println!("Сохранено: {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> Result<()> {
    let cfg = Config::load()?;
    let client = OpenWeatherClient::new(cfg.api_key()?.to_string(), cfg.lang().to_string());

    let query =
        WeatherQuery::new(city).ok_or_else(|| anyhow!("Название города не может быть пустым"))?;

    match fetch_record(&client, &query).await {
        Ok(record) => {
            print!("{}", render::render_record(&record));
            Ok(())
        }
        Err(err) => Err(anyhow!(err.user_message())),
    }
}

/// The single weather screen: auto-fetch the default city, then loop
/// on the city prompt. Esc or Ctrl-C leaves the screen.
async fn interactive() -> Result<()> {
    let cfg = Config::load()?;
    let client =
        Arc::new(OpenWeatherClient::new(cfg.api_key()?.to_string(), cfg.lang().to_string()));
    let mut session = Session::new(client);

    log::debug!("interactive screen starting, default city {:?}", cfg.default_city());

    println!("{}", render::TITLE);
    println!();

    let mut pending = session.submit(cfg.default_city());

    loop {
        if pending {
            println!("{}", render::LOADING);
            session.next_transition().await;
        }
        print!("{}", render::render_screen(session.state(), session.last_record()));
        println!();

        let input = match Text::new("Введите город:").prompt() {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        // Blank input is rejected silently; the prompt just comes back.
        pending = session.submit(&input);
    }

    Ok(())
}
