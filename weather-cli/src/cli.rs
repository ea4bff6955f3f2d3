use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use weather_core::{Config, WeatherSearchController, WeatherView, provider_from_config};

use crate::terminal::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather dashboard in the terminal")]
pub struct Cli {
    /// Backend origin for this run, overriding the configured one.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a city.
    Search {
        /// City name; several words are joined with spaces.
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Show weather for one of the pre-set cities.
    Shortcut {
        /// City name; if absent, pick one from the configured shortcuts.
        name: Option<String>,
    },

    /// Keep prompting for cities until Esc.
    Interactive,

    /// Set the backend origin.
    Configure {
        /// e.g. "http://localhost:5000"; prompted for if absent.
        url: Option<String>,
    },
}

impl Cli {
    /// Failed searches are already printed on the page, so they only turn
    /// into a non-zero exit code.
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        if let Command::Configure { url } = self.command {
            // A broken file must not block rewriting it.
            let mut config = Config::load_or_default();
            configure(&mut config, url.or(self.base_url))?;
            return Ok(ExitCode::SUCCESS);
        }

        let mut config = Config::load()?;

        if let Some(url) = &self.base_url {
            config.set_base_url(url)?;
        }

        let provider = provider_from_config(&config)?;
        let controller = WeatherSearchController::new(provider, TerminalView::new());

        let result = match self.command {
            Command::Search { city } => {
                controller.view().set_input_value(&city.join(" "));
                controller.search_weather().await
            }
            Command::Shortcut { name } => {
                let city = match name {
                    Some(name) => name,
                    None => Select::new("City:", config.shortcuts())
                        .prompt()
                        .context("No shortcut selected")?,
                };
                controller.search_city(&city).await
            }
            Command::Interactive => {
                interactive(&controller).await?;
                return Ok(ExitCode::SUCCESS);
            }
            Command::Configure { .. } => return Ok(ExitCode::SUCCESS),
        };

        controller.view().print()?;

        Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

async fn interactive(controller: &WeatherSearchController<TerminalView>) -> anyhow::Result<()> {
    controller.view().print()?;

    loop {
        let last = controller.view().input_value();
        let answer = Text::new("City:")
            .with_help_message("Enter to search, Esc or Ctrl-C to quit")
            .with_initial_value(&last)
            .prompt_skippable();
        let Some(city) = quit_on_interrupt(answer)? else {
            break;
        };

        controller.view().set_input_value(&city);
        // Failures are already on the page; keep prompting.
        let _ = controller.search_weather().await;
        controller.view().print()?;
    }

    Ok(())
}

/// Ctrl-C ends the prompt loop the same way Esc does.
fn quit_on_interrupt(
    answer: Result<Option<String>, InquireError>,
) -> Result<Option<String>, InquireError> {
    match answer {
        Err(InquireError::OperationInterrupted) => Ok(None),
        other => other,
    }
}

fn configure(config: &mut Config, base_url: Option<String>) -> anyhow::Result<()> {
    let url = match base_url {
        Some(url) => url,
        None => Text::new("Backend URL:")
            .with_default(config.base_url())
            .prompt()
            .context("Configuration cancelled")?,
    };

    config.set_base_url(&url)?;
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Saved backend URL {} to {}", config.base_url(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_is_treated_as_quit() {
        let answer = quit_on_interrupt(Err(InquireError::OperationInterrupted));
        assert!(matches!(answer, Ok(None)));
    }

    #[test]
    fn answers_and_other_errors_pass_through() {
        let answer = quit_on_interrupt(Ok(Some("Porto".into())));
        assert_eq!(answer.unwrap().as_deref(), Some("Porto"));

        assert!(matches!(quit_on_interrupt(Ok(None)), Ok(None)));
        assert!(matches!(quit_on_interrupt(Err(InquireError::NotTTY)), Err(InquireError::NotTTY)));
    }
}
