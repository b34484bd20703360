//! CLI for the dashprof URL filter reporter.

mod input;

use anyhow::Result;
use clap::Parser;
use dashprof_core::config;
use dashprof_core::labels::LabelMap;
use dashprof_core::profile::FilterProfile;
use dashprof_core::render;

/// Top-level CLI for the dashprof URL filter reporter.
#[derive(Debug, Parser)]
#[command(name = "dashprof")]
#[command(about = "dashprof: offline dashboard URL filter reporter", long_about = None)]
pub struct Cli {
    /// Dashboard URL to dissect. Prompts on stdin when omitted.
    pub url: Option<String>,

    /// Print the profile as JSON instead of Markdown.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let labels = LabelMap::with_overrides(&cfg.labels);

        // Argument value is used verbatim; only the interactive line is trimmed.
        let input = match self.url {
            Some(url) => url,
            None => input::prompt_for_url()?,
        };

        let profile = FilterProfile::from_url_str(&input)?;
        if self.json {
            println!("{}", render::render_json(&profile)?);
        } else {
            print!("{}", render::render_markdown(&profile, &labels));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
