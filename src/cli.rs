// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::export::export_vocabulary;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_vocabulary_stats;
use crate::config::Config;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::types::theme::Theme;
use crate::types::topic::Topic;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill flashcards in the browser.
    Drill {
        /// Port to serve the page on.
        #[arg(long)]
        port: Option<u16>,
        /// Theme to start with.
        #[arg(long)]
        theme: Option<Theme>,
        /// Difficulty to preselect.
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Don't open the page in a browser.
        #[arg(long)]
        no_open: bool,
        /// Path to a configuration file. Defaults to `flashcards.toml` in
        /// the current directory, if it exists.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print which topics and difficulties have vocabulary.
    Stats {
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Table)]
        format: StatsFormat,
    },
    /// Print the word list a topic and difficulty resolve to, as JSON.
    Export {
        #[arg(long)]
        topic: Topic,
        #[arg(long, default_value_t = Difficulty::Beginner)]
        difficulty: Difficulty,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            port,
            theme,
            difficulty,
            no_open,
            config,
        } => {
            let config = Config::load(config)?;
            let config = override_config(config, port, theme, difficulty, no_open);
            start_server(config).await
        }
        Command::Stats { format } => print_vocabulary_stats(format),
        Command::Export { topic, difficulty } => export_vocabulary(topic, difficulty),
    }
}

/// Command-line flags take precedence over the configuration file.
fn override_config(
    config: Config,
    port: Option<u16>,
    theme: Option<Theme>,
    difficulty: Option<Difficulty>,
    no_open: bool,
) -> Config {
    Config {
        port: port.unwrap_or(config.port),
        theme: theme.unwrap_or(config.theme),
        difficulty: difficulty.unwrap_or(config.difficulty),
        open_browser: config.open_browser && !no_open,
    }
}
