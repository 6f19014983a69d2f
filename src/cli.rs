// Copyright 2026 the quizdeck authors
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

use std::process::exit;

use chrono::Local;
use clap::Parser;
use tokio::spawn;

use quizdeck_core::Fallible;

use crate::cmd::check::check_collection;
use crate::cmd::drill::server::DrillMode;
use crate::cmd::drill::server::ServerConfig;
use crate::cmd::drill::server::start_server;
use crate::cmd::export::export_collection;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Take a multiple-choice quiz through a web interface.
    Quiz {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Only quiz terms from this topic. By default, all topics are combined.
        #[arg(long)]
        topic: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Review terms as flip cards through a web interface.
    Cards {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Only review terms from this topic. By default, all topics are combined.
        #[arg(long)]
        topic: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Check the integrity of a collection.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Export a collection as JSON.
    Export {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Quiz {
            directory,
            topic,
            host,
            port,
            open_browser,
        } => {
            start_drill(
                DrillMode::Quiz,
                directory,
                topic,
                host,
                port,
                open_browser,
            )
            .await
        }
        Command::Cards {
            directory,
            topic,
            host,
            port,
            open_browser,
        } => {
            start_drill(
                DrillMode::Cards,
                directory,
                topic,
                host,
                port,
                open_browser,
            )
            .await
        }
        Command::Check { directory } => check_collection(directory),
        Command::Stats { directory, format } => print_stats(directory, format),
        Command::Export { directory, output } => export_collection(directory, output),
    }
}

async fn start_drill(
    mode: DrillMode,
    directory: Option<String>,
    topic: Option<String>,
    host: String,
    port: u16,
    open_browser: Option<bool>,
) -> Fallible<()> {
    if open_browser.unwrap_or(true) {
        // Start a separate task to open the browser once the server is up.
        let browser_host = host.clone();
        spawn(async move {
            match wait_for_server(&browser_host, port).await {
                Ok(_) => {
                    let _ = open::that(format!("http://{browser_host}:{port}/"));
                }
                Err(e) => {
                    eprintln!("Failed to connect to server: {e}");
                    exit(-1)
                }
            }
        });
    }
    let config = ServerConfig {
        mode,
        directory,
        topic_filter: topic,
        host,
        port,
        session_started_at: Local::now().naive_local(),
    };
    start_server(config).await
}
