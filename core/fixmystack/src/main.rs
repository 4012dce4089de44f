mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, Read};
use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{ErrorInput, FixCommand, InputSource};
use ports::inbound::UseCaseRunner;
use ports::outbound::ReportSink;
use wiring::{wire_app, App};

use crate::adapter::{HumanReportSink, JsonReportSink};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn sink(json: bool) -> Box<dyn ReportSink> {
        if json {
            Box::new(JsonReportSink::new(io::stdout()))
        } else {
            Box::new(HumanReportSink::new(io::stdout()))
        }
    }
}

/// Sink の失敗（stdout への書き込み）は I/O エラーとして扱う
fn report(result: anyhow::Result<()>) -> Result<(), Error> {
    result.map_err(|e| Error::io_msg(e.to_string()))
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: FixCommand) -> Result<i32, Error> {
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            FixCommand::Help => {
                print_help();
                Ok(0)
            }
            FixCommand::Docs => {
                print_docs();
                Ok(0)
            }
            FixCommand::Analyze {
                source,
                stack,
                level,
                json,
            } => {
                let selection = stack.unwrap_or(self.app.settings.default_stack);
                let level = level.unwrap_or(self.app.settings.default_level);
                let outcome = match source {
                    InputSource::Text(text) => {
                        self.app
                            .analyze
                            .analyze(&ErrorInput::new(text), selection, level)
                    }
                    InputSource::Stdin => {
                        let mut text = String::new();
                        io::stdin().read_to_string(&mut text)?;
                        self.app
                            .analyze
                            .analyze(&ErrorInput::new(text), selection, level)
                    }
                    InputSource::File(path) => {
                        self.app.analyze.analyze_file(&path, selection, level)
                    }
                };
                outcome.and_then(|o| {
                    let rule = o.rule_id.unwrap_or("fallback");
                    report(Self::sink(json).analysis(&o.record, Some(rule)))?;
                    if !o.saved && !json {
                        eprintln!("fixmystack: warning: the result could not be saved to history");
                    }
                    Ok(0)
                })
            }
            FixCommand::ListHistory { json } => self
                .app
                .history
                .list()
                .and_then(|records| report(Self::sink(json).history(&records)))
                .map(|()| 0),
            FixCommand::ShowHistory { id, json } => self
                .app
                .history
                .get(&id)
                .and_then(|record| report(Self::sink(json).analysis(&record, None)))
                .map(|()| 0),
            FixCommand::ClearHistory => self.app.history.clear().and_then(|count| {
                report(
                    Self::sink(false).notice(&format!("Cleared {} history entries.", count)),
                )?;
                Ok(0)
            }),
        };

        let code = match &result {
            Ok(c) => *c,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &FixCommand) -> &'static str {
    match cmd {
        FixCommand::Help => "help",
        FixCommand::Docs => "docs",
        FixCommand::Analyze { .. } => "analyze",
        FixCommand::ListHistory { .. } => "history",
        FixCommand::ShowHistory { .. } => "show",
        FixCommand::ClearHistory => "clear-history",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("fixmystack: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let verbose = config.verbose;
    let cmd = config_to_command(config)?;

    // ヘルプ類は設定ファイルやホームが壊れていても表示できるよう配線前に処理する
    match cmd {
        FixCommand::Help => {
            print_help();
            return Ok(0);
        }
        FixCommand::Docs => {
            print_docs();
            return Ok(0);
        }
        _ => {}
    }

    let app = wire_app(verbose)?;
    let runner = Runner { app };
    runner.run(cmd)
}

fn print_usage() {
    eprintln!("Usage: fixmystack [options] [error text...]");
}

fn print_help() {
    println!("Usage: fixmystack [options] [error text...]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -s, --stack <stack>       auto, react, node, java, python, sql, docker, general (default: auto)");
    println!("  -l, --level <level>       beginner, intermediate, pro (default: beginner)");
    println!("  -f, --file <path>         Analyze a file. Text files are read; images, audio and documents are simulated.");
    println!("  --json                    Print JSON instead of the human-readable report");
    println!("  -v, --verbose             Mirror structured logs to stderr");
    println!("  -H, --history             List past analyses (newest first, up to 50)");
    println!("  --show <id>               Show a past analysis again");
    println!("  --clear-history           Delete all past analyses");
    println!("  --docs                    Show the built-in documentation");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Input:");
    println!("  Words after the options are joined with a space. Use '-' to read the error from stdin.");
    println!();
    println!("Environment:");
    println!("  FIXMYSTACK_HOME   Home directory. Settings: $FIXMYSTACK_HOME/config/settings.json;");
    println!("                    history: $FIXMYSTACK_HOME/state/history.json");
    println!("                    If unset, $XDG_CONFIG_HOME/fixmystack (e.g. ~/.config/fixmystack) is used.");
    println!();
    println!("Examples:");
    println!("  fixmystack \"TypeError: Cannot read property 'map' of undefined\"");
    println!("  fixmystack -s node -l pro Error: listen EADDRINUSE :::3000");
    println!("  npm run build 2>&1 | fixmystack -");
    println!("  fixmystack --file screenshot.png");
}

fn print_docs() {
    println!("About fixmystack");
    println!("  fixmystack is an error analysis tool for developers of all levels. It reads stack traces,");
    println!("  logs and error messages and explains what went wrong, why it happened, how to fix it and");
    println!("  how to prevent it next time.");
    println!();
    println!("How to Use");
    println!("  1. Paste your error: copy the error message from your terminal or console.");
    println!("  2. Attach logs: pass text files, logs, screenshots or audio recordings with --file.");
    println!("  3. Select stack: choose your technology with --stack, or let auto-detect identify it.");
    println!("  4. Analyze: get a breakdown including prevention tips at the level you choose.");
    println!();
    println!("Tips & Tricks");
    println!("  Context matters");
    println!("    Include the lines of code before the error occurred for better context analysis.");
    println!("  Auto-detect");
    println!("    Not sure which stack? Leave --stack at auto. Keywords like `useEffect` (React)");
    println!("    or `def` (Python) are used to identify it.");
    println!("  History");
    println!("    Previous fixes are kept (up to 50). Use --history to list them and --show <id> to reopen one.");
    println!("  Multimodal input");
    println!("    Screenshots, recordings and documents can be passed with --file. Their text extraction is simulated.");
}
