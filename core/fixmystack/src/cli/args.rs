use crate::domain::{ExplainLevel, FixCommand, InputSource, StackSelection};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// --docs: 組み込みドキュメントを表示
    pub docs: bool,
    /// -v / --verbose: 構造化ログを stderr にも流す
    pub verbose: bool,
    /// --json: 人間向けレポートの代わりに JSON を出す
    pub json: bool,
    /// -H / --history: 履歴一覧
    pub history: bool,
    /// --show <id>: 履歴から 1 件を再表示
    pub show: Option<String>,
    pub clear_history: bool,
    /// None なら settings.json の既定値
    pub stack: Option<StackSelection>,
    pub level: Option<ExplainLevel>,
    pub file: Option<PathBuf>,
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("fixmystack")
        .about("Explain an error message and suggest a fix")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("stack")
                .short('s')
                .long("stack")
                .value_name("stack")
                .help("Technology stack (auto, react, node, java, python, sql, docker, general)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("level")
                .short('l')
                .long("level")
                .value_name("level")
                .help("Explanation level (beginner, intermediate, pro)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Analyze a file (text is read, images/audio/documents are simulated)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print JSON instead of the human-readable report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("history")
                .short('H')
                .long("history")
                .help("List past analyses (newest first)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("show")
                .long("show")
                .value_name("id")
                .help("Show a past analysis by id")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("clear-history")
                .long("clear-history")
                .help("Delete all past analyses")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("docs")
                .long("docs")
                .help("Show the built-in documentation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Error text words, or '-' to read from stdin")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let stack = matches
        .get_one::<String>("stack")
        .map(|s| s.parse::<StackSelection>())
        .transpose()?;
    let level = matches
        .get_one::<String>("level")
        .map(|s| s.parse::<ExplainLevel>())
        .transpose()?;
    let message_args: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Ok(Config {
        help: matches.get_flag("help"),
        docs: matches.get_flag("docs"),
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
        history: matches.get_flag("history"),
        show: matches.get_one::<String>("show").cloned(),
        clear_history: matches.get_flag("clear-history"),
        stack,
        level,
        file: matches.get_one::<PathBuf>("file").cloned(),
        message_args,
    })
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "fixmystack", &mut std::io::stdout());
}

/// Config を FixCommand に変換する
///
/// 優先順: help > docs > clear-history > show > history > 解析。
/// --file と本文の同時指定は曖昧なので拒否する。
pub fn config_to_command(config: Config) -> Result<FixCommand, Error> {
    if config.help {
        return Ok(FixCommand::Help);
    }

    if config.docs {
        return Ok(FixCommand::Docs);
    }

    if config.clear_history {
        return Ok(FixCommand::ClearHistory);
    }

    if let Some(id) = config.show {
        return Ok(FixCommand::ShowHistory {
            id,
            json: config.json,
        });
    }

    if config.history {
        return Ok(FixCommand::ListHistory { json: config.json });
    }

    let source = match (config.file, config.message_args.as_slice()) {
        (Some(_), [_, ..]) => {
            return Err(Error::invalid_argument(
                "--file cannot be combined with error text arguments",
            ))
        }
        (Some(path), []) => InputSource::File(path),
        (None, [dash]) if dash == "-" => InputSource::Stdin,
        (None, words) => InputSource::Text(words.join(" ")),
    };

    Ok(FixCommand::Analyze {
        source,
        stack: config.stack,
        level: config.level,
        json: config.json,
    })
}
