use crate::domain::{Command, ResourceDraft, ResourceType, TypeFilter};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ResourceId;
use common::error::Error;

/// 作成フォームのプラットフォーム候補（ヘルプ表示用）
pub const PLATFORM_SUGGESTIONS: [&str; 7] =
    ["X", "Zhihu", "Douyin", "Youtube", "Bilibili", "WeChat", "Weibo"];

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --home-dir（MINDVAULT_HOME として扱う）
    pub home_dir: Option<String>,
    /// -y / --yes: 削除確認を省略して承認
    pub assume_yes: bool,
    /// --no-interactive: 確認プロンプトを出さず常に拒否
    pub non_interactive: bool,
    /// --json: list / show を JSON で出力
    pub json: bool,
    /// サブコマンド（None の場合は全件一覧）
    pub command: Option<Command>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets MINDVAULT_HOME for this process)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Answer yes to delete confirmations")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Never prompt; delete confirmations are declined")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print list/show output as JSON")
                .global(true)
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
}

fn type_arg(help: &'static str) -> clap::Arg {
    clap::Arg::new("type")
        .short('t')
        .long("type")
        .value_name("type")
        .help(help)
        .num_args(1)
}

fn sub(name: &'static str) -> clap::Command {
    clap::Command::new(name).disable_help_flag(true)
}

fn id_arg() -> clap::Arg {
    clap::Arg::new("id").value_name("id").required(true).num_args(1)
}

pub(crate) fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("mindvault")
            .about("Personal knowledge vault: bookmarks with AI summaries and tags")
            .subcommand_required(false)
            .subcommand(sub("help").about("Display this help message"))
            .subcommand(
                sub("list")
                    .about("List resources (newest first)")
                    .arg(type_arg("Filter by type: ALL, ARTICLE, VIDEO, AUDIO, TWEET"))
                    .arg(
                        clap::Arg::new("search")
                            .short('q')
                            .long("search")
                            .value_name("text")
                            .help("Case-insensitive match on title or tags")
                            .num_args(1),
                    ),
            )
            .subcommand(
                sub("add")
                    .about("Add a resource; summary and tags are generated")
                    .arg(
                        clap::Arg::new("title")
                            .long("title")
                            .value_name("title")
                            .required(true)
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("url")
                            .long("url")
                            .value_name("url")
                            .required(true)
                            .num_args(1),
                    )
                    .arg(type_arg("ARTICLE (default), VIDEO, AUDIO, TWEET"))
                    .arg(
                        clap::Arg::new("platform")
                            .short('p')
                            .long("platform")
                            .value_name("platform")
                            .help("e.g. X, Zhihu, Douyin, Youtube, Bilibili, WeChat, Weibo")
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("content")
                            .short('c')
                            .long("content")
                            .value_name("text")
                            .help("Pasted text or description used for the summary")
                            .num_args(1),
                    ),
            )
            .subcommand(
                sub("show")
                    .about("Show one resource with notes")
                    .arg(id_arg()),
            )
            .subcommand(
                sub("notes")
                    .about("Replace the notes of a resource (no text clears them)")
                    .arg(id_arg())
                    .arg(clap::Arg::new("text").value_name("text").num_args(0..)),
            )
            .subcommand(
                sub("remove")
                    .visible_alias("rm")
                    .about("Delete a resource (asks for confirmation)")
                    .arg(id_arg()),
            )
            .subcommand(sub("stats").about("Count resources per type")),
    )
}

fn required_text(m: &clap::ArgMatches, name: &str) -> Result<String, Error> {
    let value = m.get_one::<String>(name).cloned().unwrap_or_default();
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("--{} must not be empty", name)));
    }
    Ok(value)
}

fn id_of(m: &clap::ArgMatches) -> ResourceId {
    ResourceId::new(m.get_one::<String>("id").cloned().unwrap_or_default())
}

fn matches_to_command(matches: &clap::ArgMatches) -> Result<Option<Command>, Error> {
    let command = match matches.subcommand() {
        None | Some(("help", _)) => None,
        Some(("list", m)) => {
            let type_filter = match m.get_one::<String>("type") {
                Some(t) => TypeFilter::parse(t)?,
                None => TypeFilter::All,
            };
            let search = m.get_one::<String>("search").cloned().unwrap_or_default();
            Some(Command::List { type_filter, search })
        }
        Some(("add", m)) => {
            let resource_type = m
                .get_one::<String>("type")
                .map(|t| ResourceType::parse(t))
                .transpose()?;
            let draft = ResourceDraft {
                title: Some(required_text(m, "title")?),
                url: Some(required_text(m, "url")?),
                resource_type,
                platform: m.get_one::<String>("platform").cloned(),
                content_raw: m.get_one::<String>("content").cloned(),
            };
            Some(Command::Add { draft })
        }
        Some(("show", m)) => Some(Command::Show { id: id_of(m) }),
        Some(("notes", m)) => {
            let notes = m
                .get_many::<String>("text")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            Some(Command::Notes { id: id_of(m), notes })
        }
        Some(("remove", m)) => Some(Command::Remove { id: id_of(m) }),
        Some(("stats", _)) => Some(Command::Stats),
        Some((name, _)) => {
            return Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            )))
        }
    };
    Ok(command)
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    Ok(Config {
        help,
        home_dir: matches.get_one::<String>("home-dir").cloned(),
        assume_yes: matches.get_flag("yes"),
        non_interactive: matches.get_flag("no-interactive"),
        json: matches.get_flag("json"),
        command: if help { None } else { matches_to_command(matches)? },
    })
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "mindvault", &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    config.command.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        let mut full = vec!["mindvault"];
        full.extend_from_slice(args);
        match parse_args_from(full)? {
            ParseOutcome::Config(c) => Ok(c),
            ParseOutcome::GenerateCompletion(_) => panic!("unexpected completion"),
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert_eq!(config.home_dir, None);
        assert_eq!(config.command, None);
    }

    #[test]
    fn test_no_command_is_list_all() {
        let config = parse(&[]).unwrap();
        assert_eq!(config_to_command(&config), Command::default());
    }

    #[test]
    fn test_help_flag_and_subcommand() {
        assert_eq!(config_to_command(&parse(&["-h"]).unwrap()), Command::Help);
        assert_eq!(config_to_command(&parse(&["help"]).unwrap()), Command::Help);
        assert_eq!(config_to_command(&parse(&["list", "--help"]).unwrap()), Command::Help);
    }

    #[test]
    fn test_list_with_filters() {
        let config = parse(&["list", "--type", "tweet", "-q", "AI"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            Command::List {
                type_filter: TypeFilter::Only(ResourceType::Tweet),
                search: "AI".to_string()
            }
        );
    }

    #[test]
    fn test_list_unknown_type_is_usage_error() {
        assert!(parse(&["list", "-t", "book"]).unwrap_err().is_usage());
    }

    #[test]
    fn test_add_builds_draft() {
        let config = parse(&[
            "add", "--title", "Test", "--url", "https://x.com", "-t", "VIDEO", "-p", "Bilibili",
            "-c", "hello",
        ])
        .unwrap();
        let Command::Add { draft } = config_to_command(&config) else {
            panic!("expected add");
        };
        assert_eq!(draft.title.as_deref(), Some("Test"));
        assert_eq!(draft.url.as_deref(), Some("https://x.com"));
        assert_eq!(draft.resource_type, Some(ResourceType::Video));
        assert_eq!(draft.platform.as_deref(), Some("Bilibili"));
        assert_eq!(draft.content_raw.as_deref(), Some("hello"));
    }

    #[test]
    fn test_add_requires_title_and_url() {
        let err = parse(&["add", "--title", "T"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        let err = parse(&["add", "--title", " ", "--url", "u"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_notes_joins_words() {
        let config = parse(&["notes", "abc", "key", "point"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            Command::Notes {
                id: ResourceId::new("abc"),
                notes: "key point".to_string()
            }
        );
        let config = parse(&["notes", "abc"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            Command::Notes {
                id: ResourceId::new("abc"),
                notes: String::new()
            }
        );
    }

    #[test]
    fn test_remove_alias_and_global_flags() {
        let config = parse(&["-d", "/tmp/mv", "rm", "abc", "--yes", "--json"]).unwrap();
        assert_eq!(config.home_dir.as_deref(), Some("/tmp/mv"));
        assert!(config.assume_yes);
        assert!(config.json);
        assert_eq!(
            config_to_command(&config),
            Command::Remove {
                id: ResourceId::new("abc")
            }
        );
    }

    #[test]
    fn test_home_dir_after_subcommand() {
        let config = parse(&["list", "-d", "/tmp/mv"]).unwrap();
        assert_eq!(config.home_dir.as_deref(), Some("/tmp/mv"));
        let config = parse(&["stats", "--home-dir", "/tmp/other"]).unwrap();
        assert_eq!(config.home_dir.as_deref(), Some("/tmp/other"));
        assert_eq!(config_to_command(&config), Command::Stats);
    }

    #[test]
    fn test_generate_completion() {
        let outcome = parse_args_from(["mindvault", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_clap_command_is_consistent() {
        build_clap_command().debug_assert();
    }
}
