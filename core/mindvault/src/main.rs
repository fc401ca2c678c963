mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;

use common::domain::ResourceId;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use cli::args::PLATFORM_SUGGESTIONS;
use cli::render;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{filter_resources, Command, Resource, ResourceType};
use ports::inbound::UseCaseRunner;
use usecase::{DeleteOutcome, ResourceStore};
use wiring::{wire_mindvault, App, ApprovalMode};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record);
    }

    fn dispatch(&self, cmd: Command, json: bool) -> Result<i32, Error> {
        match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::List {
                type_filter,
                search,
            } => {
                let store = self.app.load_store();
                let items = filter_resources(store.resources(), type_filter, &search);
                if json {
                    println!("{}", render::render_json(&items)?);
                } else {
                    print!("{}", render::render_list(type_filter, &search, &items));
                }
                Ok(0)
            }
            Command::Add { draft } => {
                let mut store = self.app.load_store();
                eprintln!("Gemini 正在分析中...");
                let resource = self.app.lifecycle.create(&mut store, &draft)?;
                print_resource(&resource, json, false)?;
                Ok(0)
            }
            Command::Show { id } => {
                let store = self.app.load_store();
                let resource = find(&store, &id)?;
                print_resource(resource, json, true)?;
                Ok(0)
            }
            Command::Notes { id, notes } => {
                let mut store = self.app.load_store();
                if !self.app.lifecycle.update_notes(&mut store, &id, &notes)? {
                    return Err(not_found(&id));
                }
                let resource = find(&store, &id)?;
                print_resource(resource, json, true)?;
                Ok(0)
            }
            Command::Remove { id } => {
                let mut store = self.app.load_store();
                match self.app.lifecycle.delete(&mut store, &id)? {
                    DeleteOutcome::Deleted => println!("已删除: {}", id),
                    DeleteOutcome::Declined => eprintln!("已取消"),
                    DeleteOutcome::NotFound => eprintln!("未找到资源: {}", id),
                }
                Ok(0)
            }
            Command::Stats => {
                let store = self.app.load_store();
                print!("{}", render::render_stats(store.resources()));
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd.name();
        self.log(
            LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .with_field("command", serde_json::json!(command_name))
                .with_field("mutating", serde_json::json!(cmd.is_mutating()))
                .with_field("model", serde_json::json!(self.app.config.gemini.model)),
        );

        let result = self.dispatch(cmd, config.json);

        let code = result.as_ref().copied().unwrap_or(0);
        self.log(
            LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .with_field("command", serde_json::json!(command_name))
                .with_field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

fn not_found(id: &ResourceId) -> Error {
    Error::invalid_argument(format!("resource not found: {}", id))
}

fn find<'a>(store: &'a ResourceStore, id: &ResourceId) -> Result<&'a Resource, Error> {
    store.get(id).ok_or_else(|| not_found(id))
}

fn print_resource(resource: &Resource, json: bool, detail: bool) -> Result<(), Error> {
    if json {
        println!("{}", render::render_json(resource)?);
    } else if detail {
        print!("{}", render::render_detail(resource));
    } else {
        print!("{}", render::render_card(resource));
    }
    Ok(())
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("mindvault: {}", e);
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
    if let Some(ref home) = config.home_dir {
        std::env::set_var("MINDVAULT_HOME", home);
    }
    let app = wire_mindvault(ApprovalMode::from_flags(
        config.assume_yes,
        config.non_interactive,
    ))?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: mindvault [options] [command] [args...]");
}

fn print_help() {
    println!("Usage: mindvault [options] [command] [args...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -d, --home-dir <directory>    Use <directory> as MINDVAULT_HOME for this run");
    println!("  -y, --yes                     Delete without asking for confirmation");
    println!("  --no-interactive              Never prompt (delete confirmations are declined)");
    println!("  --json                        Print list/show/add/notes output as JSON");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Commands:");
    println!("  (none)                        Same as `list`");
    println!("  list [-t <type>] [-q <text>]  List resources, newest first");
    println!("  add --title <t> --url <u> [-t <type>] [-p <platform>] [-c <content>]");
    println!("                                Add a resource; summary and tags come from Gemini");
    println!("  show <id>                     Show one resource with notes and content");
    println!("  notes <id> [text...]          Replace the notes (no text clears them)");
    println!("  remove <id>, rm <id>          Delete a resource after confirmation");
    println!("  stats                         Count resources per type");
    println!("  help                          Show this help message");
    println!();
    println!("Types:");
    for t in ResourceType::ALL {
        println!("  {:<8} {}", t.as_str(), t.label());
    }
    println!();
    println!("Platforms (suggestions): {}", PLATFORM_SUGGESTIONS.join(", "));
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY   API key for summaries and tags (API_KEY is also accepted).");
    println!("                   Without it, new resources get a placeholder summary.");
    println!("  MINDVAULT_HOME   Home directory: config/config.json, data/, state/logs/.");
    println!("                   If unset, XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME are used.");
}
