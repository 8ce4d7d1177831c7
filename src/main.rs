//! Medikami terminal front end.
//!
//! ## Environment variables
//!
//! | Variable                | Description                                   |
//! |-------------------------|-----------------------------------------------|
//! | `GEMINI_API_KEY`        | Gemini API key; without it only local replies |
//! | `VITE_GEMINI_API_KEY`   | Accepted when `GEMINI_API_KEY` is unset       |
//! | `MEDIKAMI_MODEL`        | Model name (default: gemini-1.5-flash)        |
//! | `MEDIKAMI_TIMEOUT_SECS` | Per-request timeout (default: 30)             |

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use medikami_lib::ai::{GeminiClient, HealthAdvisor};
use medikami_lib::analysis::{analyze, read_upload};
use medikami_lib::chat::{
    ChatController, ChatError, CommandClipboard, CommandSpeech, Sender, Typewriter,
};
use medikami_lib::config::{self, AssistantConfig};

#[derive(Parser, Debug)]
#[command(name = "medikami", about = "Medikami health assistant", version)]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, env = "MEDIKAMI_MODEL")]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(long)]
    temperature: Option<f32>,

    /// Print replies at once instead of revealing them
    #[arg(long)]
    no_typing: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat (default)
    Chat,
    /// Answer one question and exit
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Analyse a medical report, lab result or prescription file
    Analyze { path: PathBuf },
    /// Check that the AI backend answers
    Ping,
}

type Controller = ChatController<GeminiClient>;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    medikami_lib::init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("medikami: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = AssistantConfig::from_env()?;
    if let Some(key) = cli.api_key.filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(key.trim().to_string());
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = secs;
    }
    if let Some(t) = cli.temperature {
        config.temperature = t;
    }
    if cli.no_typing {
        config.typing_delay_ms = 0;
    }
    config.validate()?;

    info!(
        version = config::APP_VERSION,
        model = %config.model,
        key = ?config.masked_key(),
        "{} starting",
        config::APP_NAME
    );

    let advisor = HealthAdvisor::new(GeminiClient::new(&config)?);
    let delay = Duration::from_millis(config.typing_delay_ms);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let controller = ChatController::new(advisor)
                .with_speech(Box::new(CommandSpeech::detect()))
                .with_clipboard(Box::new(CommandClipboard::detect()));
            chat_loop(controller, delay)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask { question } => {
            let mut controller = ChatController::new(advisor);
            if let Some(reply) = controller.send(&question.join(" "))? {
                if let Some(message) = controller.message(reply.message_id) {
                    println!("{}", message.text);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze { path } => {
            let (file, content) = read_upload(&path)?;
            println!("{}", analyze(&file, &content, &advisor).text);
            Ok(ExitCode::SUCCESS)
        }
        Command::Ping => {
            if advisor.test_connection() {
                println!("AI backend reachable ({})", advisor.model().model());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("AI backend not reachable; local responses only");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

const HELP: &str = "Commands: /new  /regen  /search <text>  /upload <path>  /speak  /copy  /listen  /quit";

fn chat_loop(mut chat: Controller, delay: Duration) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    print_welcome(&mut chat, &mut out, delay)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let (command, arg) = match input.split_once(' ') {
            Some((c, rest)) => (c, rest.trim()),
            None => (input, ""),
        };

        let outcome = match command {
            "/quit" | "/exit" => break,
            "/help" => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            "/new" => {
                chat.new_chat();
                print_welcome(&mut chat, &mut out, delay)?;
                Ok(())
            }
            "/regen" => match last_bot_message(&chat) {
                Some(id) => chat
                    .regenerate(id)
                    .and_then(|r| reveal(&mut chat, &mut out, r.message_id, delay)),
                None => Ok(()),
            },
            "/search" => {
                let hits = chat.search(arg);
                writeln!(out, "{} matching message(s)", hits.len())?;
                for m in hits {
                    writeln!(out, "[{}] {}", m.timestamp, first_line(&m.text))?;
                }
                Ok(())
            }
            "/upload" => chat
                .upload(Path::new(arg))
                .and_then(|r| reveal(&mut chat, &mut out, r.message_id, delay)),
            "/speak" => match last_bot_message(&chat) {
                Some(id) => chat.read_aloud(id).map(|started| {
                    if !started {
                        let _ = writeln!(out, "(stopped)");
                    }
                }),
                None => Ok(()),
            },
            "/copy" => match last_bot_message(&chat) {
                Some(id) => chat.copy(id).map(|_| {
                    let _ = writeln!(out, "(copied)");
                }),
                None => Ok(()),
            },
            "/listen" => match chat.listen() {
                Ok(Some(heard)) => send(&mut chat, &mut out, &heard, delay),
                Ok(None) => {
                    writeln!(out, "Voice input is not available.")?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            _ => {
                let text = quick_action_prompt(&chat, input).unwrap_or(input).to_string();
                send(&mut chat, &mut out, &text, delay)
            }
        };

        if let Err(e) = outcome {
            writeln!(out, "⚠️  {e}")?;
        }
        print_events(&mut chat, &mut out)?;
    }

    chat.stop_speaking();
    Ok(())
}

fn send(
    chat: &mut Controller,
    out: &mut impl Write,
    text: &str,
    delay: Duration,
) -> Result<(), ChatError> {
    match chat.send(text)? {
        Some(reply) => reveal(chat, out, reply.message_id, delay),
        None => Ok(()),
    }
}

/// Print a bot message character by character, then mark it complete.
fn reveal(
    chat: &mut Controller,
    out: &mut impl Write,
    id: u64,
    delay: Duration,
) -> Result<(), ChatError> {
    let text = chat
        .message(id)
        .map(|m| m.text.clone())
        .ok_or(ChatError::UnknownMessage(id))?;

    let typewriter = Typewriter::new(&text, delay);
    let pause = typewriter.delay();
    let mut shown = 0;
    for frame in typewriter {
        let _ = write!(out, "{}", &frame[shown..]);
        let _ = out.flush();
        shown = frame.len();
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
    let _ = writeln!(out, "\n");
    chat.finish_typing(id)
}

fn print_welcome(chat: &mut Controller, out: &mut impl Write, delay: Duration) -> io::Result<()> {
    if let Some(id) = chat.messages().first().map(|m| m.id) {
        if let Err(e) = reveal(chat, out, id, delay) {
            writeln!(out, "⚠️  {e}")?;
        }
    }
    for (i, action) in chat.quick_actions().iter().enumerate() {
        writeln!(out, "  [{}] {}", i + 1, action.label)?;
    }
    writeln!(out, "{HELP}")
}

fn print_events(chat: &mut Controller, out: &mut impl Write) -> io::Result<()> {
    for event in chat.take_events() {
        writeln!(out, "── {} ──\n{}\n", event.title(), event.body())?;
    }
    Ok(())
}

/// A bare number picks the matching quick action while they are offered.
fn quick_action_prompt(chat: &Controller, input: &str) -> Option<&'static str> {
    let index: usize = input.parse().ok()?;
    chat.quick_actions()
        .get(index.checked_sub(1)?)
        .map(|a| a.prompt)
}

fn last_bot_message(chat: &Controller) -> Option<u64> {
    chat.messages()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Bot)
        .map(|m| m.id)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
