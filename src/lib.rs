pub mod ai; // Generative-model adapter: prompts, Gemini client, post-processing
pub mod analysis; // Uploaded report and prescription analysis
pub mod chat; // Conversation controller and capability ports
pub mod config;
pub mod context;
pub mod knowledge; // Static medical lookup tables
pub mod routing; // Keyword classifier and canned responders

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so stdout
/// carries only the conversation.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing already initialised: {e}");
    }
}
