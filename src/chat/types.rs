use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Monotonic, derived from wall-clock milliseconds.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Local time of creation, for display.
    pub timestamp: String,
    /// True until the reveal animation of a bot message completes.
    pub is_typing: bool,
}

impl Message {
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// How a bot reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Canned reply from the keyword fallback generator.
    Fallback,
    Model,
    /// Rule-based responder after the model was unavailable or failed.
    RuleAdvice,
    FileAnalysis,
    Error,
}

/// One-time notices raised by the controller for the front end to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatEvent {
    /// Suggest signing in; raised after the 2nd question of a visitor.
    LoginPrompt,
    /// Promotional popup; raised when the first answer finishes revealing.
    Popup,
}

impl ChatEvent {
    pub fn title(self) -> &'static str {
        match self {
            Self::LoginPrompt => "Thanks for trying Medikami",
            Self::Popup => "Thanks for using Medikami",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Self::LoginPrompt => {
                "Log in or Sign up to get smarter responses, upload files and images, and more."
            }
            Self::Popup => {
                "Log in or sign up to get smarter responses, upload files and images, and more."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub static QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "I have fever",
        prompt: "I have fever, what should I do?",
    },
    QuickAction {
        label: "I have a cold",
        prompt: "I have a cold, what should I do?",
    },
    QuickAction {
        label: "I have headache",
        prompt: "I have a headache, what should I do?",
    },
    QuickAction {
        label: "Stomach problems",
        prompt: "I have stomach problems, what should I do?",
    },
];

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Medikami health assistant. I can help you with any health questions, provide treatment advice, medication recommendations, dietary guidance, and more. Just describe your symptoms or ask your health question!";

pub const FILE_ANALYSIS_ERROR: &str = "I'm sorry, I couldn't analyze your file properly. Please try uploading a different file or ask me a specific question about your health.";
