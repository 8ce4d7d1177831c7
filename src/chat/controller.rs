use std::path::Path;

use chrono::{Local, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::capabilities::{
    speakable_text, Clipboard, SpeechRecognizer, SpeechSettings, SpeechSynthesizer, Unavailable,
};
use super::types::{
    ChatEvent, ChatState, Message, QuickAction, ReplySource, Sender, FILE_ANALYSIS_ERROR,
    QUICK_ACTIONS, WELCOME_MESSAGE,
};
use super::{CapabilityError, ChatError};
use crate::ai::{GenerativeModel, HealthAdvisor};
use crate::analysis::{self, read_upload, upload_message, UploadError, UploadedFile};
use crate::context::HealthContext;
use crate::routing::{classify, fallback, rule_advice};

/// Visitors are asked to sign in once they have sent this many messages.
const LOGIN_PROMPT_AFTER: usize = 2;

/// A bot message appended by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub message_id: u64,
    pub source: ReplySource,
}

/// Owner of the single conversation.
///
/// All state changes go through its methods. Replies are computed
/// synchronously; the `AwaitingResponse` state spans `submit` to `respond`.
pub struct ChatController<M: GenerativeModel> {
    advisor: HealthAdvisor<M>,
    messages: Vec<Message>,
    state: ChatState,
    context: HealthContext,
    authenticated: bool,
    login_prompt_shown: bool,
    popup_shown: bool,
    events: Vec<ChatEvent>,
    speaking: Option<u64>,
    speech_settings: SpeechSettings,
    last_id: u64,
    speech: Box<dyn SpeechSynthesizer>,
    recognizer: Box<dyn SpeechRecognizer>,
    clipboard: Box<dyn Clipboard>,
}

impl<M: GenerativeModel> ChatController<M> {
    /// New conversation holding only the welcome message. Capability ports
    /// start unavailable.
    pub fn new(advisor: HealthAdvisor<M>) -> Self {
        let mut controller = Self {
            advisor,
            messages: Vec::new(),
            state: ChatState::Idle,
            context: HealthContext::default(),
            authenticated: false,
            login_prompt_shown: false,
            popup_shown: false,
            events: Vec::new(),
            speaking: None,
            speech_settings: SpeechSettings::default(),
            last_id: 0,
            speech: Box::new(Unavailable),
            recognizer: Box::new(Unavailable),
            clipboard: Box::new(Unavailable),
        };
        controller.push_welcome();
        controller
    }

    pub fn with_speech(mut self, speech: Box<dyn SpeechSynthesizer>) -> Self {
        self.speech = speech;
        self
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn advisor(&self) -> &HealthAdvisor<M> {
        &self.advisor
    }

    pub fn advisor_mut(&mut self) -> &mut HealthAdvisor<M> {
        &mut self.advisor
    }

    pub fn health_context(&self) -> &HealthContext {
        &self.context
    }

    pub fn set_health_context(&mut self, context: HealthContext) {
        self.context = context;
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    /// Id of the message currently being read aloud.
    pub fn speaking(&self) -> Option<u64> {
        self.speaking
    }

    /// Drain the one-time notices raised since the last call.
    pub fn take_events(&mut self) -> Vec<ChatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Suggested prompts, offered only before the first exchange.
    pub fn quick_actions(&self) -> &'static [QuickAction] {
        if self.messages.len() == 1 {
            QUICK_ACTIONS
        } else {
            &[]
        }
    }

    /// Send a user message and append the reply.
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    pub fn send(&mut self, text: &str) -> Result<Option<Reply>, ChatError> {
        if self.submit(text)?.is_none() {
            return Ok(None);
        }
        self.respond().map(Some)
    }

    /// Append the user message and enter `AwaitingResponse`.
    pub fn submit(&mut self, text: &str) -> Result<Option<u64>, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank message");
            return Ok(None);
        }
        self.ensure_idle()?;

        let id = self.push(text.to_string(), Sender::User, false);
        self.state = ChatState::AwaitingResponse;
        self.check_login_prompt();
        Ok(Some(id))
    }

    /// Answer the pending user message and return to `Idle`.
    pub fn respond(&mut self) -> Result<Reply, ChatError> {
        if self.state != ChatState::AwaitingResponse {
            return Err(ChatError::NothingPending);
        }
        let query = self
            .messages
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(|m| m.text.clone())
            .ok_or(ChatError::NothingPending)?;

        let (text, source) = self.reply_for(&query);
        let message_id = self.push(text, Sender::Bot, true);
        self.state = ChatState::Idle;
        Ok(Reply { message_id, source })
    }

    /// Mark a message as fully revealed. Raises the popup the first time an
    /// answer to the user completes.
    pub fn finish_typing(&mut self, id: u64) -> Result<(), ChatError> {
        let index = self.index_of(id)?;
        self.messages[index].is_typing = false;

        let answers_user = index > 0 && self.messages[index - 1].is_user();
        if self.messages[index].is_bot() && answers_user && !self.popup_shown {
            self.popup_shown = true;
            self.events.push(ChatEvent::Popup);
        }
        Ok(())
    }

    /// Replace a completed bot answer with a fresh one for the same question.
    pub fn regenerate(&mut self, id: u64) -> Result<Reply, ChatError> {
        self.ensure_idle()?;
        let index = self.index_of(id)?;
        let message = &self.messages[index];
        if !message.is_bot() || index == 0 || !self.messages[index - 1].is_user() {
            return Err(ChatError::NotRegenerable(id));
        }
        if message.is_typing {
            return Err(ChatError::StillTyping(id));
        }

        let query = self.messages[index - 1].text.clone();
        self.messages.remove(index);
        if self.speaking == Some(id) {
            self.stop_speaking();
        }
        info!(id, "Regenerating answer");

        let (text, source) = self.reply_for(&query);
        let message_id = self.next_id();
        self.messages.insert(
            index,
            Message {
                id: message_id,
                text,
                sender: Sender::Bot,
                timestamp: display_time(),
                is_typing: true,
            },
        );
        Ok(Reply { message_id, source })
    }

    /// Reset to the welcome message. Sign-in and popup notices stay one-time.
    pub fn new_chat(&mut self) {
        self.stop_speaking();
        self.messages.clear();
        self.state = ChatState::Idle;
        self.push_welcome();
        info!("New chat started");
    }

    /// Read a file from disk and analyse it.
    ///
    /// Oversized files are refused with an error and leave the conversation
    /// untouched. Other read failures are answered with an apology message.
    pub fn upload(&mut self, path: &Path) -> Result<Reply, ChatError> {
        self.ensure_idle()?;
        match read_upload(path) {
            Ok((file, content)) => self.upload_content(&file, &content),
            Err(e @ UploadError::TooLarge { .. }) => Err(e.into()),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Upload could not be read");
                let message_id = self.push(FILE_ANALYSIS_ERROR.to_string(), Sender::Bot, true);
                Ok(Reply {
                    message_id,
                    source: ReplySource::Error,
                })
            }
        }
    }

    /// Announce an already-read upload and append its analysis.
    pub fn upload_content(
        &mut self,
        file: &UploadedFile,
        content: &str,
    ) -> Result<Reply, ChatError> {
        self.ensure_idle()?;
        self.push(upload_message(file), Sender::User, false);
        self.state = ChatState::AwaitingResponse;

        let result = analysis::analyze(file, content, &self.advisor);
        if !result.conditions.is_empty() {
            info!(conditions = ?result.conditions, "Health context updated from upload");
            self.context = HealthContext::new(result.conditions);
        }

        let message_id = self.push(result.text, Sender::Bot, true);
        self.state = ChatState::Idle;
        Ok(Reply {
            message_id,
            source: ReplySource::FileAnalysis,
        })
    }

    /// Toggle read-aloud for a message. Returns `true` when speech started,
    /// `false` when this message was already speaking and has been stopped.
    pub fn read_aloud(&mut self, id: u64) -> Result<bool, ChatError> {
        let index = self.index_of(id)?;
        if self.speaking.is_some() && !self.speech.is_speaking() {
            debug!(id = ?self.speaking, "Utterance finished");
            self.speaking = None;
        }
        if self.speaking == Some(id) {
            self.stop_speaking();
            return Ok(false);
        }
        let message = &self.messages[index];
        if message.is_typing {
            return Err(ChatError::StillTyping(id));
        }
        if !self.speech.available() {
            return Err(CapabilityError::Unavailable("Speech synthesis").into());
        }

        let text = speakable_text(&message.text);
        self.stop_speaking();
        self.speech.speak(&text, self.speech_settings)?;
        self.speaking = Some(id);
        debug!(id, "Reading message aloud");
        Ok(true)
    }

    pub fn stop_speaking(&mut self) {
        if self.speaking.take().is_some() {
            self.speech.cancel();
        }
    }

    /// Copy a completed message to the clipboard.
    pub fn copy(&mut self, id: u64) -> Result<(), ChatError> {
        let index = self.index_of(id)?;
        let message = &self.messages[index];
        if message.is_typing {
            return Err(ChatError::StillTyping(id));
        }
        self.clipboard.write_text(&message.text)?;
        debug!(id, "Message copied");
        Ok(())
    }

    /// Capture one phrase of voice input. `Ok(None)` when recognition is not
    /// available or heard nothing.
    pub fn listen(&mut self) -> Result<Option<String>, ChatError> {
        if !self.recognizer.available() {
            debug!("Speech recognition not available");
            return Ok(None);
        }
        Ok(self.recognizer.listen()?)
    }

    /// Bot messages containing `query`, case-insensitively. Blank queries
    /// match nothing.
    pub fn search(&self, query: &str) -> Vec<&Message> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.messages
            .iter()
            .filter(|m| m.is_bot() && m.text.to_lowercase().contains(&query))
            .collect()
    }

    fn reply_for(&self, query: &str) -> (String, ReplySource) {
        let verdict = classify(query);
        let context = self.context.has_conditions().then_some(&self.context);

        if verdict.answer_locally() {
            debug!(verdict = ?verdict, "Answering with fallback");
            return (fallback(query, context), ReplySource::Fallback);
        }

        if self.advisor.is_ready() {
            match self.advisor.get_health_advice(query, context) {
                Ok(text) => return (text, ReplySource::Model),
                Err(e) => warn!(error = %e, "AI advice failed, using rule advice"),
            }
        } else {
            debug!("AI model not configured, using rule advice");
        }
        (rule_advice(query), ReplySource::RuleAdvice)
    }

    fn ensure_idle(&self) -> Result<(), ChatError> {
        if self.state == ChatState::AwaitingResponse {
            warn!("Rejected send while awaiting response");
            return Err(ChatError::Busy);
        }
        Ok(())
    }

    fn check_login_prompt(&mut self) {
        if self.authenticated || self.login_prompt_shown {
            return;
        }
        let sent = self.messages.iter().filter(|m| m.is_user()).count();
        if sent >= LOGIN_PROMPT_AFTER {
            self.login_prompt_shown = true;
            self.events.push(ChatEvent::LoginPrompt);
        }
    }

    fn index_of(&self, id: u64) -> Result<usize, ChatError> {
        self.messages
            .iter()
            .position(|m| m.id == id)
            .ok_or(ChatError::UnknownMessage(id))
    }

    fn push_welcome(&mut self) {
        self.push(WELCOME_MESSAGE.to_string(), Sender::Bot, false);
    }

    fn push(&mut self, text: String, sender: Sender, is_typing: bool) -> u64 {
        let id = self.next_id();
        self.messages.push(Message {
            id,
            text,
            sender,
            timestamp: display_time(),
            is_typing,
        });
        id
    }

    /// Wall-clock milliseconds, bumped when two messages share a tick.
    fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

fn display_time() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::ai::{AiError, MockModel};
    use crate::routing::{EMERGENCY_RESPONSE, UNRELATED_RESPONSE};

    #[derive(Default)]
    struct Log(Rc<RefCell<Vec<String>>>);

    impl Log {
        fn entries(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    struct FakeSpeech(Rc<RefCell<Vec<String>>>);

    impl SpeechSynthesizer for FakeSpeech {
        fn available(&self) -> bool {
            true
        }

        fn speak(&mut self, text: &str, _settings: SpeechSettings) -> Result<(), CapabilityError> {
            self.0.borrow_mut().push(format!("speak:{text}"));
            Ok(())
        }

        fn is_speaking(&mut self) -> bool {
            true
        }

        fn cancel(&mut self) {
            self.0.borrow_mut().push("cancel".into());
        }
    }

    /// Every utterance ends as soon as it starts.
    struct InstantSpeech(Rc<RefCell<Vec<String>>>);

    impl SpeechSynthesizer for InstantSpeech {
        fn available(&self) -> bool {
            true
        }

        fn speak(&mut self, text: &str, _settings: SpeechSettings) -> Result<(), CapabilityError> {
            self.0.borrow_mut().push(format!("speak:{text}"));
            Ok(())
        }

        fn is_speaking(&mut self) -> bool {
            false
        }

        fn cancel(&mut self) {
            self.0.borrow_mut().push("cancel".into());
        }
    }

    struct FakeClipboard(Rc<RefCell<Vec<String>>>);

    impl Clipboard for FakeClipboard {
        fn available(&self) -> bool {
            true
        }

        fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct FakeRecognizer(Option<&'static str>);

    impl SpeechRecognizer for FakeRecognizer {
        fn available(&self) -> bool {
            true
        }

        fn listen(&mut self) -> Result<Option<String>, CapabilityError> {
            Ok(self.0.map(String::from))
        }
    }

    fn offline() -> ChatController<MockModel> {
        ChatController::new(HealthAdvisor::new(MockModel::unconfigured()))
    }

    fn online(reply: &str) -> ChatController<MockModel> {
        ChatController::new(HealthAdvisor::new(MockModel::new(reply)))
    }

    fn text_of(chat: &ChatController<MockModel>, id: u64) -> String {
        chat.message(id).map(|m| m.text.clone()).unwrap_or_default()
    }

    #[test]
    fn starts_with_welcome_and_quick_actions() {
        let chat = offline();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
        assert!(!chat.messages()[0].is_typing);
        assert_eq!(chat.quick_actions().len(), 4);
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn blank_message_is_silently_ignored() {
        let mut chat = offline();
        assert_eq!(chat.send("   \n").unwrap(), None);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn fever_question_offline_gets_otc_guide() {
        let mut chat = offline();
        let reply = chat.send("I have fever, what should I do?").unwrap().unwrap();
        assert_eq!(reply.source, ReplySource::RuleAdvice);

        let text = text_of(&chat, reply.message_id);
        assert!(text.starts_with("**Fever** • OTC Medication Guide"));
        assert!(text.contains("Paracetamol"));
        assert!(chat.message(reply.message_id).unwrap().is_typing);
        assert!(chat.quick_actions().is_empty());
    }

    #[test]
    fn health_question_uses_model_when_ready() {
        let mut chat = online("Rest and drink fluids.");
        let reply = chat.send("I have fever, what should I do?").unwrap().unwrap();
        assert_eq!(reply.source, ReplySource::Model);
        assert!(text_of(&chat, reply.message_id).starts_with("Rest and drink fluids."));
        assert_eq!(chat.advisor().model().call_count(), 1);
    }

    #[test]
    fn model_failure_falls_back_to_rule_advice() {
        let mut chat = ChatController::new(HealthAdvisor::new(MockModel::failing(
            AiError::Connection("refused".into()),
        )));
        let reply = chat.send("I have a headache").unwrap().unwrap();
        assert_eq!(reply.source, ReplySource::RuleAdvice);
        assert!(text_of(&chat, reply.message_id).starts_with("**Headache**"));
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn local_categories_never_reach_model() {
        let mut chat = online("unused");
        let weather = chat.send("What's the weather today?").unwrap().unwrap();
        assert_eq!(text_of(&chat, weather.message_id), UNRELATED_RESPONSE);

        let chest = chat.send("I have chest pain").unwrap().unwrap();
        assert_eq!(chest.source, ReplySource::Fallback);
        assert!(text_of(&chat, chest.message_id).contains(EMERGENCY_RESPONSE));
        assert_eq!(chat.advisor().model().call_count(), 0);
    }

    #[test]
    fn second_send_while_awaiting_is_rejected() {
        let mut chat = offline();
        chat.submit("I have a cold").unwrap();
        assert_eq!(chat.state(), ChatState::AwaitingResponse);
        assert!(matches!(chat.submit("hello"), Err(ChatError::Busy)));
        assert!(matches!(
            chat.upload_content(&UploadedFile::new("a.txt", "text/plain", 1), "x"),
            Err(ChatError::Busy)
        ));

        chat.respond().unwrap();
        assert_eq!(chat.state(), ChatState::Idle);
        assert!(matches!(chat.respond(), Err(ChatError::NothingPending)));
    }

    #[test]
    fn login_prompt_once_after_second_question() {
        let mut chat = offline();
        chat.send("hello").unwrap();
        assert!(chat.take_events().is_empty());
        chat.send("thanks").unwrap();
        assert_eq!(chat.take_events(), vec![ChatEvent::LoginPrompt]);
        chat.send("help").unwrap();
        assert!(chat.take_events().is_empty());
    }

    #[test]
    fn no_login_prompt_when_authenticated() {
        let mut chat = offline();
        chat.set_authenticated(true);
        chat.send("hello").unwrap();
        chat.send("thanks").unwrap();
        assert!(chat.take_events().is_empty());
    }

    #[test]
    fn popup_once_after_first_completed_answer() {
        let mut chat = offline();
        chat.set_authenticated(true);
        let welcome = chat.messages()[0].id;
        chat.finish_typing(welcome).unwrap();
        assert!(chat.take_events().is_empty());

        let first = chat.send("hello").unwrap().unwrap();
        chat.finish_typing(first.message_id).unwrap();
        assert_eq!(chat.take_events(), vec![ChatEvent::Popup]);
        assert!(!chat.message(first.message_id).unwrap().is_typing);

        let second = chat.send("thanks").unwrap().unwrap();
        chat.finish_typing(second.message_id).unwrap();
        assert!(chat.take_events().is_empty());
    }

    #[test]
    fn regenerate_replaces_answer_in_place() {
        let mut chat = offline();
        let first = chat.send("I have a cold").unwrap().unwrap();
        chat.send("thanks").unwrap();
        assert!(matches!(
            chat.regenerate(first.message_id),
            Err(ChatError::StillTyping(_))
        ));

        chat.finish_typing(first.message_id).unwrap();
        let before = chat.messages().len();
        let again = chat.regenerate(first.message_id).unwrap();

        assert_eq!(chat.messages().len(), before);
        assert!(chat.message(first.message_id).is_none());
        assert_eq!(chat.messages()[2].id, again.message_id);
        assert_eq!(chat.messages()[1].text, "I have a cold");
        assert!(text_of(&chat, again.message_id).starts_with("**Cold**"));
    }

    #[test]
    fn regenerate_rejects_user_and_welcome_messages() {
        let mut chat = offline();
        let welcome = chat.messages()[0].id;
        assert!(matches!(
            chat.regenerate(welcome),
            Err(ChatError::NotRegenerable(_))
        ));

        let user_id = chat.submit("hi").unwrap().unwrap();
        chat.respond().unwrap();
        assert!(matches!(
            chat.regenerate(user_id),
            Err(ChatError::NotRegenerable(_))
        ));
        assert!(matches!(
            chat.regenerate(42),
            Err(ChatError::UnknownMessage(42))
        ));
    }

    #[test]
    fn new_chat_resets_to_welcome() {
        let mut chat = offline();
        chat.send("hello").unwrap();
        chat.new_chat();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
        assert_eq!(chat.quick_actions().len(), 4);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut chat = offline();
        for msg in ["hello", "thanks", "help"] {
            chat.send(msg).unwrap();
        }
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn upload_appends_announcement_and_analysis() {
        let mut chat = offline();
        let file = UploadedFile::new("lab_results.txt", "text/plain", 28);
        let reply = chat
            .upload_content(&file, "Cholesterol Total: 250 mg/dL")
            .unwrap();

        assert_eq!(reply.source, ReplySource::FileAnalysis);
        assert_eq!(chat.messages()[1].text, "📎 Uploaded file: lab_results.txt (0.00 MB)");
        assert!(text_of(&chat, reply.message_id).contains("High Cholesterol Management"));
        assert_eq!(chat.health_context().conditions, vec!["high cholesterol"]);

        assert!(chat.advisor_mut().configure("test-key"));
        chat.send("I have a cough, any advice?").unwrap();
        let prompts = chat.advisor().model().prompts();
        assert!(prompts[0].contains("The user has the following health conditions: high cholesterol."));
    }

    #[test]
    fn unreadable_upload_gets_apology() {
        let mut chat = offline();
        let reply = chat.upload(Path::new("/definitely/not/here.txt")).unwrap();
        assert_eq!(reply.source, ReplySource::Error);
        assert_eq!(text_of(&chat, reply.message_id), FILE_ANALYSIS_ERROR);
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn upload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prescription.txt");
        std::fs::write(&path, "Metformin 500mg twice daily").unwrap();

        let mut chat = offline();
        let reply = chat.upload(&path).unwrap();
        assert!(text_of(&chat, reply.message_id).contains("Metformin (Diabetes medication)"));
        assert_eq!(chat.health_context().conditions, vec!["diabetes"]);
    }

    #[test]
    fn read_aloud_toggles_and_cancels_previous() {
        let log = Log::default();
        let mut chat = offline().with_speech(Box::new(FakeSpeech(log.0.clone())));
        let a = chat.send("hello").unwrap().unwrap().message_id;
        let b = chat.send("thanks").unwrap().unwrap().message_id;
        chat.finish_typing(a).unwrap();
        chat.finish_typing(b).unwrap();

        assert!(chat.read_aloud(a).unwrap());
        assert_eq!(chat.speaking(), Some(a));
        assert!(chat.read_aloud(b).unwrap());
        assert_eq!(chat.speaking(), Some(b));
        assert!(!chat.read_aloud(b).unwrap());
        assert_eq!(chat.speaking(), None);

        let entries = log.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries[0].starts_with("speak:"));
        assert_eq!(entries[1], "cancel");
        assert!(entries[2].starts_with("speak:"));
        assert_eq!(entries[3], "cancel");
    }

    #[test]
    fn finished_utterance_can_be_replayed() {
        let log = Log::default();
        let mut chat = offline().with_speech(Box::new(InstantSpeech(log.0.clone())));
        let welcome = chat.messages()[0].id;

        assert!(chat.read_aloud(welcome).unwrap());
        assert!(chat.read_aloud(welcome).unwrap());
        assert_eq!(chat.speaking(), Some(welcome));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.starts_with("speak:Hello")));
    }

    #[test]
    fn read_aloud_requires_speech_port_and_completed_message() {
        let mut chat = offline();
        let id = chat.send("hello").unwrap().unwrap().message_id;
        assert!(matches!(chat.read_aloud(id), Err(ChatError::StillTyping(_))));
        chat.finish_typing(id).unwrap();
        assert!(matches!(
            chat.read_aloud(id),
            Err(ChatError::Capability(CapabilityError::Unavailable(_)))
        ));
    }

    #[test]
    fn copy_writes_message_text() {
        let log = Log::default();
        let mut chat = offline().with_clipboard(Box::new(FakeClipboard(log.0.clone())));
        let id = chat.messages()[0].id;
        chat.copy(id).unwrap();
        assert_eq!(log.entries(), vec![WELCOME_MESSAGE.to_string()]);
    }

    #[test]
    fn listen_without_recognizer_is_not_an_error() {
        let mut chat = offline();
        assert_eq!(chat.listen().unwrap(), None);

        let mut chat = offline().with_recognizer(Box::new(FakeRecognizer(Some("I have a cold"))));
        assert_eq!(chat.listen().unwrap().as_deref(), Some("I have a cold"));
    }

    #[test]
    fn search_matches_bot_messages_only() {
        let mut chat = offline();
        chat.send("I have fever, what should I do?").unwrap();
        assert!(chat.search("   ").is_empty());

        let hits = chat.search("PARACETAMOL");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_bot());
        assert!(chat.search("what should i do").is_empty());
    }
}
