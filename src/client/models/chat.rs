use std::collections::HashMap;
use chrono::{DateTime, Local};

/// Sender shown when nobody is signed in.
pub const ANONYMOUS_SENDER: &str = "You";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub is_current_user: bool,
}

impl ChatMessage {
    pub fn outgoing(sender: &str, content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: sender.to_string(),
            content,
            timestamp: Local::now(),
            is_current_user: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_online: bool,
    pub last_message: Option<String>,
    pub last_message_time: Option<DateTime<Local>>,
}

impl Friend {
    /// Case-insensitive substring match against name or email.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Audio,
    Video,
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CallKind::Audio => "audio",
            CallKind::Video => "video",
        };
        write!(f, "{}", s)
    }
}

// Lista contatti con ricerca e selezione
#[derive(Debug, Clone, Default)]
pub struct FriendsState {
    friends: Vec<Friend>,
    pub search_query: String,
    pub selected_id: Option<String>,
}

impl FriendsState {
    pub fn new(friends: Vec<Friend>) -> Self {
        let selected_id = friends.first().map(|f| f.id.clone());
        Self {
            friends,
            search_query: String::new(),
            selected_id,
        }
    }

    /// Friends matching the current search query, in fixture order.
    pub fn filtered(&self) -> Vec<&Friend> {
        self.friends.iter().filter(|f| f.matches(&self.search_query)).collect()
    }

    pub fn selected(&self) -> Option<&Friend> {
        let id = self.selected_id.as_deref()?;
        self.friends.iter().find(|f| f.id == id)
    }

    /// Returns false for ids that are not in the list.
    pub fn select(&mut self, id: &str) -> bool {
        if self.friends.iter().any(|f| f.id == id) {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub friends: FriendsState,
    pub conversations: HashMap<String, Vec<ChatMessage>>,
    pub message_input: String,
    pub call: Option<CallKind>,
    pub muted: bool,
}

impl ChatState {
    /// `seed` becomes the conversation with the first friend in the list.
    pub fn new(friends: Vec<Friend>, seed: Vec<ChatMessage>) -> Self {
        let mut conversations = HashMap::new();
        if let Some(first) = friends.first() {
            conversations.insert(first.id.clone(), seed);
        }
        Self {
            friends: FriendsState::new(friends),
            conversations,
            message_input: String::new(),
            call: None,
            muted: false,
        }
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.friends.selected()
    }

    pub fn is_call_active(&self) -> bool {
        self.call.is_some()
    }

    /// Messages of the open conversation, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        self.friends
            .selected_id
            .as_ref()
            .and_then(|id| self.conversations.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends the pending input as an outgoing message and clears the input.
    /// Blank input, an active call or no open conversation append nothing.
    pub fn send_message(&mut self, sender: &str) -> Option<&ChatMessage> {
        if self.is_call_active() || self.message_input.trim().is_empty() {
            return None;
        }
        let friend_id = self.friends.selected_id.clone()?;
        let content = std::mem::take(&mut self.message_input);
        let log = self.conversations.entry(friend_id).or_default();
        log.push(ChatMessage::outgoing(sender, content));
        log.last()
    }

    /// Opens another conversation. A running call belongs to the previous one and is ended.
    pub fn select_friend(&mut self, id: &str) -> bool {
        let changed = self.friends.selected_id.as_deref() != Some(id);
        if !self.friends.select(id) {
            return false;
        }
        if changed {
            self.end_call();
        }
        true
    }

    pub fn start_call(&mut self, kind: CallKind) -> bool {
        if self.is_call_active() || self.selected_friend().is_none() {
            return false;
        }
        self.call = Some(kind);
        true
    }

    pub fn toggle_mute(&mut self) {
        if self.is_call_active() {
            self.muted = !self.muted;
        }
    }

    pub fn end_call(&mut self) {
        self.call = None;
        self.muted = false;
    }
}
