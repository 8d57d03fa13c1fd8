// Data models for the chat corpus.
//
// The serde layout follows the case fixture file: conversations live under
// a "messages" key and each carries a "profile" with the contact's image.

use serde::{Deserialize, Serialize};

/// Every conversation of one suspect, analyzed as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub current_user: CurrentUser,
    #[serde(rename = "messages", default)]
    pub conversations: Vec<Conversation>,
}

/// The account whose chats are under investigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// One contact and the ordered raw messages exchanged with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub username: String,
    #[serde(default)]
    pub profile: Profile,
    /// Raw lines such as `"Alex: got the weed ready, 10:01am"`
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub image: String,
}

impl Corpus {
    /// Find a conversation by contact name, ignoring case.
    pub fn conversation(&self, username: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.username.eq_ignore_ascii_case(username))
    }

    /// Total number of raw messages across all conversations.
    pub fn message_count(&self) -> usize {
        self.conversations.iter().map(|c| c.messages.len()).sum()
    }
}

impl Conversation {
    pub fn new(username: &str, messages: Vec<String>) -> Self {
        Self {
            username: username.to_string(),
            profile: Profile {
                username: username.to_string(),
                image: String::new(),
            },
            messages,
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}
