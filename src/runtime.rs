use crate::poster::Poster;

/// Context handed to the command handlers instead of any global state.
#[derive(Clone)]
pub struct BotRuntime {
    poster: Poster,
    username: String,
}

impl BotRuntime {
    pub fn new(poster: Poster, username: String) -> Self {
        Self { poster, username }
    }

    pub fn poster(&self) -> &Poster {
        &self.poster
    }

    /// Bot username, needed to parse `/command@botname` forms.
    pub fn username(&self) -> &str {
        &self.username
    }
}
