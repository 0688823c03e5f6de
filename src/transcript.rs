#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    Meta,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub role: Role,
    pub text: String,
}

/// Ordered, append-only sequence of chat entries for the current session.
/// Entries are never edited, reordered, or removed.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        self.entries.push(Entry {
            role,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of rendered lines at the given wrap width, counting the role
    /// label line and the blank separator after each entry. Used to keep the
    /// view pinned to the newest entry.
    pub fn rendered_lines(&self, wrap_width: u16) -> u16 {
        let wrap_width = if wrap_width > 0 { wrap_width as usize } else { 50 };

        let mut total: u16 = 0;
        for entry in &self.entries {
            total += 1; // label line ("You:", "AI:", "*")
            for line in entry.text.lines() {
                // Character count, not byte length, for UTF-8 content
                let chars = line.chars().count();
                if chars == 0 {
                    total += 1;
                } else {
                    total += ((chars - 1) / wrap_width + 1) as u16;
                }
            }
            total += 1; // separator
        }
        total
    }
}
