use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Output of one console command: the content ViewModel, an optional
/// headline badge and the follow-up commands printed as tips.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    /// Tip that runs a `dodona` command.
    pub fn suggest(self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.with_suggestion(Guidance::new(description).with_command(command))
    }

    /// Adds the tip only when there is one to give.
    pub fn maybe_suggest(self, guide: Option<Guidance>) -> Self {
        match guide {
            Some(guide) => self.with_suggestion(guide),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_keep_insertion_order() {
        let result = CommandResultViewModel::new(81u32)
            .suggest("Open the interactive dashboard", "dodona dashboard")
            .maybe_suggest(None)
            .maybe_suggest(Some(Guidance::new("Read the profile")));

        let commands: Vec<Option<&str>> = result
            .suggestions
            .iter()
            .map(|g| g.command.as_deref())
            .collect();
        assert_eq!(commands, vec![Some("dodona dashboard"), None]);
    }

    #[test]
    fn test_empty_parts_are_left_out_of_json() {
        let json = serde_json::to_value(CommandResultViewModel::new(75u32)).unwrap();
        assert_eq!(json, serde_json::json!({ "content": 75 }));
    }
}
