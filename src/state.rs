use crate::models::Snapshot;

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRow {
    Participant(String),
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub current: usize,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub activity: String,
    pub description: String,
    pub schedule: String,
    pub capacity: Capacity,
    pub rows: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| match row {
            ParticipantRow::Participant(email) => Some(email.as_str()),
            ParticipantRow::Placeholder => None,
        })
    }

    pub fn shows_placeholder(&self) -> bool {
        self.rows.contains(&ParticipantRow::Placeholder)
    }

    /// Drops the first row for `email`. Returns false when no such row is rendered.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let Some(index) = self
            .rows
            .iter()
            .position(|row| matches!(row, ParticipantRow::Participant(p) if p == email))
        else {
            return false;
        };

        self.rows.remove(index);
        if !self
            .rows
            .iter()
            .any(|row| matches!(row, ParticipantRow::Participant(_)))
        {
            self.rows = vec![ParticipantRow::Placeholder];
        }
        self.capacity.current = self.capacity.current.saturating_sub(1);
        true
    }
}

/// Everything currently rendered: cards, select options and the message slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    cards: Vec<ActivityCard>,
    options: Vec<String>,
    message: Option<Message>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every card and select option with the contents of `snapshot`.
    /// The message slot is left alone.
    pub fn replace_with(&mut self, snapshot: &Snapshot) {
        self.cards = snapshot
            .iter()
            .map(|(name, activity)| {
                let rows = if activity.participants.is_empty() {
                    vec![ParticipantRow::Placeholder]
                } else {
                    activity
                        .participants
                        .iter()
                        .cloned()
                        .map(ParticipantRow::Participant)
                        .collect()
                };
                ActivityCard {
                    activity: name.to_string(),
                    description: activity.description.clone(),
                    schedule: activity.schedule.clone(),
                    capacity: Capacity {
                        current: activity.participants.len(),
                        max: activity.max_participants,
                    },
                    rows,
                }
            })
            .collect();
        self.options = snapshot.iter().map(|(name, _)| name.to_string()).collect();
    }

    pub fn cards(&self) -> &[ActivityCard] {
        &self.cards
    }

    pub fn card(&self, activity: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|card| card.activity == activity)
    }

    pub fn card_mut(&mut self, activity: &str) -> Option<&mut ActivityCard> {
        self.cards.iter_mut().find(|card| card.activity == activity)
    }

    /// Selectable activity names, without the leading placeholder option.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some(Message {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
