//! Ticket tracking - the timeline and message thread of one ticket.

use sd_core::{Ticket, TicketStatus};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Stage of a ticket's lifecycle shown on the tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStage {
    Created,
    Assigned,
    InProgress,
    Completed,
}

impl TimelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TimelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the tracking timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub stage: TimelineStage,
    pub at: DateTime<Utc>,
    pub description: String,
    /// False for stages not reached yet; their `at` is an estimate
    pub completed: bool,
}

/// Who authored a thread message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Employee,
    User,
    System,
}

/// One message in the requester/technician thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub avatar: String,
}

/// Live view of one ticket's progress.
pub struct TicketTrack {
    ticket_id: String,
    timeline: Vec<TimelineStep>,
    thread: Vec<ChatMessage>,
    next_message_id: u32,
}

impl TicketTrack {
    /// Derive the timeline from a ticket's current state.
    ///
    /// Stage times follow the demo cadence: assignment a quarter hour after
    /// creation, work under way at forty-five minutes, resolution estimated
    /// at two and a half hours.
    pub fn for_ticket(ticket: &Ticket) -> Self {
        let assigned_at = ticket.created_at + Duration::minutes(15);
        let started_at = ticket.created_at + Duration::minutes(45);
        let resolved_at = ticket.created_at + Duration::minutes(150);

        let started = matches!(
            ticket.status,
            TicketStatus::InProgress | TicketStatus::Resolved
        );
        let resolved = ticket.status == TicketStatus::Resolved;

        let assigned_description = match &ticket.assignee {
            Some(name) => format!("Assigned to {name}"),
            None => "Waiting for assignment".to_string(),
        };

        let timeline = vec![
            TimelineStep {
                stage: TimelineStage::Created,
                at: ticket.created_at,
                description: "Ticket created and submitted".to_string(),
                completed: true,
            },
            TimelineStep {
                stage: TimelineStage::Assigned,
                at: assigned_at,
                description: assigned_description,
                completed: ticket.assignee.is_some(),
            },
            TimelineStep {
                stage: TimelineStage::InProgress,
                at: started_at,
                description: "Technician en route to location".to_string(),
                completed: started,
            },
            TimelineStep {
                stage: TimelineStage::Completed,
                at: resolved_at,
                description: "Issue resolution and ticket closure".to_string(),
                completed: resolved,
            },
        ];

        let mut track = Self {
            ticket_id: ticket.id.clone(),
            timeline,
            thread: Vec::new(),
            next_message_id: 1,
        };

        if started {
            track.seed_thread(ticket, started_at);
        }

        track
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn timeline(&self) -> &[TimelineStep] {
        &self.timeline
    }

    pub fn thread(&self) -> &[ChatMessage] {
        &self.thread
    }

    /// Post a requester message. The technician's canned acknowledgment
    /// follows immediately, standing in for a live reply.
    pub fn post(&mut self, text: impl Into<String>) {
        self.push_message(Sender::User, text.into(), "👤", Utc::now());
        self.push_message(
            Sender::Employee,
            "Got it! I'll keep you updated on the progress.".to_string(),
            "👨‍💼",
            Utc::now(),
        );
    }

    fn seed_thread(&mut self, ticket: &Ticket, started_at: DateTime<Utc>) {
        let technician = ticket.assignee.clone().unwrap_or_else(|| "Technician".to_string());

        self.push_message(
            Sender::Employee,
            "On my way to your location. ETA 10 minutes.".to_string(),
            "👨‍💼",
            started_at,
        );
        self.push_message(
            Sender::User,
            "Thank you! I will be waiting in the office.".to_string(),
            "👤",
            started_at + Duration::minutes(1),
        );
        self.push_message(
            Sender::Employee,
            "Arrived at location. Starting diagnosis.".to_string(),
            "👨‍💼",
            started_at + Duration::minutes(10),
        );
        self.push_message(
            Sender::System,
            format!("{technician} has checked in at your location."),
            "🤖",
            started_at + Duration::minutes(10),
        );
    }

    fn push_message(&mut self, sender: Sender, text: String, avatar: &str, at: DateTime<Utc>) {
        self.thread.push(ChatMessage {
            id: self.next_message_id,
            sender,
            text,
            sent_at: at,
            avatar: avatar.to_string(),
        });
        self.next_message_id += 1;
    }
}
