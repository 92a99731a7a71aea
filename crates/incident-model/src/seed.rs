//! Built-in sample incidents
//!
//! Used to populate a store whose durable slot is empty or unreadable.

use crate::incident::{Incident, IncidentId};
use crate::severity::Severity;
use chrono::{TimeZone, Utc};

struct SeedRow {
    id: u64,
    title: &'static str,
    description: &'static str,
    severity: Severity,
    // (year, month, day, hour, minute)
    reported: (i32, u32, u32, u32, u32),
}

const SEED_ROWS: [SeedRow; 7] = [
    SeedRow {
        id: 1,
        title: "Biased Recommendation Algorithm",
        description: "Algorithm consistently favored certain demographics in job recommendations, \
                      leading to potential discrimination issues. The bias was detected during a \
                      routine audit of recommendation patterns across different user groups.",
        severity: Severity::Medium,
        reported: (2025, 3, 15, 10, 0),
    },
    SeedRow {
        id: 2,
        title: "LLM Hallucination in Critical Info",
        description: "LLM provided incorrect safety procedure information when asked about \
                      emergency protocols in a chemical plant. This could have led to dangerous \
                      situations if the information had been followed in a real emergency scenario.",
        severity: Severity::High,
        reported: (2025, 4, 1, 14, 30),
    },
    SeedRow {
        id: 3,
        title: "Minor Data Leak via Chatbot",
        description: "Chatbot inadvertently exposed non-sensitive user metadata in its responses. \
                      The leak was limited to session information and did not include personal \
                      identifiable information or credentials.",
        severity: Severity::Low,
        reported: (2025, 3, 20, 9, 15),
    },
    SeedRow {
        id: 4,
        title: "Autonomous Vehicle Decision Error",
        description: "AI system in autonomous vehicle made an incorrect priority decision at an \
                      intersection, nearly causing a collision. The system prioritized efficiency \
                      over safety in an edge case scenario not covered in training data.",
        severity: Severity::High,
        reported: (2025, 4, 5, 11, 45),
    },
    SeedRow {
        id: 5,
        title: "Content Moderation False Positive",
        description: "AI content moderation system incorrectly flagged educational medical \
                      content as inappropriate, causing temporary removal of important health \
                      information from a public health platform.",
        severity: Severity::Medium,
        reported: (2025, 3, 25, 16, 20),
    },
    SeedRow {
        id: 6,
        title: "Facial Recognition Misidentification",
        description: "Facial recognition system misidentified an individual in a non-critical \
                      security application. The error was caught by human oversight before any \
                      consequences occurred.",
        severity: Severity::Low,
        reported: (2025, 4, 10, 8, 30),
    },
    SeedRow {
        id: 7,
        title: "AI Assistant Unauthorized Action",
        description: "AI assistant executed an action without explicit user confirmation, \
                      ordering items based on a conversational context that was misinterpreted \
                      as a direct command.",
        severity: Severity::Medium,
        reported: (2025, 4, 8, 13, 10),
    },
];

/// The fixed sample set, in id order
#[must_use]
pub fn seed_incidents() -> Vec<Incident> {
    SEED_ROWS
        .iter()
        .filter_map(|row| {
            let (y, m, d, h, min) = row.reported;
            Utc.with_ymd_and_hms(y, m, d, h, min, 0)
                .single()
                .map(|reported_at| Incident {
                    id: IncidentId(row.id),
                    title: row.title.to_string(),
                    description: row.description.to_string(),
                    severity: row.severity,
                    reported_at,
                })
        })
        .collect()
}
