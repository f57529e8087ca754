//! View-state derived from a [`Catalog`]. Components render these and never
//! look at the wire types directly.

use crate::model::{Activity, Catalog};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const EMPTY_ROSTER: &str = "No participants yet";
pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: RosterView,
}

impl CardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
    Empty,
    Participants(Vec<ParticipantView>),
}

/// One roster row plus the data its removal control carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    pub activity: String,
    pub email: String,
}

impl ParticipantView {
    pub fn aria_label(&self) -> String {
        format!("Remove {}", self.email)
    }

    pub fn confirm_prompt(&self) -> String {
        format!("Remove {} from {}?", self.email, self.activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

fn card(activity: &Activity) -> CardView {
    let participants = &activity.details.participants;
    let roster = if participants.is_empty() {
        RosterView::Empty
    } else {
        RosterView::Participants(
            participants
                .iter()
                .map(|email| ParticipantView {
                    activity: activity.name.clone(),
                    email: email.clone(),
                })
                .collect(),
        )
    };

    CardView {
        name: activity.name.clone(),
        description: activity.details.description.clone(),
        schedule: activity.details.schedule.clone(),
        spots_left: activity.spots_left(),
        roster,
    }
}

pub fn cards(catalog: &Catalog) -> Vec<CardView> {
    catalog.activities().iter().map(card).collect()
}

/// Placeholder first, then one option per activity in catalog order.
pub fn select_options(catalog: &Catalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(catalog.activities().iter().map(|a| SelectOption {
        value: a.name.clone(),
        label: a.name.clone(),
    }))
    .collect()
}
