//! What the roster view currently shows, and which fetch is allowed to
//! change it.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::model::Catalog;
use crate::view::{self, SelectOption};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(Rc<Catalog>),
    Failed,
}

/// The list area and the `#activity` options. A failed fetch replaces only
/// the list; the options stay at the last successful catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    pub list: ListState,
    pub options: Vec<SelectOption>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            options: view::select_options(&Catalog::default()),
        }
    }
}

pub enum RosterAction {
    Loaded(Catalog),
    Failed,
}

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: RosterAction) -> Rc<Self> {
        match action {
            RosterAction::Loaded(catalog) => Rc::new(Self {
                options: view::select_options(&catalog),
                list: ListState::Ready(Rc::new(catalog)),
            }),
            RosterAction::Failed => Rc::new(Self {
                list: ListState::Failed,
                options: self.options.clone(),
            }),
        }
    }
}

/// Tickets handed to list fetches. Only the most recently issued ticket is
/// current; responses carrying an older one are dropped.
#[derive(Debug, Default)]
pub struct FetchGeneration(u64);

impl FetchGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, ActivityDetails};

    fn catalog(names: &[&str]) -> Catalog {
        names
            .iter()
            .map(|name| Activity {
                name: (*name).to_string(),
                details: ActivityDetails {
                    description: String::new(),
                    schedule: "Mon".into(),
                    max_participants: 5,
                    participants: vec![],
                },
            })
            .collect()
    }

    fn option_values(state: &RosterState) -> Vec<&str> {
        state.options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn starts_loading_with_only_the_placeholder() {
        let state = RosterState::default();
        assert_eq!(state.list, ListState::Loading);
        assert_eq!(option_values(&state), [""]);
    }

    #[test]
    fn load_replaces_list_and_options() {
        let state = Rc::new(RosterState::default())
            .reduce(RosterAction::Loaded(catalog(&["Chess Club", "Drama"])));
        assert!(matches!(&state.list, ListState::Ready(c) if c.activities().len() == 2));
        assert_eq!(option_values(&state), ["", "Chess Club", "Drama"]);
    }

    #[test]
    fn failed_refetch_keeps_previous_options() {
        let state = Rc::new(RosterState::default())
            .reduce(RosterAction::Loaded(catalog(&["Chess Club", "Drama"])))
            .reduce(RosterAction::Failed);
        assert_eq!(state.list, ListState::Failed);
        assert_eq!(option_values(&state), ["", "Chess Club", "Drama"]);
    }

    #[test]
    fn success_after_failure_recovers() {
        let state = Rc::new(RosterState::default())
            .reduce(RosterAction::Failed)
            .reduce(RosterAction::Loaded(catalog(&["Soccer"])));
        assert!(matches!(state.list, ListState::Ready(_)));
        assert_eq!(option_values(&state), ["", "Soccer"]);
    }

    #[test]
    fn out_of_order_completion_is_dropped() {
        let mut generation = FetchGeneration::default();
        let slow = generation.begin();
        let fast = generation.begin();

        // The newer fetch resolves first and is applied.
        assert!(generation.is_current(fast));
        // The older one resolving later must not overwrite it.
        assert!(!generation.is_current(slow));
    }

    #[test]
    fn single_fetch_is_current() {
        let mut generation = FetchGeneration::default();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }
}
