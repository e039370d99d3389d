//! Unit tests for evac-agent.

#[cfg(test)]
mod agent {
    use evac_core::{AgentId, Cell};

    use crate::{Agent, AgentState};

    #[test]
    fn new_agent_is_active_and_unplaced() {
        let a = Agent::new(AgentId(3), 5);
        assert!(a.is_active());
        assert!(!a.has_exited());
        assert_eq!(a.position, None);
        assert_eq!(a.previous_position, None);
        assert_eq!(a.vision, 5);
    }

    #[test]
    fn mark_exited_is_terminal_and_clears_position() {
        let mut a = Agent::new(AgentId(0), 1);
        a.position = Some(Cell::new(0, 2));
        a.mark_exited();
        assert_eq!(a.state, AgentState::Exited);
        assert!(a.has_exited());
        assert_eq!(a.position, None);
        assert_eq!(a.previous_position, Some(Cell::new(0, 2)));
    }
}

#[cfg(test)]
mod population {
    use evac_core::AgentId;

    use crate::Population;

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut p = Population::new();
        assert_eq!(p.spawn(5), AgentId(0));
        assert_eq!(p.spawn(5), AgentId(1));
        assert_eq!(p.spawn(3), AgentId(2));
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(AgentId(2)).unwrap().vision, 3);
    }

    #[test]
    fn iteration_follows_creation_order() {
        let mut p = Population::new();
        for _ in 0..20 {
            p.spawn(1);
        }
        let ids: Vec<AgentId> = p.ids().collect();
        let expected: Vec<AgentId> = (0..20).map(AgentId).collect();
        assert_eq!(ids, expected);
        assert!(p.iter().map(|a| a.id).eq(expected.into_iter()));
    }

    #[test]
    fn remove_is_permanent_and_preserves_order() {
        let mut p = Population::new();
        for _ in 0..4 {
            p.spawn(1);
        }
        let gone = p.remove(AgentId(1)).unwrap();
        assert_eq!(gone.id, AgentId(1));
        assert!(!p.contains(AgentId(1)));
        assert!(p.remove(AgentId(1)).is_none());
        assert_eq!(p.ids().collect::<Vec<_>>(), [AgentId(0), AgentId(2), AgentId(3)]);

        // Ids are never reused.
        assert_eq!(p.spawn(1), AgentId(4));
        assert_eq!(p.spawned(), 5);
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn empty_population() {
        let p = Population::new();
        assert!(p.is_empty());
        assert_eq!(p.ids().count(), 0);
    }
}
