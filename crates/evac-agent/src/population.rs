//! The ordered container of live agents.
//!
//! Agents are keyed by `AgentId`, which is handed out in creation order, so
//! iterating the map visits agents in creation order.  That order is the
//! activation order of every tick and never changes during a run.

use std::collections::BTreeMap;

use evac_core::AgentId;

use crate::Agent;

/// Live agents, ordered by creation.
#[derive(Clone, Debug, Default)]
pub struct Population {
    live:    BTreeMap<AgentId, Agent>,
    next_id: u32,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unplaced agent with the next free id.
    pub fn spawn(&mut self, vision: u32) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, Agent::new(id, vision));
        id
    }

    /// Remove an agent from the live set, handing it back to the caller.
    ///
    /// Removal is permanent: ids are never reused.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.live.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.live.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.live.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.live.contains_key(&id)
    }

    /// Number of live agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of agents ever spawned, live or not.
    #[inline]
    pub fn spawned(&self) -> usize {
        self.next_id as usize
    }

    /// Live agent ids in activation order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.live.keys().copied()
    }

    /// Live agents in activation order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.live.values()
    }
}
