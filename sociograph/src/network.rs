use std::collections::{BTreeMap, BTreeSet, HashMap};

use itertools::Itertools;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::model::{validate, Dataset, User, UserId, ValidationError};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum QueryError {
    #[error("Unknown user id {0}. Queries only accept ids present in the user list.")]
    UnknownUser(UserId),
}

/// The validated, queryable form of a [Dataset]: an undirected friend graph
/// plus an interest index. Immutable once built, so queries can run from any
/// number of callers without locking.
///
/// Friendships are symmetric by construction: the dataset stores each pair
/// once, the graph answers neighbor queries from either endpoint.
#[derive(Debug)]
pub struct Network {
    users: BTreeMap<UserId, User>,
    graph: UnGraph<UserId, ()>,
    node_map: HashMap<UserId, NodeIndex>,
    interests: BTreeMap<UserId, BTreeSet<String>>,
}

impl Network {
    /// Validate `dataset` and derive the friend graph and interest index.
    ///
    /// Runs every validation pass and reports all problems at once rather
    /// than bailing on the first, so a bad dataset file can be fixed in one
    /// round trip.
    pub fn build(dataset: Dataset) -> Result<Self, Vec<ValidationError>> {
        let errs = [
            validate::no_duplicate_user_ids(&dataset),
            validate::no_self_friendships(&dataset),
            validate::friendship_references(&dataset),
            validate::interest_references(&dataset),
        ]
        .into_iter()
        .flatten()
        .collect_vec();

        if !errs.is_empty() {
            return Err(errs);
        }

        let mut graph = UnGraph::default();
        let mut node_map = HashMap::new();
        for user in &dataset.users {
            node_map.insert(user.id, graph.add_node(user.id));
        }

        // update_edge rather than add_edge so a pair listed twice, in either
        // orientation, still produces a single undirected edge.
        for (a, b) in &dataset.friendships {
            graph.update_edge(node_map[a], node_map[b], ());
        }

        let mut interests: BTreeMap<UserId, BTreeSet<String>> = dataset
            .users
            .iter()
            .map(|user| (user.id, BTreeSet::new()))
            .collect();
        for (id, label) in dataset.interests {
            interests.entry(id).or_default().insert(label);
        }

        debug!(
            "built network: {} users, {} friendships, {} interest labels",
            graph.node_count(),
            graph.edge_count(),
            interests.values().map(BTreeSet::len).sum::<usize>(),
        );

        Ok(Self {
            users: dataset.users.into_iter().map(|u| (u.id, u)).collect(),
            graph,
            node_map,
            interests,
        })
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of distinct undirected friendships in the network.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Direct friends of `user_id`.
    pub fn friends(&self, user_id: UserId) -> Result<BTreeSet<UserId>, QueryError> {
        let node = self.node(user_id)?;
        Ok(self.neighbor_ids(node))
    }

    /// Friend sets for every user in the network.
    pub fn friend_index(&self) -> BTreeMap<UserId, BTreeSet<UserId>> {
        self.node_map
            .iter()
            .map(|(id, node)| (*id, self.neighbor_ids(*node)))
            .collect()
    }

    /// Mean friend count per user. Each friendship contributes to the degree
    /// of both endpoints, so this is average *degree*, not average edges per
    /// user; divide [Network::friendship_count] by the user count for the
    /// latter.
    pub fn average_degree(&self) -> f64 {
        if self.users.is_empty() {
            return 0.0;
        }
        2.0 * self.graph.edge_count() as f64 / self.users.len() as f64
    }

    /// For every user in the network, the set of users who are friends with
    /// both that user and `user_id`. The entry for `user_id` itself is its
    /// full friend set.
    pub fn mutual_friends(
        &self,
        user_id: UserId,
    ) -> Result<BTreeMap<UserId, BTreeSet<UserId>>, QueryError> {
        let target = self.friends(user_id)?;
        Ok(self
            .node_map
            .iter()
            .map(|(id, node)| {
                let mutual = self
                    .neighbor_ids(*node)
                    .intersection(&target)
                    .copied()
                    .collect();
                (*id, mutual)
            })
            .collect())
    }

    /// Interest labels of `user_id`.
    pub fn interests(&self, user_id: UserId) -> Result<&BTreeSet<String>, QueryError> {
        self.interests
            .get(&user_id)
            .ok_or(QueryError::UnknownUser(user_id))
    }

    /// For every user in the network, the set of interest labels shared with
    /// `user_id`. The entry for `user_id` itself is its full interest set.
    pub fn common_interests(
        &self,
        user_id: UserId,
    ) -> Result<BTreeMap<UserId, BTreeSet<&str>>, QueryError> {
        let target = self.interests(user_id)?;
        Ok(self
            .interests
            .iter()
            .map(|(id, labels)| {
                let common = labels
                    .intersection(target)
                    .map(String::as_str)
                    .collect();
                (*id, common)
            })
            .collect())
    }

    fn node(&self, user_id: UserId) -> Result<NodeIndex, QueryError> {
        self.node_map
            .get(&user_id)
            .copied()
            .ok_or(QueryError::UnknownUser(user_id))
    }

    fn neighbor_ids(&self, node: NodeIndex) -> BTreeSet<UserId> {
        self.graph.neighbors(node).map(|n| self.graph[n]).collect()
    }
}
