use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use tracing::trace;

/// One step of a graph traversal: the vertex reached, the vertex it was reached from and the
/// edge label used to get there.
///
/// In a degrees-of-separation search the state is an actor id and the action a movie id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, A> {
    state: S,
    parent: Option<S>,
    action: Option<A>,
}

impl<S, A> Node<S, A> {
    pub fn new(state: S, parent: Option<S>, action: Option<A>) -> Self {
        Self {
            state,
            parent,
            action,
        }
    }

    /// A node for the start vertex of a search, without parent or action.
    pub fn root(state: S) -> Self {
        Self::new(state, None, None)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&S> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}

/// Which node [`Frontier::remove`] takes out.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RemovalPolicy {
    /// Stack: the most recently added node. Gives a depth-first search.
    Lifo,
    /// Queue: the least recently added node. Gives a breadth-first search.
    Fifo,
}

/// The nodes of a graph search that are waiting to be expanded.
///
/// The removal policy is chosen once at construction; adding, membership tests and the
/// emptiness check behave the same under both policies.
#[derive(Debug, Clone)]
pub struct Frontier<S, A> {
    nodes: VecDeque<Node<S, A>>,
    policy: RemovalPolicy,
}

impl<S, A> Frontier<S, A> {
    pub fn new(policy: RemovalPolicy) -> Self {
        Self {
            nodes: VecDeque::new(),
            policy,
        }
    }

    /// A last-in, first-out frontier.
    pub fn stack() -> Self {
        Self::new(RemovalPolicy::Lifo)
    }

    /// A first-in, first-out frontier.
    pub fn queue() -> Self {
        Self::new(RemovalPolicy::Fifo)
    }

    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Appends `node`. Duplicates are not checked.
    pub fn add(&mut self, node: Node<S, A>) {
        self.nodes.push_back(node);
        trace!(len = self.nodes.len(), "node added to frontier");
    }

    /// Returns `true` if some node in the frontier holds `state`.
    pub fn contains_state(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.nodes.iter().any(|node| node.state == *state)
    }

    pub fn empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes a node according to the frontier's policy.
    ///
    /// Fails with [`Error::EmptyFrontier`] if there is nothing left to remove.
    pub fn remove(&mut self) -> Result<Node<S, A>> {
        let node = match self.policy {
            RemovalPolicy::Lifo => self.nodes.pop_back(),
            RemovalPolicy::Fifo => self.nodes.pop_front(),
        }
        .ok_or(Error::EmptyFrontier)?;
        trace!(policy = ?self.policy, len = self.nodes.len(), "node removed from frontier");
        Ok(node)
    }

    /// Iterates over the nodes in insertion order.
    pub fn iter(&self) -> Iter<'_, Node<S, A>> {
        self.nodes.iter()
    }
}
