use fxhash::FxHashMap;
use ricochet_board::{Direction, Robot, RobotPositions};
use std::collections::hash_map::Entry;

use crate::Path;

/// The possible outcomes when trying to add a node to [`VisitedNodes`](VisitedNodes).
pub(crate) enum AddNodeOutcome {
    /// The added node was previously unknown and has been added.
    New,
    /// The node has been seen before but is worse than the newly added one.
    WorseKnown,
    /// The node has been seen before and can be reached with fewer moves. The new node has been
    /// discarded.
    BetterKnown,
}

impl AddNodeOutcome {
    /// Returns `true` if the node has been added to `VisitedNodes`.
    pub fn was_added(&self) -> bool {
        match self {
            AddNodeOutcome::New => true,
            AddNodeOutcome::WorseKnown => true,
            AddNodeOutcome::BetterKnown => false,
        }
    }

    /// Returns `true` if the node has been discarded.
    pub fn was_discarded(&self) -> bool {
        !self.was_added()
    }
}

/// Stores `RobotPositions` and information regarding the positions like nodes in a tree.
///
/// This just wraps a map from `RobotPositions` to a `VisitedNode` and provides convenience methods
/// like [`add_node`](VisitedNodes::add_node) or [`path_to`](VisitedNodes::path_to).
#[derive(Debug, Clone)]
pub(crate) struct VisitedNodes<N: VisitedNode> {
    nodes: FxHashMap<RobotPositions, N>,
}

impl<N: VisitedNode> VisitedNodes<N> {
    /// Creates a new `VisitedNodes` with the given `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Removes all stored nodes.
    pub fn clear(&mut self) {
        self.nodes.clear()
    }

    /// Returns the visit information of a node if it has been visited before.
    pub fn get(&self, positions: &RobotPositions) -> Option<&N> {
        self.nodes.get(positions)
    }

    /// Adds a node at `positions`.
    ///
    /// If there's already a node at `positions` that can be reached with fewer `moves`, no new node
    /// is created and the function returns.
    /// But if no node already exists or if the new node can be reached in fewer `moves`, the new
    /// node is added using `create_nodes`.
    pub fn add_node<F>(
        &mut self,
        positions: RobotPositions,
        from: &RobotPositions,
        moves: usize,
        moved: (Robot, Direction),
        create_node: &F,
    ) -> AddNodeOutcome
    where
        F: Fn(usize, RobotPositions, (Robot, Direction)) -> N,
    {
        match self.nodes.entry(positions) {
            Entry::Occupied(occupied) if occupied.get().moves_to_reach() <= moves => {
                // Ignore `positions` if `occupied` has less or equal moves.
                AddNodeOutcome::BetterKnown
            }
            Entry::Occupied(mut occupied) => {
                // A shorter path has been found, insert the new node.
                let visited = create_node(moves, from.clone(), moved);
                occupied.insert(visited);
                AddNodeOutcome::WorseKnown
            }
            Entry::Vacant(vacant) => {
                let visited = create_node(moves, from.clone(), moved);
                vacant.insert(visited);
                AddNodeOutcome::New
            }
        }
    }

    /// Returns the shortest known path to `positions`.
    ///
    /// # Panics
    /// Panics if `positions` has yet to be visited.
    pub fn path_to(&self, positions: &RobotPositions) -> Path {
        let mut path = Vec::with_capacity(32);
        let mut current_pos = positions.clone();

        // Create the path by following the nodes previous positions.
        loop {
            let current_node = self
                .get(&current_pos)
                .expect("Failed to find a supposed source position");
            path.push(current_node.reached_with());
            current_pos = current_node.previous_position().clone();
            if current_node.moves_to_reach() == 1 {
                // current_pos is now the start of the path
                break;
            }
        }

        path.reverse();
        Path::new(current_pos, positions.clone(), path)
    }
}

/// Defines the functionality and information a visited node has to provide.
///
/// This makes it possible to have differently optimized implementations depending on the algorithm.
pub(crate) trait VisitedNode {
    /// Returns the number of moves needed to reach this node.
    fn moves_to_reach(&self) -> usize;

    /// Returns the `RobotPositions` this node was reached from.
    fn previous_position(&self) -> &RobotPositions;

    /// Returns the robot and the direction it has to be moved in to reach `self` from the previous
    /// position.
    fn reached_with(&self) -> (Robot, Direction);
}

/// A node containing the most basic information needed to work with [`VisitedNodes`](VisitedNodes).
#[derive(Debug, Clone)]
pub(crate) struct BasicVisitedNode {
    /// The number of moves needed to reach this node.
    moves_to_reach: usize,
    /// From where can this node be reached.
    previous_position: RobotPositions,
    /// The robot that was moved to arrive from the previous positions.
    robot: Robot,
    /// The direction the robot was moved in.
    direction: Direction,
}

impl BasicVisitedNode {
    /// Creates a new node.
    pub fn new(
        moves: usize,
        previous_position: RobotPositions,
        movement: (Robot, Direction),
    ) -> Self {
        BasicVisitedNode {
            moves_to_reach: moves,
            previous_position,
            robot: movement.0,
            direction: movement.1,
        }
    }
}

impl VisitedNode for BasicVisitedNode {
    fn moves_to_reach(&self) -> usize {
        self.moves_to_reach
    }

    fn previous_position(&self) -> &RobotPositions {
        &self.previous_position
    }

    fn reached_with(&self) -> (Robot, Direction) {
        (self.robot, self.direction)
    }
}

