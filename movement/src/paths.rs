use std::collections::VecDeque;

use bevy::prelude::*;

/// An ordered queue of points the tank drives to, first to last.
///
/// The front of the queue is always the current destination. Nothing is deduplicated and the
/// queue has no length limit: every point of a drag gesture becomes a waypoint.
#[derive(Debug, Default, Clone, PartialEq, Reflect)]
pub struct WaypointQueue {
    points: VecDeque<Vec2>,
}

impl WaypointQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a waypoint to the end of the path.
    pub fn enqueue(&mut self, point: Vec2) {
        self.points.push_back(point);
    }

    /// Removes the current destination, returning it. Does nothing on an empty queue.
    pub fn dequeue(&mut self) -> Option<Vec2> {
        self.points.pop_front()
    }

    /// The current destination, if any.
    pub fn peek(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoint at `index`, counted from the current destination.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}

impl Extend<Vec2> for WaypointQueue {
    fn extend<T: IntoIterator<Item = Vec2>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl FromIterator<Vec2> for WaypointQueue {
    fn from_iter<T: IntoIterator<Item = Vec2>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_is_empty() {
        let queue = WaypointQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn enqueue_then_dequeue_is_fifo() {
        let mut queue = WaypointQueue::new();
        queue.enqueue(Vec2::new(10.0, 10.0));
        queue.enqueue(Vec2::new(20.0, 20.0));

        assert_eq!(queue.peek(), Some(Vec2::new(10.0, 10.0)));

        assert_eq!(queue.dequeue(), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(queue.peek(), Some(Vec2::new(20.0, 20.0)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn dequeue_on_empty_is_none() {
        let mut queue = WaypointQueue::new();

        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = WaypointQueue::new();
        queue.enqueue(Vec2::ONE);
        queue.enqueue(Vec2::ONE);

        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let mut queue: WaypointQueue = [Vec2::X, Vec2::Y, Vec2::ONE].into_iter().collect();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn indexed_access_follows_insertion_order() {
        let queue: WaypointQueue = [Vec2::X, Vec2::Y, Vec2::ONE].into_iter().collect();

        assert_eq!(queue.get(0), Some(Vec2::X));
        assert_eq!(queue.get(2), Some(Vec2::ONE));
        assert_eq!(queue.get(3), None);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![Vec2::X, Vec2::Y, Vec2::ONE]);
    }
}
