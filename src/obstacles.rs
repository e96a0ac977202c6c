use std::collections::HashSet;

use log::debug;

use crate::collision::overlaps;
use crate::types::BoundingBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId(u64);

/// Collision footprint of a falling piece of garbage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub area: BoundingBox,
}

impl Obstacle {
    /// A frame one cell wider on every side, used by the debug overlay.
    pub fn bounding_box_frame(&self) -> (i32, i32, String) {
        let rows = self.area.rows.max(0) as usize;
        let columns = self.area.columns.max(0) as usize;
        let edge = format!(" {} ", "-".repeat(columns));
        let side = format!("|{}|", " ".repeat(columns));

        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(edge.clone());
        lines.extend(std::iter::repeat_n(side, rows));
        lines.push(edge);
        (self.area.row - 1, self.area.column - 1, lines.join("\n"))
    }
}

/// Live obstacles in insertion order plus the pending hit markers.
#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    hit_markers: HashSet<ObstacleId>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: BoundingBox) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle { id, area });
        debug!("Registered obstacle {:?} at {:?}", id, area);
        id
    }

    pub fn unregister(&mut self, id: ObstacleId) {
        self.obstacles.retain(|obstacle| obstacle.id != id);
        self.hit_markers.remove(&id);
    }

    /// Move an obstacle's corner, keeping its size.
    pub fn move_to(&mut self, id: ObstacleId, row: i32, column: i32) {
        if let Some(obstacle) = self.obstacles.iter_mut().find(|obstacle| obstacle.id == id) {
            obstacle.area.row = row;
            obstacle.area.column = column;
        }
    }

    /// First obstacle in registration order that overlaps `area`.
    pub fn query_hit(&self, area: &BoundingBox) -> Option<&Obstacle> {
        self.obstacles.iter().find(|obstacle| overlaps(&obstacle.area, area))
    }

    pub fn mark_hit(&mut self, id: ObstacleId) {
        self.hit_markers.insert(id);
    }

    /// Returns true once per hit, clearing the marker.
    pub fn consume_hit_marker(&mut self, id: ObstacleId) -> bool {
        self.hit_markers.remove(&id)
    }

    #[cfg(test)]
    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|obstacle| obstacle.id == id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_hit_inside_and_outside() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(BoundingBox::new(5, 5, 2, 2));

        assert_eq!(registry.query_hit(&BoundingBox::point(5, 5)).map(|o| o.id), Some(id));
        assert_eq!(registry.query_hit(&BoundingBox::point(6, 6)).map(|o| o.id), Some(id));
        assert!(registry.query_hit(&BoundingBox::point(4, 4)).is_none());
        assert!(registry.query_hit(&BoundingBox::point(7, 7)).is_none());
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = ObstacleRegistry::new();
        let first = registry.register(BoundingBox::new(0, 0, 5, 5));
        let _second = registry.register(BoundingBox::new(2, 2, 5, 5));

        let hit = registry.query_hit(&BoundingBox::point(3, 3)).unwrap();
        assert_eq!(hit.id, first);
    }

    #[test]
    fn test_unregister_removes_obstacle_and_marker() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(BoundingBox::new(0, 0, 1, 1));
        registry.mark_hit(id);
        registry.unregister(id);

        assert!(registry.is_empty());
        assert!(!registry.consume_hit_marker(id));
    }

    #[test]
    fn test_hit_marker_is_consumed_once() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(BoundingBox::new(0, 0, 1, 1));
        let other = registry.register(BoundingBox::new(3, 3, 1, 1));

        assert!(!registry.consume_hit_marker(id));
        registry.mark_hit(id);
        assert!(!registry.consume_hit_marker(other));
        assert!(registry.consume_hit_marker(id));
        assert!(!registry.consume_hit_marker(id));
    }

    #[test]
    fn test_ids_are_unique_after_removal() {
        let mut registry = ObstacleRegistry::new();
        let first = registry.register(BoundingBox::new(0, 0, 1, 1));
        registry.unregister(first);
        let second = registry.register(BoundingBox::new(0, 0, 1, 1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_move_to_tracks_position() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(BoundingBox::new(0, 10, 2, 3));
        registry.move_to(id, 7, 10);

        assert_eq!(registry.get(id).unwrap().area, BoundingBox::new(7, 10, 2, 3));
        assert!(registry.query_hit(&BoundingBox::point(0, 10)).is_none());
        assert!(registry.query_hit(&BoundingBox::point(8, 12)).is_some());
    }

    #[test]
    fn test_bounding_box_frame_surrounds_obstacle() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(BoundingBox::new(4, 6, 1, 2));
        let (row, column, frame) = registry.get(id).unwrap().bounding_box_frame();

        assert_eq!((row, column), (3, 5));
        assert_eq!(frame, " -- \n|  |\n -- ");
    }
}
