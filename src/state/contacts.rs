use crate::model::{ContactId, Point};

/// Live contacts in insertion order.
///
/// Geometry is always taken from the first two entries. The order is the order
/// in which contacts began: updating a contact keeps its slot, while removing
/// and re-adding it moves it to the back. There is no cap on how many contacts
/// are stored; a third contact is tracked and only joins the active pair once
/// one of the first two is removed.
#[derive(Default, Debug, Clone)]
pub struct ContactRegistry {
    entries: Vec<(ContactId, Point)>,
}

impl ContactRegistry {
    /// Inserts a new contact at the back, or moves an existing one in place.
    pub fn upsert(&mut self, id: ContactId, position: Point) {
        match self.slot_mut(id) {
            Some(slot) => *slot = position,
            None => self.entries.push((id, position)),
        }
    }

    /// Returns false (and does nothing) for an id that is not tracked.
    pub fn update(&mut self, id: ContactId, position: Point) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    /// Returns false (and does nothing) for an id that is not tracked.
    pub fn remove(&mut self, id: ContactId) -> bool {
        match self.entries.iter().position(|(cid, _)| *cid == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The (at most two) contacts that participate in geometry.
    pub fn active_points(&self) -> Vec<Point> {
        self.entries.iter().take(2).map(|(_, p)| *p).collect()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn slot_mut(&mut self, id: ContactId) -> Option<&mut Point> {
        self.entries
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, p)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn active_points_follow_insertion_order() {
        let mut reg = ContactRegistry::default();
        reg.upsert(7, p(1.0, 1.0));
        reg.upsert(3, p(2.0, 2.0));
        reg.upsert(5, p(3.0, 3.0));
        assert_eq!(reg.size(), 3);
        assert_eq!(reg.active_points(), vec![p(1.0, 1.0), p(2.0, 2.0)]);
    }

    #[test]
    fn update_keeps_slot() {
        let mut reg = ContactRegistry::default();
        reg.upsert(1, p(0.0, 0.0));
        reg.upsert(2, p(10.0, 0.0));
        assert!(reg.update(1, p(5.0, 5.0)));
        reg.upsert(2, p(20.0, 0.0));
        assert_eq!(reg.active_points(), vec![p(5.0, 5.0), p(20.0, 0.0)]);
    }

    #[test]
    fn readding_moves_contact_to_back() {
        let mut reg = ContactRegistry::default();
        reg.upsert(1, p(0.0, 0.0));
        reg.upsert(2, p(10.0, 0.0));
        reg.upsert(3, p(20.0, 0.0));
        assert!(reg.remove(1));
        reg.upsert(1, p(0.0, 0.0));
        assert_eq!(reg.active_points(), vec![p(10.0, 0.0), p(20.0, 0.0)]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut reg = ContactRegistry::default();
        reg.upsert(1, p(0.0, 0.0));
        assert!(!reg.update(9, p(1.0, 1.0)));
        assert!(!reg.remove(9));
        assert_eq!(reg.size(), 1);
        assert_eq!(reg.active_points(), vec![p(0.0, 0.0)]);
    }

    #[test]
    fn clear_empties() {
        let mut reg = ContactRegistry::default();
        reg.upsert(1, p(0.0, 0.0));
        reg.upsert(2, p(0.0, 0.0));
        reg.clear();
        assert_eq!(reg.size(), 0);
        assert!(reg.active_points().is_empty());
    }
}
