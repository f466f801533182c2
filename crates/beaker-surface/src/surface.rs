//! The body surface: placement, movement, and overlap discovery.

use crate::error::SurfaceError;
use crate::handle::{BodyHandle, OwnerTag};
use smallvec::SmallVec;

/// A position on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in `[0, width)`.
    pub x: f64,
    /// Vertical coordinate in `[0, height)`.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One overlap reported by [`Surface::find_overlaps`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Handle of the other body.
    pub handle: BodyHandle,
    /// Stable identity of the other body's owner.
    pub owner: OwnerTag,
}

#[derive(Clone, Debug)]
struct Body {
    owner: OwnerTag,
    center: Point,
    radius: f64,
}

/// Toroidal 2D surface holding circular bodies.
///
/// Bodies live in generation-scoped slots; removing a body bumps its
/// slot's generation so outstanding handles go stale instead of silently
/// addressing a reused slot. Overlap queries walk slots in index order,
/// which keeps discovery order deterministic for a given history.
#[derive(Clone, Debug)]
pub struct Surface {
    width: f64,
    height: f64,
    bodies: Vec<Option<Body>>,
    generations: Vec<u32>,
    free: Vec<u32>,
}

impl Surface {
    /// Create an empty surface of the given extent.
    ///
    /// The extent is assumed validated by the world configuration.
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "non-positive surface extent");
        Self {
            width,
            height,
            bodies: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Surface width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_some()).count()
    }

    /// Place a body and return its handle.
    pub fn add_body(&mut self, owner: OwnerTag, center: Point, radius: f64) -> BodyHandle {
        let body = Body {
            owner,
            center: self.wrap(center),
            radius,
        };
        match self.free.pop() {
            Some(slot) => {
                self.bodies[slot as usize] = Some(body);
                BodyHandle::new(slot, self.generations[slot as usize])
            }
            None => {
                self.bodies.push(Some(body));
                self.generations.push(0);
                BodyHandle::new((self.bodies.len() - 1) as u32, 0)
            }
        }
    }

    /// Remove a body, invalidating every outstanding handle to it.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is already dead.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<(), SurfaceError> {
        self.check(handle)?;
        self.bodies[handle.index as usize] = None;
        self.generations[handle.index as usize] += 1;
        self.free.push(handle.index);
        Ok(())
    }

    /// Center of a body.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn center(&self, handle: BodyHandle) -> Result<Point, SurfaceError> {
        Ok(self.body(handle)?.center)
    }

    /// Radius of a body.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn radius(&self, handle: BodyHandle) -> Result<f64, SurfaceError> {
        Ok(self.body(handle)?.radius)
    }

    /// Owner of a body.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn owner(&self, handle: BodyHandle) -> Result<OwnerTag, SurfaceError> {
        Ok(self.body(handle)?.owner)
    }

    /// Teleport a body to a new center (wrapped into the surface).
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn set_center(&mut self, handle: BodyHandle, center: Point) -> Result<(), SurfaceError> {
        let wrapped = self.wrap(center);
        self.body_mut(handle)?.center = wrapped;
        Ok(())
    }

    /// Translate a body by `(dx, dy)`, wrapping around the torus.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn translate_wrap(
        &mut self,
        handle: BodyHandle,
        dx: f64,
        dy: f64,
    ) -> Result<(), SurfaceError> {
        let (width, height) = (self.width, self.height);
        let body = self.body_mut(handle)?;
        body.center.x = (body.center.x + dx).rem_euclid(width);
        body.center.y = (body.center.y + dy).rem_euclid(height);
        Ok(())
    }

    /// All bodies overlapping the given one, in slot order.
    ///
    /// Two circles overlap when the toroidal distance between their
    /// centers is strictly below the sum of their radii.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::StaleHandle`] if the handle is dead.
    pub fn find_overlaps(&self, handle: BodyHandle) -> Result<SmallVec<[Overlap; 8]>, SurfaceError> {
        let subject = self.body(handle)?;
        let mut hits = SmallVec::new();
        for (index, slot) in self.bodies.iter().enumerate() {
            if index as u32 == handle.index {
                continue;
            }
            let Some(other) = slot else { continue };
            let limit = subject.radius + other.radius;
            if self.torus_dist2(subject.center, other.center) < limit * limit {
                hits.push(Overlap {
                    handle: BodyHandle::new(index as u32, self.generations[index]),
                    owner: other.owner,
                });
            }
        }
        Ok(hits)
    }

    fn wrap(&self, p: Point) -> Point {
        Point {
            x: p.x.rem_euclid(self.width),
            y: p.y.rem_euclid(self.height),
        }
    }

    /// Squared distance between two points on the torus.
    fn torus_dist2(&self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        let dx = dx.min(self.width - dx);
        let dy = dy.min(self.height - dy);
        dx * dx + dy * dy
    }

    fn check(&self, handle: BodyHandle) -> Result<(), SurfaceError> {
        let index = handle.index as usize;
        let live = index < self.bodies.len()
            && self.generations[index] == handle.generation
            && self.bodies[index].is_some();
        if live {
            Ok(())
        } else {
            Err(SurfaceError::StaleHandle(handle))
        }
    }

    fn body(&self, handle: BodyHandle) -> Result<&Body, SurfaceError> {
        self.check(handle)?;
        Ok(self.bodies[handle.index as usize]
            .as_ref()
            .expect("checked live slot"))
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body, SurfaceError> {
        self.check(handle)?;
        Ok(self.bodies[handle.index as usize]
            .as_mut()
            .expect("checked live slot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaker_core::{AgentId, ResourceId};

    fn agent_tag(raw: u64) -> OwnerTag {
        OwnerTag::Agent(AgentId(raw))
    }

    #[test]
    fn add_and_read_back() {
        let mut surface = Surface::new(100.0, 100.0);
        let h = surface.add_body(agent_tag(1), Point::new(10.0, 20.0), 5.0);
        assert_eq!(surface.center(h), Ok(Point::new(10.0, 20.0)));
        assert_eq!(surface.radius(h), Ok(5.0));
        assert_eq!(surface.owner(h), Ok(agent_tag(1)));
        assert_eq!(surface.body_count(), 1);
    }

    #[test]
    fn removed_handle_goes_stale() {
        let mut surface = Surface::new(100.0, 100.0);
        let h = surface.add_body(agent_tag(1), Point::new(0.0, 0.0), 5.0);
        surface.remove_body(h).unwrap();
        assert_eq!(surface.center(h), Err(SurfaceError::StaleHandle(h)));
        assert_eq!(surface.remove_body(h), Err(SurfaceError::StaleHandle(h)));
    }

    #[test]
    fn reused_slot_rejects_the_old_handle() {
        let mut surface = Surface::new(100.0, 100.0);
        let old = surface.add_body(agent_tag(1), Point::new(0.0, 0.0), 5.0);
        surface.remove_body(old).unwrap();
        let new = surface.add_body(agent_tag(2), Point::new(1.0, 1.0), 5.0);
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(surface.center(old).is_err());
        assert!(surface.center(new).is_ok());
    }

    #[test]
    fn translate_wraps_around_both_axes() {
        let mut surface = Surface::new(100.0, 50.0);
        let h = surface.add_body(agent_tag(1), Point::new(99.0, 49.0), 1.0);
        surface.translate_wrap(h, 2.0, 2.0).unwrap();
        let p = surface.center(h).unwrap();
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn overlap_detection_uses_summed_radii() {
        let mut surface = Surface::new(100.0, 100.0);
        let a = surface.add_body(agent_tag(1), Point::new(10.0, 10.0), 4.0);
        let b = surface.add_body(agent_tag(2), Point::new(16.0, 10.0), 3.0);
        let far = surface.add_body(agent_tag(3), Point::new(60.0, 60.0), 3.0);

        let hits = surface.find_overlaps(a).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].owner, agent_tag(2));
        assert_eq!(hits[0].handle, b);

        let hits = surface.find_overlaps(far).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn overlap_sees_across_the_seam() {
        let mut surface = Surface::new(100.0, 100.0);
        let a = surface.add_body(agent_tag(1), Point::new(1.0, 50.0), 3.0);
        let _b = surface.add_body(agent_tag(2), Point::new(99.0, 50.0), 3.0);
        let hits = surface.find_overlaps(a).unwrap();
        assert_eq!(hits.len(), 1, "bodies touching across x-wrap must overlap");
    }

    #[test]
    fn overlap_reports_resource_owners() {
        let mut surface = Surface::new(100.0, 100.0);
        let a = surface.add_body(agent_tag(1), Point::new(10.0, 10.0), 4.0);
        let r = surface.add_body(OwnerTag::Resource(ResourceId(7)), Point::new(12.0, 10.0), 3.0);
        let hits = surface.find_overlaps(a).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].owner, OwnerTag::Resource(ResourceId(7)));
        assert_eq!(hits[0].handle, r);
    }
}
