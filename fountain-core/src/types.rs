/// Identifier for a fountain in a [`crate::scene::Scene`].
///
/// This is an index into `Scene::fountains`, and is only meaningful until
/// the next layout change (see [`crate::scene::Scene::resize`]).
pub type FountainId = usize;
