//! Look-ray target resolution

use serde::{Deserialize, Serialize};
use spring_core::Tag;
use spring_math::{Quat, Vec3};
use spring_physics::{PhysicsWorld, RayQuery, RaycastHit};

/// Look-ray settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ray length
    pub range: f32,
    /// Skip static geometry
    pub ignore_static: bool,
    /// Only objects carrying this tag qualify
    pub tag: Option<Tag>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            range: 100.0,
            ignore_static: true,
            tag: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_tag(mut self, tag: Option<Tag>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_ignore_static(mut self, ignore_static: bool) -> Self {
        self.ignore_static = ignore_static;
        self
    }
}

/// Last cast, keyed on the exact bits of the viewpoint and the world revision
#[derive(Debug, Clone)]
struct ResolveCache {
    origin: [u32; 3],
    rotation: [u32; 4],
    world_revision: u64,
    hit: Option<RaycastHit>,
}

/// Casts one look ray per call, reusing the previous result while neither
/// the viewpoint nor the physics world has changed
#[derive(Debug, Clone)]
pub struct RayTargetResolver {
    config: ResolverConfig,
    cache: Option<ResolveCache>,
    last_query: Option<RayQuery>,
    casts: u64,
    cache_hits: u64,
}

impl RayTargetResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            cache: None,
            last_query: None,
            casts: 0,
            cache_hits: 0,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// First qualifying hit along the look ray that also passes `filter`
    ///
    /// The filter runs on every call, cached or not, so it may depend on
    /// state that changes while the viewpoint stays still.
    pub fn resolve(
        &mut self,
        physics: &dyn PhysicsWorld,
        origin: Vec3,
        rotation: Quat,
        filter: impl Fn(&RaycastHit) -> bool,
    ) -> Option<RaycastHit> {
        let origin_bits = origin.to_bits();
        let rotation_bits = rotation.to_bits();
        let world_revision = physics.revision();

        let cached = self
            .cache
            .as_ref()
            .filter(|c| {
                c.origin == origin_bits
                    && c.rotation == rotation_bits
                    && c.world_revision == world_revision
            })
            .map(|c| c.hit);

        let hit = match cached {
            Some(hit) => {
                self.cache_hits += 1;
                hit
            }
            None => {
                let query = RayQuery::new(origin, rotation.forward(), self.config.range)
                    .with_tag(self.config.tag)
                    .with_ignore_static(self.config.ignore_static);
                let hit = physics.raycast(&query);
                self.casts += 1;
                log::trace!("Look ray from {origin:?} hit {:?}", hit.map(|h| h.object));

                self.cache = Some(ResolveCache {
                    origin: origin_bits,
                    rotation: rotation_bits,
                    world_revision,
                    hit,
                });
                self.last_query = Some(query);
                hit
            }
        };

        hit.filter(|h| filter(h))
    }

    /// Force the next call to cast
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// The most recent ray actually cast
    pub fn last_query(&self) -> Option<&RayQuery> {
        self.last_query.as_ref()
    }

    /// Rays cast so far
    pub fn casts(&self) -> u64 {
        self.casts
    }

    /// Calls answered from the cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }
}

impl Default for RayTargetResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
