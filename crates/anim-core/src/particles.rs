//! Procedurally animated point cloud.
//!
//! Seed positions are fixed at construction; live positions are rewritten in
//! place every frame from `(elapsed, seed.x)`. Nothing here allocates after
//! construction.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::{RADIAL_AMPLITUDE, RADIAL_PHASE_SCALE};
use crate::error::CoreError;

/// Which axis the per-frame update drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParticleMode {
    /// `y = sin(t + x)`, `z` restored from the seed.
    #[default]
    Wave,
    /// `z = cos(t + 5x) * 2`, `y` left as last written.
    Radial,
}

impl ParticleMode {
    pub fn toggled(self) -> Self {
        match self {
            ParticleMode::Wave => ParticleMode::Radial,
            ParticleMode::Radial => ParticleMode::Wave,
        }
    }
}

/// Volume the seed positions are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleLayout {
    /// Each axis uniform in `[-extent / 2, extent / 2)`.
    Cube { extent: f32 },
    /// X/Z as `Cube`; Y spread down the section stack, starting a little above
    /// the first section.
    Sections {
        extent: f32,
        objects_distance: f32,
        sections: usize,
    },
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    seeds: Box<[Vec3]>,
    live: Box<[Vec3]>,
    colors: Box<[Vec3]>,
}

impl ParticleField {
    /// Field whose live buffer starts as a copy of `seeds`.
    pub fn new(seeds: Vec<Vec3>) -> Self {
        let live = seeds.clone().into_boxed_slice();
        let colors = vec![Vec3::ONE; seeds.len()].into_boxed_slice();
        Self {
            seeds: seeds.into_boxed_slice(),
            live,
            colors,
        }
    }

    /// Adopt caller-provided buffers. Length agreement is checked here once so
    /// the per-frame update never has to.
    pub fn from_parts(seeds: Vec<Vec3>, live: Vec<Vec3>) -> Result<Self, CoreError> {
        if seeds.len() != live.len() {
            return Err(CoreError::BufferLengthMismatch {
                seeds: seeds.len(),
                live: live.len(),
            });
        }
        let colors = vec![Vec3::ONE; seeds.len()].into_boxed_slice();
        Ok(Self {
            seeds: seeds.into_boxed_slice(),
            live: live.into_boxed_slice(),
            colors,
        })
    }

    /// Deterministically scatter `count` particles with per-particle colors.
    pub fn scatter(count: usize, layout: ParticleLayout, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seeds = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            let p = match layout {
                ParticleLayout::Cube { extent } => Vec3::new(
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                ),
                ParticleLayout::Sections {
                    extent,
                    objects_distance,
                    sections,
                } => {
                    let x = (rng.gen::<f32>() - 0.5) * extent;
                    let y = objects_distance * 0.4
                        - rng.gen::<f32>() * objects_distance * sections as f32;
                    let z = (rng.gen::<f32>() - 0.5) * extent;
                    Vec3::new(x, y, z)
                }
            };
            seeds.push(p);
            colors.push(Vec3::new(rng.gen(), rng.gen(), rng.gen()));
        }
        log::debug!("[particles] scattered {} points ({:?})", count, layout);
        let live = seeds.clone().into_boxed_slice();
        Self {
            seeds: seeds.into_boxed_slice(),
            live,
            colors: colors.into_boxed_slice(),
        }
    }

    /// Rewrite every live position for time `elapsed`.
    ///
    /// `Wave` is a pure function of `(elapsed, seed)`. `Radial` only writes
    /// `z`, so `y` keeps whatever the last `Wave` update produced.
    pub fn update(&mut self, elapsed: f32, mode: ParticleMode) {
        match mode {
            ParticleMode::Wave => {
                for (live, seed) in self.live.iter_mut().zip(self.seeds.iter()) {
                    live.y = (elapsed + seed.x).sin();
                    live.z = seed.z;
                }
            }
            ParticleMode::Radial => {
                for (live, seed) in self.live.iter_mut().zip(self.seeds.iter()) {
                    live.z = (elapsed + seed.x * RADIAL_PHASE_SCALE).cos() * RADIAL_AMPLITUDE;
                }
            }
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.live
    }

    #[inline]
    pub fn seeds(&self) -> &[Vec3] {
        &self.seeds
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Live positions as tightly packed `f32x3` bytes, ready for a vertex
    /// buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice::<Vec3, u8>(&self.live[..])
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
