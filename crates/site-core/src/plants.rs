//! Short-lived "growth" markers planted where the user clicks the earth.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlantId(pub u64);

#[derive(Clone, Debug)]
pub struct Plant {
    pub id: PlantId,
    pub x: f32,
    pub z: f32,
    pub y: f32,
    pub height: f32,
    pub scale_y: f32,
    pub born_sec: f64,
}

impl Plant {
    pub fn age(&self, now_sec: f64) -> f64 {
        now_sec - self.born_sec
    }

    pub fn is_expired(&self, now_sec: f64) -> bool {
        self.age(now_sec) >= PLANT_LIFETIME_SEC
    }
}

/// Live plant collection. The only way a plant leaves it is by expiring.
#[derive(Clone, Debug, Default)]
pub struct Garden {
    plants: Vec<Plant>,
    next_id: u64,
}

impl Garden {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a stem at `(x, z)` with a random height, standing on y = 0.
    pub fn spawn(&mut self, x: f32, z: f32, now_sec: f64, rng: &mut impl Rng) -> PlantId {
        let height = PLANT_MIN_HEIGHT + rng.gen::<f32>() * PLANT_HEIGHT_SPAN;
        let id = PlantId(self.next_id);
        self.next_id += 1;
        self.plants.push(Plant {
            id,
            x,
            z,
            y: height / 2.0,
            height,
            scale_y: 1.0,
            born_sec: now_sec,
        });
        id
    }

    /// Drop every plant whose age reached the lifetime, reporting their ids.
    pub fn prune(&mut self, now_sec: f64, expired: &mut impl Extend<PlantId>) {
        expired.extend(
            self.plants
                .iter()
                .filter(|p| p.is_expired(now_sec))
                .map(|p| p.id),
        );
        self.plants.retain(|p| !p.is_expired(now_sec));
    }

    /// Pulse the survivors. Each plant's index offsets its phase so they do
    /// not throb in unison.
    pub fn animate(&mut self, elapsed_sec: f32) {
        let bob = (elapsed_sec * PLANT_BOB_RATE).sin() * PLANT_BOB_AMPLITUDE;
        for (i, p) in self.plants.iter_mut().enumerate() {
            p.scale_y = 1.0 + (elapsed_sec * PLANT_PULSE_RATE + i as f32).sin() * PLANT_PULSE_AMPLITUDE;
            p.y += bob;
        }
    }

    pub fn contains(&self, id: PlantId) -> bool {
        self.plants.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.iter()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
