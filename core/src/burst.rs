use core::time::Duration;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of the celebration after "Yes".
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstPlan {
    pub duration: Duration,
    pub interval: Duration,
    /// Particles per emission at the very start, decaying linearly to zero.
    pub peak_particles: f32,
    pub spread_degrees: f32,
    pub velocity: f32,
    /// Frames each particle lives for.
    pub ticks: u32,
}

impl Default for BurstPlan {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(3),
            interval: Duration::from_millis(250),
            peak_particles: 50.0,
            spread_degrees: 360.0,
            velocity: 30.0,
            ticks: 60,
        }
    }
}

impl BurstPlan {
    /// Emission strength in `[0, 1]` at `elapsed`.
    pub fn intensity(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return 0.0;
        }
        let left = self.duration - elapsed;
        left.as_secs_f32() / self.duration.as_secs_f32()
    }
}

/// One emission handed to the animation service. Origins are fractions of the page.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstRequest {
    pub origin_x: f32,
    pub origin_y: f32,
    pub particle_count: u32,
    pub spread_degrees: f32,
    pub velocity: f32,
    pub ticks: u32,
}

/// A running celebration; ends by itself once the plan's duration has passed.
#[derive(Clone, Debug)]
pub struct Burst {
    plan: BurstPlan,
    rng: SmallRng,
}

impl Burst {
    pub fn new(plan: BurstPlan, seed: u64) -> Self {
        Self {
            plan,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn plan(&self) -> &BurstPlan {
        &self.plan
    }

    pub fn is_over(&self, elapsed: Duration) -> bool {
        elapsed >= self.plan.duration
    }

    /// Requests for the emission at `elapsed`, one from each side of the page.
    pub fn emit(&mut self, elapsed: Duration) -> Option<[BurstRequest; 2]> {
        if self.is_over(elapsed) {
            return None;
        }

        let particles = self.plan.peak_particles * self.plan.intensity(elapsed);
        let particle_count = (particles + 0.5) as u32;
        let left = self.request(0.1..0.3, particle_count);
        let right = self.request(0.7..0.9, particle_count);
        Some([left, right])
    }

    fn request(&mut self, x_range: core::ops::Range<f32>, particle_count: u32) -> BurstRequest {
        BurstRequest {
            origin_x: self.rng.random_range(x_range),
            origin_y: self.rng.random_range(-0.2..0.8),
            particle_count,
            spread_degrees: self.plan.spread_degrees,
            velocity: self.plan.velocity,
            ticks: self.plan.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_the_celebration() {
        let plan = BurstPlan::default();
        assert_eq!(plan.duration, Duration::from_secs(3));
        assert_eq!(plan.interval, Duration::from_millis(250));
        assert_eq!(plan.duration.as_millis() / plan.interval.as_millis(), 12);
    }

    #[test]
    fn intensity_decays_linearly_to_zero() {
        let plan = BurstPlan::default();
        assert_eq!(plan.intensity(Duration::ZERO), 1.0);
        assert_eq!(plan.intensity(Duration::from_millis(1500)), 0.5);
        assert_eq!(plan.intensity(Duration::from_secs(3)), 0.0);
        assert_eq!(plan.intensity(Duration::from_secs(10)), 0.0);
    }

    #[test]
    fn emissions_shrink_and_then_stop() {
        let mut burst = Burst::new(BurstPlan::default(), 1);
        let interval = burst.plan().interval;

        let mut counts = alloc::vec::Vec::new();
        let mut elapsed = Duration::ZERO;
        while let Some([left, right]) = burst.emit(elapsed) {
            assert_eq!(left.particle_count, right.particle_count);
            counts.push(left.particle_count);
            elapsed += interval;
        }

        assert_eq!(counts.len(), 12);
        assert_eq!(counts[0], 50);
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(burst.is_over(elapsed));
    }

    #[test]
    fn origins_come_from_both_sides() {
        let mut burst = Burst::new(BurstPlan::default(), 9);
        for step in 0..12 {
            let [left, right] = burst.emit(Duration::from_millis(step * 250)).unwrap();
            assert!((0.1..0.3).contains(&left.origin_x));
            assert!((0.7..0.9).contains(&right.origin_x));
            assert!((-0.2..0.8).contains(&left.origin_y));
            assert_eq!(left.spread_degrees, 360.0);
            assert_eq!(right.velocity, 30.0);
        }
    }
}
