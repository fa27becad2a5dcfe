use std::f32::consts::PI;

use bevy::prelude::*;
use common::math::{approach, direction_to, heading_of, shortest_rotation};

use crate::paths::WaypointQueue;

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TankParams {
    /// "Close enough" limit. When the tank is within this distance of its destination the
    /// waypoint counts as reached.
    /// Defaults to `5.0`.
    pub arrival_tolerance: f32,
    /// Heading error in radians below which the tank neither turns nor slows down.
    /// Defaults to `0.15`.
    pub angular_tolerance: f32,
    /// How far the tank can turn in one second, in radians. The default of `PI` lets it turn
    /// all the way around in two seconds.
    pub max_angular_velocity: f32,
    /// Scales the squared bounding radius when hit testing.
    /// Defaults to `1.5`.
    pub hit_scale: f32,
}

impl Default for TankParams {
    fn default() -> Self {
        Self {
            arrival_tolerance: 5.0,
            angular_tolerance: 0.15,
            max_angular_velocity: PI,
            hit_scale: 1.5,
        }
    }
}

/// Hit-test geometry of the tank, derived from its texture.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Footprint {
    pub bounding_radius: f32,
}

impl Footprint {
    pub fn new(bounding_radius: f32) -> Self {
        Self { bounding_radius }
    }

    /// Distance from the texture center to one of its corners.
    pub fn from_size(size: Vec2) -> Self {
        Self::new((size / 2.0).length())
    }
}

/// Heading the tank turns towards on its current leg.
///
/// It is worked out once, when a leg starts, so the turning direction stays the same for the
/// whole leg.
#[derive(Debug, Default, Clone, Copy, PartialEq, Reflect)]
pub enum TargetHeading {
    /// A new leg started and its heading has not been computed yet.
    #[default]
    Recompute,
    Locked(f32),
}

/// What a single `Tank::update` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No waypoints left.
    Idle,
    /// The current destination was reached and removed.
    Arrived { remaining: usize },
    Moving { multiplier: f32 },
}

/// Forward speed factor for a given heading error.
///
/// Full speed when nearly aligned, stopped while turning sharply and a linear ramp in between.
pub fn velocity_multiplier(abs_delta: f32, angular_tolerance: f32) -> f32 {
    if abs_delta > 2.0 * angular_tolerance {
        0.0
    } else if abs_delta > angular_tolerance {
        2.0 - abs_delta / angular_tolerance
    } else {
        1.0
    }
}

/// An object that drives along its waypoints, turning at a limited rate.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct Tank {
    position: Vec2,
    /// Current facing and movement angle in radians.
    heading: f32,
    target_heading: TargetHeading,
    move_speed: f32,
    waypoints: WaypointQueue,
    footprint: Footprint,
    params: TankParams,
}

impl Tank {
    pub fn new(position: Vec2, footprint: Footprint, params: TankParams) -> Self {
        Self {
            position,
            heading: 0.0,
            target_heading: TargetHeading::Recompute,
            move_speed: 0.0,
            waypoints: WaypointQueue::new(),
            footprint,
            params,
        }
    }

    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }

    /// Moves the tank to `position` and forgets its path.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.waypoints.clear();
        self.target_heading = TargetHeading::Recompute;
    }

    /// Replaces the current path with a new one starting at `point`.
    pub fn begin_path(&mut self, point: Vec2) {
        self.waypoints.clear();
        self.waypoints.enqueue(point);
        self.target_heading = TargetHeading::Recompute;
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn location(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn target_heading(&self) -> TargetHeading {
        self.target_heading
    }

    pub fn waypoints(&self) -> &WaypointQueue {
        &self.waypoints
    }

    pub fn waypoints_mut(&mut self) -> &mut WaypointQueue {
        &mut self.waypoints
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn params(&self) -> &TankParams {
        &self.params
    }

    /// Linear distance to the current destination.
    pub fn distance_to_destination(&self) -> Option<f32> {
        self.waypoints
            .peek()
            .map(|destination| self.position.distance(destination))
    }

    pub fn at_destination(&self) -> bool {
        self.waypoints.peek().is_some_and(|destination| {
            self.position.distance_squared(destination) < self.arrival_tolerance_squared()
        })
    }

    /// Tests if a given point is considered to "hit" the tank.
    pub fn hit_test(&self, point: Vec2) -> bool {
        let radius = self.footprint.bounding_radius;
        point.distance_squared(self.position) < radius * radius * self.params.hit_scale
    }

    /// Advances the tank by `elapsed` seconds towards its current destination.
    pub fn update(&mut self, elapsed: f32) -> TickOutcome {
        let Some(destination) = self.waypoints.peek() else {
            return TickOutcome::Idle;
        };

        if self.position.distance_squared(destination) < self.arrival_tolerance_squared() {
            return self.arrive();
        }

        // Only reachable with a zero arrival tolerance: the destination sits exactly on the
        // tank, so there is nothing to steer towards.
        let Some(direction) = direction_to(self.position, destination) else {
            return self.arrive();
        };

        let (target, delta) = match self.target_heading {
            TargetHeading::Locked(target) => (target, target - self.heading),
            TargetHeading::Recompute => {
                let delta = shortest_rotation(heading_of(direction), self.heading);
                let target = self.heading + delta;
                self.target_heading = TargetHeading::Locked(target);
                (target, delta)
            }
        };
        let abs_delta = delta.abs();

        if abs_delta > self.params.angular_tolerance {
            let max_step = self.params.max_angular_velocity * elapsed;
            self.heading = approach(self.heading, target, max_step);
        }

        let multiplier = velocity_multiplier(abs_delta, self.params.angular_tolerance);
        self.position += direction * (multiplier * self.move_speed * elapsed);

        TickOutcome::Moving { multiplier }
    }

    fn arrive(&mut self) -> TickOutcome {
        self.waypoints.dequeue();
        self.target_heading = TargetHeading::Recompute;

        TickOutcome::Arrived {
            remaining: self.waypoints.len(),
        }
    }

    fn arrival_tolerance_squared(&self) -> f32 {
        self.params.arrival_tolerance * self.params.arrival_tolerance
    }
}
