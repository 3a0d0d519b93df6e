// Damped spring used to chase declarative targets (cursor indicators, nav bar).
//
//   a = (-stiffness * (x - target) - damping * v) / mass
//
// Integrated with semi-implicit Euler; large frame deltas are subdivided so
// stiff springs stay stable when a tab resumes after being backgrounded.

/// Largest integration step in seconds.
const MAX_STEP_SECS: f32 = 0.004;
/// Frame deltas above this are treated as a stall and clamped.
const MAX_FRAME_SECS: f32 = 0.1;
const REST_POSITION_EPS: f32 = 0.001;
const REST_VELOCITY_EPS: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub const fn from_tuple(p: (f32, f32, f32)) -> Self {
        Self::new(p.0, p.1, p.2)
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    pub fn new(initial: f32, params: SpringParams) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            params: SpringParams {
                stiffness: params.stiffness.max(0.1),
                damping: params.damping.max(0.0),
                mass: params.mass.max(1e-3),
            },
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_POSITION_EPS
            && self.velocity.abs() < REST_VELOCITY_EPS
    }

    /// Advance the spring by `dt_sec` seconds.
    pub fn step(&mut self, dt_sec: f32) {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt_sec.clamp(0.0, MAX_FRAME_SECS);
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            let accel = force / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }
}
