/// Drives the single blend parameter shared by every animated node.
///
/// `t` moves between 0 and 1 at a rate of `1 / duration` per second and
/// stays clamped at whichever end it reaches. [`toggle`](Self::toggle) sends
/// it back the other way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    t: f32,
    duration: f32,
    direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl AnimationDriver {
    pub fn new(duration: f32) -> Self {
        Self {
            t: 0.0,
            duration,
            direction: Direction::Backward,
        }
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn toggle(&mut self) {
        self.direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
        log::debug!("animation now playing {:?} from t = {}", self.direction, self.t);
    }

    /// Moves `t` by `elapsed` seconds and returns the clamped value.
    pub fn advance(&mut self, elapsed: f32) -> f32 {
        let target = match self.direction {
            Direction::Forward => 1.0,
            Direction::Backward => 0.0,
        };

        if self.duration <= 0.0 {
            self.t = target;
            return self.t;
        }

        let step = elapsed / self.duration;
        self.t = match self.direction {
            Direction::Forward => self.t + step,
            Direction::Backward => self.t - step,
        }
        .clamp(0.0, 1.0);
        self.t
    }

    /// True once `t` has reached the end it is moving towards.
    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Forward => self.t >= 1.0,
            Direction::Backward => self.t <= 0.0,
        }
    }
}
