use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Tuning for the decorative background.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub palette: &'static [&'static str],
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Pixels per frame at 60fps.
    pub speed: f64,
    pub link_distance: f64,
    pub link_color: &'static str,
    pub link_opacity: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 40,
            palette: &["#6366F1", "#EC4899", "#60A5FA"],
            min_radius: 2.0,
            max_radius: 6.0,
            min_opacity: 0.3,
            max_opacity: 0.7,
            speed: 1.2,
            link_distance: 140.0,
            link_color: "#94A3B8",
            link_opacity: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: SmallRng,
}

// frame deltas are normalised against this
const FRAME_SECONDS: f64 = 1.0 / 60.0;
// a background tab can hand us a multi-second delta
const MAX_STEP_SECONDS: f64 = 0.1;

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            width: width.max(1.0),
            height: height.max(1.0),
            rng: SmallRng::seed_from_u64(seed),
        };
        let particles = (0..field.config.count).map(|_| field.spawn()).collect();
        field.particles = particles;
        field
    }

    fn spawn(&mut self) -> Particle {
        let c = &self.config;
        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
        let radius = if c.max_radius > c.min_radius {
            self.rng.gen_range(c.min_radius..c.max_radius)
        } else {
            c.min_radius
        };
        let opacity = if c.max_opacity > c.min_opacity {
            self.rng.gen_range(c.min_opacity..c.max_opacity)
        } else {
            c.max_opacity
        };
        let color = if c.palette.is_empty() {
            "#FFFFFF"
        } else {
            c.palette[self.rng.gen_range(0..c.palette.len())]
        };
        Particle {
            x: self.rng.gen_range(0.0..self.width),
            y: self.rng.gen_range(0.0..self.height),
            vx: angle.cos() * c.speed,
            vy: angle.sin() * c.speed,
            radius,
            opacity,
            color,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in self.particles.iter_mut() {
            p.x = p.x.min(self.width);
            p.y = p.y.min(self.height);
        }
    }

    /// Move every particle by `dt` seconds. Particles leaving one edge come back on the opposite one.
    pub fn step(&mut self, dt: f64) {
        let frames = dt.clamp(0.0, MAX_STEP_SECONDS) / FRAME_SECONDS;
        let (w, h) = (self.width, self.height);
        for p in self.particles.iter_mut() {
            p.x += p.vx * frames;
            p.y += p.vy * frames;
            let r = p.radius;
            if p.x < -r {
                p.x = w + r;
            } else if p.x > w + r {
                p.x = -r;
            }
            if p.y < -r {
                p.y = h + r;
            } else if p.y > h + r {
                p.y = -r;
            }
        }
    }

    /// Pairs closer than the link distance, fading out towards it.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < max {
                    links.push(Link {
                        from: i,
                        to: j,
                        opacity: self.config.link_opacity * (1.0 - dist / max),
                    });
                }
            }
        }
        links
    }
}
