use glam::Vec2;
use rand::Rng;

/// Tuning for the background particle network.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    /// Canvas area (px²) per particle.
    pub area_per_particle: f32,
    /// Per-axis velocity is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    /// Spawn keeps `spawn_margin * radius` away from the edges.
    pub spawn_margin: f32,
    pub color: &'static str,
    pub link_rgb: [u8; 3],
    pub link_width: f32,
    /// `mouse_radius = (h / d) * (w / d)`.
    pub mouse_radius_divisor: f32,
    /// Pairs link when `dist² < (w / d) * (h / d)`.
    pub link_divisor: f32,
    /// Line opacity is `1 - dist² / falloff`.
    pub opacity_falloff: f32,
    pub repel_step: f32,
    /// Repulsion stops `repel_margin * radius` short of an edge.
    pub repel_margin: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            area_per_particle: 9000.0,
            max_speed: 0.2,
            radius_min: 1.0,
            radius_span: 2.0,
            spawn_margin: 2.0,
            color: "#FFB347",
            link_rgb: [255, 179, 71],
            link_width: 1.0,
            mouse_radius_divisor: 110.0,
            link_divisor: 7.0,
            opacity_falloff: 20000.0,
            repel_step: 5.0,
            repel_margin: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(size: Vec2, params: &ParticleParams, rng: &mut R) -> Self {
        let radius = params.radius_min + rng.gen::<f32>() * params.radius_span;
        let margin = radius * params.spawn_margin;
        let x = rng.gen::<f32>() * ((size.x - margin) - margin) + margin;
        let y = rng.gen::<f32>() * ((size.y - margin) - margin) + margin;
        let speed_span = 2.0 * params.max_speed;
        let vx = rng.gen::<f32>() * speed_span - params.max_speed;
        let vy = rng.gen::<f32>() * speed_span - params.max_speed;
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            color: params.color,
        }
    }

    /// Bounce off the edges, get nudged away from the pointer, then move.
    pub fn update(
        &mut self,
        size: Vec2,
        mouse: Option<Vec2>,
        mouse_radius: f32,
        params: &ParticleParams,
    ) {
        if self.pos.x > size.x || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > size.y || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }

        if let Some(m) = mouse {
            if m.distance(self.pos) < mouse_radius + self.radius {
                let margin = self.radius * params.repel_margin;
                let step = params.repel_step;
                // each test sees the previous nudge
                if m.x < self.pos.x && self.pos.x < size.x - margin {
                    self.pos.x += step;
                }
                if m.x > self.pos.x && self.pos.x > margin {
                    self.pos.x -= step;
                }
                if m.y < self.pos.y && self.pos.y < size.y - margin {
                    self.pos.y += step;
                }
                if m.y > self.pos.y && self.pos.y > margin {
                    self.pos.y -= step;
                }
            }
        }

        self.pos += self.vel;
    }
}

#[inline]
pub fn particle_count(width: f32, height: f32, area_per_particle: f32) -> usize {
    let n = (width * height / area_per_particle).ceil();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

#[inline]
pub fn mouse_radius(width: f32, height: f32, divisor: f32) -> f32 {
    (height / divisor) * (width / divisor)
}

#[inline]
pub fn link_threshold(width: f32, height: f32, divisor: f32) -> f32 {
    (width / divisor) * (height / divisor)
}

/// Not clamped: far pairs go negative and the canvas treats that as transparent.
#[inline]
pub fn link_opacity(dist_sq: f32, falloff: f32) -> f32 {
    1.0 - dist_sq / falloff
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Minimal 2D drawing surface; implemented over `CanvasRenderingContext2d`.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);
}

/// All particle state for one canvas: the animation context.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub params: ParticleParams,
    pub size: Vec2,
    pub particles: Vec<Particle>,
    pub mouse: Option<Vec2>,
    pub mouse_radius: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, params: ParticleParams, rng: &mut R) -> Self {
        let mut field = Self {
            params,
            size: Vec2::ZERO,
            particles: Vec::new(),
            mouse: None,
            mouse_radius: 0.0,
        };
        field.resize(width, height, rng);
        field
    }

    /// Regenerate every particle for the new size. The pointer position is kept.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.size = Vec2::new(width, height);
        self.mouse_radius = mouse_radius(width, height, self.params.mouse_radius_divisor);
        let n = particle_count(width, height, self.params.area_per_particle);
        self.particles.clear();
        self.particles.reserve(n);
        for _ in 0..n {
            self.particles.push(Particle::spawn(self.size, &self.params, rng));
        }
    }

    pub fn set_mouse(&mut self, mouse: Option<Vec2>) {
        self.mouse = mouse;
    }

    pub fn step(&mut self) {
        let (size, mouse, radius) = (self.size, self.mouse, self.mouse_radius);
        for p in &mut self.particles {
            p.update(size, mouse, radius, &self.params);
        }
    }

    pub fn link_threshold(&self) -> f32 {
        link_threshold(self.size.x, self.size.y, self.params.link_divisor)
    }

    /// Every pair `(a, b)` with `b >= a` closer than the link threshold.
    /// Self-pairs are included; their zero-length line draws nothing.
    pub fn connections(&self) -> Vec<Link> {
        let threshold = self.link_threshold();
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a) {
                let dist_sq = pa.pos.distance_squared(pb.pos);
                if dist_sq < threshold {
                    links.push(Link {
                        a,
                        b,
                        opacity: link_opacity(dist_sq, self.params.opacity_falloff),
                    });
                }
            }
        }
        links
    }

    pub fn link_color(&self, opacity: f32) -> String {
        let [r, g, b] = self.params.link_rgb;
        format!("rgba({}, {}, {},{})", r, g, b, opacity)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color);
        }
        for link in self.connections() {
            let color = self.link_color(link.opacity);
            surface.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                &color,
                self.params.link_width,
            );
        }
    }

    /// One animation frame: advance the simulation and redraw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }
}
