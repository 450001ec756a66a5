use glam::Vec2;
use crate::components::particle::Particle;

/// The particle lattice covering the viewport.
///
/// Particles are stored row-major (y outer, x inner, ascending) in a flat
/// Vec. The grid is only ever replaced wholesale; there is no per-particle
/// spawn or despawn.
#[derive(Debug, Clone, Default)]
pub struct ParticleGrid {
    particles: Vec<Particle>,
    columns: usize,
    rows: usize,
}

/// Lattice coordinates `0, s, 2s, ...` strictly below `extent`.
fn lattice_axis(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * spacing)
        .take_while(move |v| *v < extent)
}

impl ParticleGrid {
    /// Build one particle per lattice point of a `width` x `height` viewport.
    ///
    /// `spacing` must be positive; callers pass `FieldConfig::effective_spacing`.
    pub fn build(width: f32, height: f32, spacing: f32, line_length: f32) -> Self {
        let columns = lattice_axis(width, spacing).count();
        let rows = lattice_axis(height, spacing).count();

        let mut particles = Vec::with_capacity(columns * rows);
        for y in lattice_axis(height, spacing) {
            for x in lattice_axis(width, spacing) {
                particles.push(Particle::new(Vec2::new(x, y), line_length));
            }
        }

        log::debug!(
            "particle grid rebuilt: {}x{} ({} particles) for {}x{} viewport",
            columns, rows, particles.len(), width, height
        );

        Self { particles, columns, rows }
    }

    /// Get a particle by row-major index.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Get a particle by row-major index (mutable).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    /// Iterate over all particles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Iterate over all particles mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// Number of lattice columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of lattice rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(grid: &ParticleGrid) -> Vec<Vec2> {
        grid.iter().map(|p| p.base()).collect()
    }

    #[test]
    fn count_matches_lattice() {
        let grid = ParticleGrid::build(400.0, 400.0, 20.0, 5.0);
        assert_eq!(grid.len(), 400);
        assert_eq!((grid.columns(), grid.rows()), (20, 20));

        // Non-multiples round up: ceil(1000/18) * ceil(700/18).
        let grid = ParticleGrid::build(1000.0, 700.0, 18.0, 5.0);
        assert_eq!(grid.columns(), 56);
        assert_eq!(grid.rows(), 39);
        assert_eq!(grid.len(), 56 * 39);
    }

    #[test]
    fn far_edge_is_exclusive() {
        let grid = ParticleGrid::build(40.0, 20.0, 20.0, 5.0);
        assert_eq!(
            bases(&grid),
            vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]
        );
    }

    #[test]
    fn row_major_order() {
        let grid = ParticleGrid::build(60.0, 40.0, 20.0, 5.0);
        assert_eq!(
            bases(&grid),
            vec![
                Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), Vec2::new(40.0, 0.0),
                Vec2::new(0.0, 20.0), Vec2::new(20.0, 20.0), Vec2::new(40.0, 20.0),
            ]
        );
    }

    #[test]
    fn rebuild_is_deterministic() {
        let a = ParticleGrid::build(813.0, 577.0, 18.0, 5.0);
        let b = ParticleGrid::build(813.0, 577.0, 18.0, 5.0);
        assert_eq!(bases(&a), bases(&b));
        assert!(b.iter().all(|p| p.pos == p.base() && p.alpha == 0.0));
        assert!(b.iter().all(|p| p.line_length() == 5.0));
    }

    #[test]
    fn empty_viewport_has_no_particles() {
        assert!(ParticleGrid::build(0.0, 400.0, 20.0, 5.0).is_empty());
        assert!(ParticleGrid::build(400.0, -1.0, 20.0, 5.0).is_empty());
    }
}
