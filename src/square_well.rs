use qwell::{ levels, units, well::{ NuGrid, Particle } };

const STEPS: usize = 1001;

// integrate trial wavefunctions for a particle in a square well and compare
// against the infinite-well reference spectrum

fn main() -> anyhow::Result<()> {
    // square well spanning [0, 1], energies measured from the top: ν = -1
    // across the interior
    let grid = NuGrid::new_linspace(STEPS, |_| -1.0)?;

    for n in 1..=3 {
        let trial = levels::analytical_e(n);
        let mut particle
            = Particle::with_gamma_sq(trial, 1.0, STEPS, levels::GAMMA_SQ)?;
        let psi = particle.propagate(grid.get_nu())?;
        println!("n = {}", n);
        println!("  analytical epsilon: {:+.6}", trial);
        println!("  psi at midpoint:    {:+.3e}", psi[STEPS / 2]);
        println!("  psi at far wall:    {:+.3e}", psi[STEPS - 1]);
    }

    // the same recursion from physical parameters: an electron in a 1 nm,
    // 10 eV well, energies measured from the bottom (ν = 0 inside)
    let depth = 10.0 * units::e;
    let length = 1e-9;
    let mut electron
        = Particle::new(0.5 * depth, depth, length, STEPS, 0.0, units::me)?;
    println!("electron in a 1 nm, 10 eV well:");
    println!("  gamma^2:  {:.3}", electron.get_gamma_sq());
    println!("  epsilon:  {:.3}", electron.get_epsilon());
    let flat = NuGrid::new_linspace(STEPS, |_| 0.0)?;
    let psi = electron.propagate(flat.get_nu())?;
    println!("  psi at far wall: {:+.3e}", psi[STEPS - 1]);

    Ok(())
}
