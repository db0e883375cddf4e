//! Tour search over eight Colombian cities.
//!
//! Runs the engine twice — a quick sweep (population 10, 8 generations)
//! and an exhaustive one (population 100, 2000 generations) — then prints
//! the best tour, its road distance in kilometres, and a Google Maps link.
//! Pass `--open` to also launch the link in the system browser.
//!
//! ```sh
//! cargo run --example colombia
//! RUST_LOG=debug cargo run --example colombia -- --open
//! ```

use std::time::Instant;

use evotsp::{report, DistanceMatrix, EvolveConfig, Evolver, InitPolicy, MutationPolicy};

const CITIES: [&str; 8] = [
    "Armenia-Quindio",
    "Bogota",
    "Cali",
    "Barranquilla",
    "Cucuta",
    "Medellin",
    "Bucaramanga",
    "Cartagena",
];

#[rustfmt::skip]
const DISTANCES: [[f64; 8]; 8] = [
    //  Arm    Bog    Cal    Bar    Cuc    Med    Buc    Car
    [    0.0,  267.0, 179.0, 1035.0, 779.0, 290.0, 582.0,  984.0], // Armenia
    [  267.0,    0.0, 460.0, 1051.0, 568.0, 416.0, 437.0, 1011.0], // Bogota
    [  179.0,  460.0,   0.0, 1187.0, 959.0, 442.0, 762.0, 1136.0], // Cali
    [ 1035.0, 1051.0, 1187.0,   0.0, 695.0, 751.0, 606.0,  124.0], // Barranquilla
    [  779.0,  568.0, 959.0,  695.0,   0.0, 577.0, 196.0,  712.0], // Cucuta
    [  290.0,  416.0, 442.0,  751.0, 577.0,   0.0, 382.0,  696.0], // Medellin
    [  582.0,  437.0, 762.0,  606.0, 196.0, 382.0,   0.0,  622.0], // Bucaramanga
    [  984.0, 1011.0, 1136.0, 124.0, 712.0, 696.0, 622.0,    0.0], // Cartagena
];

const SWEEPS: [(usize, usize); 2] = [
    (10, 8),     // quick: small population, few generations
    (100, 2000), // exhaustive: large population, many generations
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let open_browser = std::env::args().any(|a| a == "--open");

    let matrix = DistanceMatrix::new(DISTANCES.iter().map(|r| r.to_vec()).collect())?;

    for (population_size, generations) in SWEEPS {
        println!("\npopulation = {population_size}, generations = {generations}");

        let config = EvolveConfig::default()
            .with_population_size(population_size)
            .with_generations(generations)
            .with_init(InitPolicy::IdenticalClone)
            .with_mutation(MutationPolicy::Always);

        let started = Instant::now();
        let result = Evolver::run(&matrix, &config)?;
        let elapsed = started.elapsed();

        println!(
            "best tour: {:?}",
            report::route_names(&CITIES, result.best.order())
        );
        println!("distance:  {} km", result.best_length);
        println!("elapsed:   {:.3} s", elapsed.as_secs_f64());

        let url = report::maps_url(&CITIES, result.best.order());
        println!("map:       {url}");
        if open_browser {
            report::open_in_browser(&url)?;
        }
    }

    Ok(())
}
