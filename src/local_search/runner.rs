//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Build the initial tour with nearest-neighbor construction.
//! 2. Repeatedly draw a random position pair `i < j`, evaluate the
//!    2-opt delta in O(1), and accept by the Metropolis criterion:
//!    always if improving, with probability `exp(-delta / T)` otherwise.
//! 3. Cool geometrically after every evaluated move; stop at the
//!    temperature floor or the wall-clock cutoff, whichever first.
//!
//! The loop is anytime: the best tour seen so far is always valid and
//! is returned even when the cutoff fires before any accepted move.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::construct::nearest_neighbor;
use super::two_opt;
use crate::geometry::tour_length;
use crate::instance::{Instance, VertexId};

/// Snapshot passed to the progress observer at iteration milestones.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    /// Evaluated moves so far (degenerate skips excluded).
    pub iteration: usize,
    /// Length of the current tour.
    pub current_length: i64,
    /// Length of the best tour seen.
    pub best_length: i64,
    /// Current temperature.
    pub temperature: f64,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Best tour found, as vertex identifiers.
    pub tour: Vec<VertexId>,

    /// Length of the best tour.
    pub length: i64,

    /// Evaluated moves (delta computed and acceptance decided).
    pub iterations: usize,

    /// Position pairs discarded because the two edges shared an
    /// endpoint. Not evaluated, not cooled.
    pub degenerate_skips: usize,

    /// Accepted moves, improvements included.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop exited.
    pub final_temperature: f64,

    /// Whether the wall-clock cutoff fired before the temperature floor.
    pub timed_out: bool,

    /// Best length sampled at milestone intervals.
    pub length_history: Vec<i64>,
}

/// Executes simulated annealing over the 2-opt neighborhood.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the annealing loop without a progress observer.
    pub fn run(instance: &Instance, config: &AnnealConfig) -> AnnealResult {
        Self::run_with_observer(instance, config, &mut |_| {})
    }

    /// Runs the annealing loop, invoking `observer` once after
    /// construction and then at every milestone interval.
    ///
    /// With a fixed seed the run is fully reproducible: the RNG is a
    /// private stream owned by this call, so repeated invocations in
    /// one process cannot interfere with each other.
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration or an instance with fewer
    /// than 2 vertices (call [`AnnealConfig::validate`] first for a
    /// descriptive error).
    pub fn run_with_observer(
        instance: &Instance,
        config: &AnnealConfig,
        observer: &mut dyn FnMut(&Milestone),
    ) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");
        let n = instance.len();
        assert!(n >= 2, "annealing requires at least 2 vertices, got {n}");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let start = Instant::now();

        // INIT: nearest-neighbor construction, current = best.
        let mut current = nearest_neighbor(instance, None);
        let mut current_length = tour_length(&current, instance);
        let mut best = current.clone();
        let mut best_length = current_length;

        log::info!("annealing: {n} vertices, initial tour length {current_length}");
        observer(&Milestone {
            iteration: 0,
            current_length,
            best_length,
            temperature: config.initial_temperature,
            elapsed: start.elapsed(),
        });

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut degenerate_skips = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut timed_out = false;
        let mut length_history = vec![best_length];

        // With fewer than 4 vertices every 2-opt move leaves the cyclic
        // edge set unchanged, so the construction tour is final.
        let has_moves = n >= 4;

        while has_moves && temperature > config.min_temperature {
            if (iterations + degenerate_skips).is_multiple_of(config.time_check_interval) {
                if let Some(limit) = config.time_limit {
                    let elapsed = start.elapsed();
                    if elapsed >= limit {
                        log::info!(
                            "annealing: time limit reached after {:.2}s, {iterations} moves",
                            elapsed.as_secs_f64()
                        );
                        timed_out = true;
                        break;
                    }
                }
            }

            let i = rng.random_range(0..n - 1);
            let j = rng.random_range(i + 1..n);
            if j == i + 1 {
                // The two edges share tour[i+1]; skip without cooling.
                degenerate_skips += 1;
                continue;
            }

            let delta = two_opt::delta(&current, instance, i, j);

            // Metropolis acceptance criterion.
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-(delta as f64) / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = two_opt::apply(&current, i, j);
                current_length += delta;
                accepted_moves += 1;

                if current_length < best_length {
                    best = current.clone();
                    best_length = current_length;
                }
            }

            temperature *= config.cooling_factor;
            iterations += 1;

            if iterations.is_multiple_of(config.milestone_interval) {
                length_history.push(best_length);
                log::debug!(
                    "annealing: iter {iterations}, best {best_length}, current {current_length}, temp {temperature:.2}"
                );
                observer(&Milestone {
                    iteration: iterations,
                    current_length,
                    best_length,
                    temperature,
                    elapsed: start.elapsed(),
                });
            }
        }

        if length_history.last() != Some(&best_length) {
            length_history.push(best_length);
        }
        log::info!(
            "annealing: finished after {iterations} moves, best length {best_length}"
        );

        AnnealResult {
            tour: instance.to_ids(&best),
            length: best_length,
            iterations,
            degenerate_skips,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            timed_out,
            length_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn unit_square() -> Instance {
        Instance::new(vec![
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(0.0, 1.0)),
            (3, Point::new(1.0, 1.0)),
            (4, Point::new(1.0, 0.0)),
        ])
    }

    fn scattered(n: usize) -> Instance {
        // Deterministic pseudo-grid with enough irregularity to leave
        // room for 2-opt improvements over nearest neighbor.
        let vertices = (0..n)
            .map(|i| {
                let x = ((i * 37) % 100) as f64;
                let y = ((i * 61) % 100) as f64;
                (i as u32 + 1, Point::new(x, y))
            })
            .collect();
        Instance::new(vertices)
    }

    fn fast_config() -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.1)
            .with_cooling_factor(0.995)
            .with_seed(42)
    }

    #[test]
    fn test_anneal_tour_is_permutation() {
        let instance = scattered(15);
        let result = AnnealRunner::run(&instance, &fast_config());
        let mut tour = result.tour.clone();
        tour.sort_unstable();
        assert_eq!(tour, instance.ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_anneal_length_consistent_with_recomputation() {
        let instance = scattered(20);
        let result = AnnealRunner::run(&instance, &fast_config());
        let order: Vec<usize> = result
            .tour
            .iter()
            .map(|&id| (id - 1) as usize)
            .collect();
        assert_eq!(result.length, tour_length(&order, &instance));
    }

    #[test]
    fn test_anneal_never_worse_than_construction() {
        let instance = scattered(25);
        let nn_length = tour_length(&nearest_neighbor(&instance, None), &instance);
        let result = AnnealRunner::run(&instance, &fast_config());
        assert!(
            result.length <= nn_length,
            "annealing returned {} but construction gives {nn_length}",
            result.length
        );
    }

    #[test]
    fn test_anneal_fixed_seed_is_deterministic() {
        let instance = scattered(18);
        let config = fast_config();
        let a = AnnealRunner::run(&instance, &config);
        let b = AnnealRunner::run(&instance, &config);
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.length, b.length);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_anneal_zero_budget_returns_construction_tour() {
        let instance = scattered(12);
        let config = fast_config().with_time_limit(Duration::ZERO);
        let result = AnnealRunner::run(&instance, &config);

        let nn = nearest_neighbor(&instance, None);
        assert_eq!(result.tour, instance.to_ids(&nn));
        assert_eq!(result.length, tour_length(&nn, &instance));
        assert_eq!(result.iterations, 0);
        assert!(result.timed_out);
    }

    #[test]
    fn test_anneal_unit_square_finds_optimum() {
        let result = AnnealRunner::run(&unit_square(), &fast_config());
        assert_eq!(result.length, 4);
    }

    #[test]
    fn test_anneal_tiny_instance_returns_construction() {
        // n = 3: no non-degenerate 2-opt move changes the cycle.
        let instance = Instance::new(vec![
            (1, Point::new(0.0, 0.0)),
            (2, Point::new(3.0, 0.0)),
            (3, Point::new(0.0, 4.0)),
        ]);
        let result = AnnealRunner::run(&instance, &fast_config());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.length, 12);
    }

    #[test]
    fn test_anneal_counters_are_coherent() {
        let instance = scattered(20);
        let result = AnnealRunner::run(&instance, &fast_config());
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= result.iterations);
        assert!(result.final_temperature <= 0.1 + 1e-9 || result.timed_out);
    }

    #[test]
    fn test_anneal_length_history_non_increasing() {
        let instance = scattered(30);
        let config = fast_config().with_milestone_interval(100);
        let result = AnnealRunner::run(&instance, &config);
        for window in result.length_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_anneal_observer_sees_milestones() {
        let instance = scattered(20);
        let config = fast_config().with_milestone_interval(500);
        let mut milestones = Vec::new();
        let result = AnnealRunner::run_with_observer(&instance, &config, &mut |m| {
            milestones.push(*m);
        });

        // First callback fires at INIT with the construction tour.
        assert_eq!(milestones[0].iteration, 0);
        assert!(milestones.len() >= 2, "expected milestone callbacks during the run");
        for m in &milestones {
            assert!(m.best_length <= milestones[0].best_length);
        }
        assert!(milestones.last().unwrap().best_length >= result.length);
    }

    #[test]
    #[should_panic(expected = "invalid AnnealConfig")]
    fn test_anneal_panics_on_invalid_config() {
        let config = AnnealConfig::default().with_cooling_factor(2.0);
        AnnealRunner::run(&unit_square(), &config);
    }
}
