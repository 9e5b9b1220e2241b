//! Hill-climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Validate the configuration and the starting selection
//! 2. At each outer iteration, scan the neighborhood of the current
//!    selection:
//!    a. A strictly better admissible neighbor always becomes the
//!    iteration's best candidate
//!    b. A neighbor of equal utility becomes the best candidate only while
//!    the iteration's plateau budget lasts
//! 3. Adopt the best candidate, reset the plateau budget, repeat
//! 4. Stop when an iteration accepts nothing, or after `plateau`
//!    consecutive lateral iterations
//!
//! The exhaustive variant enumerates every `(remove one | remove none,
//! add one)` pair; the randomized variant samples multi-item swaps.
//!
//! # Reference
//!
//! Hoos, H. & Stützle, T. (2004). *Stochastic Local Search: Foundations
//! and Applications*, ch. 1 (iterative improvement, plateau moves).

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ClimbConfig;
use crate::error::SolverError;
use crate::problem::Instance;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult {
    /// The final selection, a local optimum under the neighborhood used.
    pub best: Vec<usize>,
    /// Total utility of the final selection.
    pub best_utility: u64,
    /// Outer iterations executed, including the final one that accepted
    /// no move.
    pub iterations: usize,
    /// Moves that strictly increased utility.
    pub improving_moves: usize,
    /// Equal-utility lateral moves taken.
    pub plateau_moves: usize,
}

/// Hill-climbing runner.
pub struct HillClimb;

impl HillClimb {
    /// Runs the deterministic exhaustive variant.
    ///
    /// The neighborhood is every single-swap of the current selection:
    /// remove one member (or none) and add one non-member. Inadmissible
    /// neighbors are discarded. The search never returns a selection worse
    /// than `start`.
    ///
    /// # Errors
    ///
    /// Rejects an invalid configuration, out-of-range or duplicate indices
    /// in `start`, and a `start` that already violates a budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkp_heur::hillclimb::{ClimbConfig, HillClimb};
    /// use mkp_heur::problem::{Instance, Item};
    ///
    /// let instance = Instance::new(
    ///     1,
    ///     vec![8],
    ///     vec![
    ///         Item::new(10, vec![4]),
    ///         Item::new(9, vec![4]),
    ///         Item::new(2, vec![1]),
    ///     ],
    /// )
    /// .unwrap();
    /// let result = HillClimb::run(&instance, &[2], &ClimbConfig::default()).unwrap();
    /// assert_eq!(result.best_utility, 19);
    /// ```
    pub fn run(
        instance: &Instance,
        start: &[usize],
        config: &ClimbConfig,
    ) -> Result<ClimbResult, SolverError> {
        config.validate().map_err(SolverError::Config)?;
        check_start(instance, start)?;

        Self::climb(instance, start, config, |current, current_utility, _rng| {
            best_single_swap(instance, current, current_utility, config.plateau)
        })
    }

    /// Runs the randomized multi-swap variant.
    ///
    /// Each iteration draws `config.samples` candidate neighbors: remove a
    /// random count in `1..=radius` of random members, then add a random
    /// count in `1..=radius` of random non-members. Acceptance and plateau
    /// handling match the exhaustive variant. With a fixed seed the run is
    /// reproducible; the generator is owned by this call and never shared.
    pub fn run_randomized(
        instance: &Instance,
        start: &[usize],
        config: &ClimbConfig,
    ) -> Result<ClimbResult, SolverError> {
        config.validate().map_err(SolverError::Config)?;
        check_start(instance, start)?;

        Self::climb(instance, start, config, |current, current_utility, rng| {
            best_sampled_swap(instance, current, current_utility, config, rng)
        })
    }

    /// Shared outer loop: adopt each iteration's best candidate until an
    /// iteration accepts nothing or the lateral streak hits the plateau cap.
    fn climb<F>(
        instance: &Instance,
        start: &[usize],
        config: &ClimbConfig,
        mut scan: F,
    ) -> Result<ClimbResult, SolverError>
    where
        F: FnMut(&[usize], u64, &mut StdRng) -> Option<(Vec<usize>, u64)>,
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = start.to_vec();
        let mut current_utility = instance.total_utility(&current);

        let mut iterations = 0;
        let mut improving_moves = 0;
        let mut plateau_moves = 0;
        let mut lateral_streak = 0;

        loop {
            iterations += 1;

            let Some((next, next_utility)) = scan(&current, current_utility, &mut rng) else {
                break;
            };

            if next_utility > current_utility {
                improving_moves += 1;
                lateral_streak = 0;
            } else {
                if lateral_streak >= config.plateau {
                    break;
                }
                lateral_streak += 1;
                plateau_moves += 1;
            }

            current = next;
            current_utility = next_utility;
        }

        debug!("hill climb converged at utility {current_utility} after {iterations} iterations");

        Ok(ClimbResult {
            best: current,
            best_utility: current_utility,
            iterations,
            improving_moves,
            plateau_moves,
        })
    }
}

/// Validates a starting selection: in-range, distinct, admissible.
fn check_start(instance: &Instance, start: &[usize]) -> Result<(), SolverError> {
    let mut seen = vec![false; instance.num_items()];
    for &id in start {
        if id >= instance.num_items() {
            return Err(SolverError::UnknownItem(id));
        }
        if seen[id] {
            return Err(SolverError::DuplicateItem(id));
        }
        seen[id] = true;
    }

    let consumption = instance.consumption(start);
    for (d, (&used, &budget)) in consumption.iter().zip(instance.budgets()).enumerate() {
        if used > u64::from(budget) {
            return Err(SolverError::InfeasibleStart(d));
        }
    }
    Ok(())
}

/// Scans every single-swap neighbor and returns the iteration's best
/// candidate, or None when neither an improving nor a plateau move exists.
fn best_single_swap(
    instance: &Instance,
    current: &[usize],
    current_utility: u64,
    plateau: usize,
) -> Option<(Vec<usize>, u64)> {
    let mut member = vec![false; instance.num_items()];
    for &id in current {
        member[id] = true;
    }

    let mut best: Option<Vec<usize>> = None;
    let mut best_utility = current_utility;
    let mut plateau_left = plateau;

    let removals = std::iter::once(None).chain(current.iter().copied().map(Some));
    for removal in removals {
        let base: Vec<usize> = match removal {
            Some(out) => current.iter().copied().filter(|&id| id != out).collect(),
            None => current.to_vec(),
        };

        for add in 0..instance.num_items() {
            if member[add] {
                continue;
            }
            let mut candidate = base.clone();
            candidate.push(add);
            if !instance.is_admissible(&candidate) {
                continue;
            }

            let utility = instance.total_utility(&candidate);
            if utility > best_utility {
                best = Some(candidate);
                best_utility = utility;
            } else if utility == best_utility && plateau_left > 0 {
                best = Some(candidate);
                plateau_left -= 1;
            }
        }
    }

    best.map(|selection| (selection, best_utility))
}

/// Samples random multi-swap neighbors and returns the iteration's best
/// candidate under the same acceptance rule as the exhaustive scan.
fn best_sampled_swap(
    instance: &Instance,
    current: &[usize],
    current_utility: u64,
    config: &ClimbConfig,
    rng: &mut StdRng,
) -> Option<(Vec<usize>, u64)> {
    let mut best: Option<Vec<usize>> = None;
    let mut best_utility = current_utility;
    let mut plateau_left = config.plateau;

    for _ in 0..config.samples {
        let Some(candidate) = random_neighbor(current, instance.num_items(), config.radius, rng)
        else {
            continue;
        };
        if !instance.is_admissible(&candidate) {
            continue;
        }

        let utility = instance.total_utility(&candidate);
        if utility > best_utility {
            best = Some(candidate);
            best_utility = utility;
        } else if utility == best_utility && plateau_left > 0 {
            best = Some(candidate);
            plateau_left -= 1;
        }
    }

    best.map(|selection| (selection, best_utility))
}

/// Removes 1..=radius random members, then adds 1..=radius random
/// non-members. Returns None when no item is available to add.
fn random_neighbor<R: Rng>(
    current: &[usize],
    num_items: usize,
    radius: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    let mut next = current.to_vec();
    if !next.is_empty() {
        let out_count = rng.random_range(1..=radius.min(next.len()));
        for _ in 0..out_count {
            let victim = rng.random_range(0..next.len());
            next.swap_remove(victim);
        }
    }

    let mut outside: Vec<usize> = (0..num_items).filter(|id| !next.contains(id)).collect();
    if outside.is_empty() {
        return None;
    }
    let in_count = rng.random_range(1..=radius.min(outside.len()));
    for _ in 0..in_count {
        let picked = rng.random_range(0..outside.len());
        next.push(outside.swap_remove(picked));
    }
    Some(next)
}
