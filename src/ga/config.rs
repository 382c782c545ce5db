//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the timetabling GA.
///
/// Controls population size, tournament selection, mutation and its
/// decay schedule, convergence detection, parallelism, and seeding.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(500)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of schedules in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Initial per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Tournament size for parent selection.
    ///
    /// When the population is smaller than this, the whole population
    /// is sampled instead.
    pub tournament_size: usize,

    /// The mutation rate is multiplied by [`mutation_decay_factor`]
    /// on every generation divisible by this interval.
    ///
    /// [`mutation_decay_factor`]: Self::mutation_decay_factor
    pub mutation_decay_interval: usize,

    /// Geometric decay factor for the mutation rate (0.0–1.0].
    ///
    /// No floor is enforced; the rate decays monotonically.
    pub mutation_decay_factor: f64,

    /// Generation index from which the convergence check runs.
    pub min_generations_before_convergence: usize,

    /// Relative average-fitness improvement below which the run stops.
    pub convergence_threshold: f64,

    /// Whether to evaluate schedules in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.1,
            tournament_size: 5,
            mutation_decay_interval: 10,
            mutation_decay_factor: 0.95,
            min_generations_before_convergence: 100,
            convergence_threshold: 0.01,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the initial mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the mutation decay schedule.
    pub fn with_mutation_decay(mut self, interval: usize, factor: f64) -> Self {
        self.mutation_decay_interval = interval;
        self.mutation_decay_factor = factor;
        self
    }

    /// Sets the generation index from which the convergence check runs.
    pub fn with_min_generations_before_convergence(mut self, n: usize) -> Self {
        self.min_generations_before_convergence = n;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.mutation_decay_interval == 0 {
            return Err("mutation_decay_interval must be at least 1".into());
        }
        if !(self.mutation_decay_factor > 0.0 && self.mutation_decay_factor <= 1.0) {
            return Err("mutation_decay_factor must be in (0, 1]".into());
        }
        Ok(())
    }
}
