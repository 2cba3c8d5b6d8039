//! Pipeline entry point and memoization.
//!
//! [`LayoutEngine`] wires the stages together behind a single call and
//! memoizes results per input tuple. State is constructor-injected — no
//! module-level globals — so tests instantiate isolated engines.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Primary plan rejected | Emergency fallback, `warn!`, degraded result |
//! | Zero cards | Empty result, optimal |
//! | Degenerate container | Floored space, plan proceeds |
//! | Even fallback overflows | Result returned, `is_optimal = false` |

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use cardlay_core::{Breakpoints, DeviceClass};

use crate::plan::{
    AvailableSpace, LayoutRequest, LayoutResult, Planned, SolverLimits,
};
use crate::validate::validate_layout;
use crate::{fallback, position, rows, size, space};

/// Engine construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Width thresholds used by [`LayoutEngine::request_for`].
    pub breakpoints: Breakpoints,
    /// Disable to recompute on every call (diagnostics, benchmarks).
    pub cache_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            cache_enabled: true,
        }
    }
}

/// Memoization key: the full input tuple. Float dimensions are keyed by
/// bit pattern, so equality is exact and NaN inputs simply never hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    card_count: usize,
    width_bits: u32,
    height_bits: u32,
    device_class: DeviceClass,
}

impl CacheKey {
    fn of(request: &LayoutRequest) -> Self {
        Self {
            card_count: request.card_count,
            width_bits: request.container_width.to_bits(),
            height_bits: request.container_height.to_bits(),
            device_class: request.device_class,
        }
    }
}

/// The adaptive card layout engine.
///
/// Holds no state between invocations except the memo cache; every
/// computation is a pure function of the request.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
    cache: FxHashMap<CacheKey, LayoutResult>,
}

impl LayoutEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
        }
    }

    /// Build a request for a raw container, classifying the device from
    /// the configured breakpoints.
    #[must_use]
    pub fn request_for(&self, card_count: usize, width: f32, height: f32) -> LayoutRequest {
        let class = self.config.breakpoints.classify_width(width);
        LayoutRequest::new(card_count, width, height, class)
    }

    /// The only required call: run the pipeline and always return a
    /// usable result.
    pub fn compute_layout(&mut self, request: &LayoutRequest) -> LayoutResult {
        self.plan(request).into_result()
    }

    /// Tagged form of [`Self::compute_layout`], distinguishing degraded
    /// plans without inspecting flags.
    pub fn plan(&mut self, request: &LayoutRequest) -> Planned {
        let key = CacheKey::of(request);
        if self.config.cache_enabled {
            if let Some(hit) = self.cache.get(&key) {
                debug!(card_count = request.card_count, "layout cache hit");
                return Planned::from_result(hit.clone());
            }
        }

        let planned = self.run_pipeline(request);

        if self.config.cache_enabled {
            self.cache.insert(key, planned.result().clone());
        }
        planned
    }

    /// The card region the pipeline would use for `request`. Exposed for
    /// diagnostics and for validating results out of band.
    #[must_use]
    pub fn available_space_for(&self, request: &LayoutRequest) -> AvailableSpace {
        space::available_space(request, &request.device_class.profile())
    }

    /// Drop every memoized result. Wholesale by design: inputs are few
    /// and fully determine outputs.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized results.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn run_pipeline(&self, request: &LayoutRequest) -> Planned {
        if request.card_count == 0 {
            return Planned::Optimal(LayoutResult::empty());
        }

        let profile = request.device_class.profile();
        let available = space::available_space(request, &profile);
        let limits = SolverLimits::primary(&profile);

        let cap = rows::capacity(&available, &limits);
        let plan = rows::plan_rows(request.card_count, cap);
        let card_size = size::solve_card_size(&plan, &available, &limits);
        let positions =
            position::generate_positions(&plan, card_size, &available, &limits, request.card_count);
        let (total_width, total_height) =
            position::total_extent(&plan, card_size, &limits, request.card_count);

        let result = LayoutResult {
            positions,
            card_size,
            row_plan: plan,
            total_width,
            total_height,
            is_optimal: true,
        };

        let verdict = validate_layout(&result, &available, &limits);
        if verdict.is_valid {
            Planned::Optimal(result)
        } else {
            warn!(
                card_count = request.card_count,
                violations = ?verdict.violations,
                "primary layout rejected, engaging emergency fallback"
            );
            Planned::Degraded(fallback::replan(request.card_count, &available, &profile))
        }
    }
}
