//! Explorer session
//!
//! Wires the math library, the interaction state machine and the render
//! contract together. The session owns the parameters, the optional sample
//! and the cached curve and bins; every setter recomputes what it
//! invalidates before returning, so [`Explorer::scene`] is always a pure
//! read.

use rand::Rng;
use tracing::{debug, warn};

use bellcurve_stats::{
    bin_histogram, sample_curve, sample_stats, Bin, CurvePoint, DistributionParams, Domain,
    StatsError,
};

use crate::catalog::SampleDataset;
use crate::config::ChartConfig;
use crate::error::ExplorerResult;
use crate::input::InputEvent;
use crate::interaction::{Interaction, InteractionContext, Tooltip};
use crate::render::{render_scene, HistogramOverlay, Scene, SceneInput};
use crate::scenario::{simulate, SampleSize, SimulationKind};
use crate::view::Viewport;

/// Loaded sample with its cached bins
#[derive(Debug, Clone, PartialEq)]
struct Sample {
    values: Vec<f64>,
    /// Finite values, the normalization total for bar densities
    total: usize,
    bins: Vec<Bin>,
}

/// One interactive chart
#[derive(Debug, Clone)]
pub struct Explorer {
    config: ChartConfig,
    params: DistributionParams,
    domain: Domain,
    curve: Vec<CurvePoint>,
    sample: Option<Sample>,
    viewport: Viewport,
    interaction: Interaction,
}

impl Explorer {
    /// Explorer with the default configuration
    pub fn new(params: DistributionParams) -> ExplorerResult<Self> {
        Self::with_config(ChartConfig::default(), params)
    }

    pub fn with_config(config: ChartConfig, params: DistributionParams) -> ExplorerResult<Self> {
        config.validate()?;
        let domain = params.domain(config.sampling.domain_sigmas)?;
        let curve = sample_curve(domain, &params, config.sampling.curve_points)?;
        let viewport = config.layout.viewport();

        Ok(Self {
            config,
            params,
            domain,
            curve,
            sample: None,
            viewport,
            interaction: Interaction::new(),
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn params(&self) -> &DistributionParams {
        &self.params
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn curve(&self) -> &[CurvePoint] {
        &self.curve
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn sample(&self) -> Option<&[f64]> {
        self.sample.as_ref().map(|s| s.values.as_slice())
    }

    /// Bins of the loaded sample over the current domain
    pub fn bins(&self) -> Option<&[Bin]> {
        self.sample.as_ref().map(|s| s.bins.as_slice())
    }

    /// Replace the distribution. The pan/zoom transform is kept.
    pub fn set_params(&mut self, params: DistributionParams) -> ExplorerResult<()> {
        let (domain, curve, bins) = Self::checked(self.derive(&params))?;

        debug!(
            mean = params.mean(),
            std_dev = params.std_dev(),
            "distribution changed"
        );
        self.params = params;
        self.domain = domain;
        self.curve = curve;
        if let (Some(sample), Some(bins)) = (self.sample.as_mut(), bins) {
            sample.bins = bins;
        }

        let ctx = InteractionContext {
            params: &self.params,
            domain: self.domain,
            viewport: &self.viewport,
            config: &self.config,
        };
        self.interaction.params_changed(&ctx);
        Ok(())
    }

    /// Move the mean, keeping σ. Non-finite values leave the state unchanged.
    pub fn set_mean(&mut self, mean: f64) -> ExplorerResult<()> {
        let params = Self::checked(DistributionParams::new(mean, self.params.std_dev()))?;
        self.set_params(params)
    }

    /// Change σ, keeping the mean. Values `<= 0` leave the state unchanged.
    pub fn set_std_dev(&mut self, std_dev: f64) -> ExplorerResult<()> {
        let params = Self::checked(DistributionParams::new(self.params.mean(), std_dev))?;
        self.set_params(params)
    }

    /// Domain, curve and rebinned sample for `params`
    fn derive(
        &self,
        params: &DistributionParams,
    ) -> Result<(Domain, Vec<CurvePoint>, Option<Vec<Bin>>), StatsError> {
        let sampling = &self.config.sampling;
        let domain = params.domain(sampling.domain_sigmas)?;
        let curve = sample_curve(domain, params, sampling.curve_points)?;
        let bins = match &self.sample {
            Some(sample) => Some(bin_histogram(&sample.values, domain, sampling.bin_count)?),
            None => None,
        };
        Ok((domain, curve, bins))
    }

    fn checked<T>(result: Result<T, StatsError>) -> ExplorerResult<T> {
        result.map_err(|err| {
            warn!(error = %err, "rejected parameter update");
            err.into()
        })
    }

    /// Overlay a sample. Non-finite values are kept but never binned.
    pub fn set_sample(&mut self, values: Vec<f64>) -> ExplorerResult<()> {
        let total = values.iter().filter(|v| v.is_finite()).count();
        if total == 0 {
            warn!(len = values.len(), "rejected sample with no finite values");
            return Err(StatsError::EmptySample.into());
        }
        let bins = bin_histogram(&values, self.domain, self.config.sampling.bin_count)?;
        debug!(len = values.len(), finite = total, "sample loaded");
        self.sample = Some(Sample {
            values,
            total,
            bins,
        });
        Ok(())
    }

    pub fn clear_sample(&mut self) {
        if self.sample.take().is_some() {
            debug!("sample cleared");
        }
    }

    /// Overlay a catalog dataset
    pub fn load_dataset(&mut self, dataset: &SampleDataset) -> ExplorerResult<()> {
        self.set_sample(dataset.values.clone())
    }

    /// Overlay a freshly simulated dataset
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        kind: SimulationKind,
        size: SampleSize,
        rng: &mut R,
    ) -> ExplorerResult<()> {
        self.set_sample(simulate(kind, size, rng))
    }

    /// Parameters fitted to the loaded sample. The displayed curve is
    /// unchanged until [`Explorer::apply_sample_params`].
    pub fn params_from_sample(&self) -> ExplorerResult<DistributionParams> {
        let values = self.sample().ok_or(StatsError::EmptySample)?;
        Ok(sample_stats(values)?.to_params()?)
    }

    /// Fit the curve to the loaded sample
    pub fn apply_sample_params(&mut self) -> ExplorerResult<()> {
        let params = self.params_from_sample()?;
        self.set_params(params)
    }

    /// Change the surface size, keeping the margins
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height, self.viewport.margins);
        if self.viewport.is_degenerate() {
            warn!(width, height, "viewport has no plot area");
        }
    }

    /// Feed one input event. Returns `true` when a redraw is needed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let ctx = InteractionContext {
            params: &self.params,
            domain: self.domain,
            viewport: &self.viewport,
            config: &self.config,
        };
        self.interaction.handle(event, &ctx)
    }

    /// Restore the identity transform
    pub fn reset_view(&mut self) {
        self.interaction.reset_view();
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.interaction.tooltip(&self.params)
    }

    /// Build the current frame
    pub fn scene(&self) -> Scene {
        let histogram = self.sample.as_ref().map(|s| HistogramOverlay {
            bins: &s.bins,
            total: s.total,
        });
        render_scene(&SceneInput {
            params: &self.params,
            domain: self.domain,
            curve: &self.curve,
            histogram,
            transform: self.interaction.transform(),
            cursor: self.interaction.cursor(),
            viewport: &self.viewport,
            config: &self.config,
        })
    }
}
