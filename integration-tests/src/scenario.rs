//! A declarative scenario format for driving the full transform pipeline.
//!
//! A [`Scenario`] names one membership family (with the shared-parameter
//! layout: a list of triangular triples, or a list of centers with one
//! `sigma` or one `width`/`shape` for the whole bank), plus the sampled
//! function. Running it applies both forward transforms and then both
//! inverse transforms at each query point.

use fuzzbound_core::Membership;
use fuzzbound_transform::{
    forward_lower, forward_upper, inverse_lower, inverse_upper, Bell, Gaussian, ParameterError,
    ParameterSet, SampleSeries, TransformError, Triangular,
};
use ndarray::Array1;
use serde::Deserialize;
use thiserror::Error;

/// A deserializable description of one end-to-end transform run.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub family: Family,
    pub x_values: Vec<f64>,
    pub f_values: Vec<f64>,
}

/// The membership family and its shape parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Triangular { params: Vec<(f64, f64, f64)> },
    Gaussian { centers: Vec<f64>, sigma: f64 },
    Bell { centers: Vec<f64>, width: f64, shape: f64 },
}

/// The reconstructed estimates at one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub upper: f64,
    pub lower: f64,
}

/// An error from building or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl Scenario {
    /// Runs forward and inverse transforms, returning one [`Envelope`] per
    /// query point.
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioError`] if the shape parameters are invalid or
    /// the sample arrays are mismatched or empty.
    pub fn envelope_at(&self, queries: &[f64]) -> Result<Vec<Envelope>, ScenarioError> {
        let samples = SampleSeries::new(
            Array1::from_vec(self.x_values.clone()),
            Array1::from_vec(self.f_values.clone()),
        )?;

        match &self.family {
            Family::Triangular { params } => {
                let members = params
                    .iter()
                    .map(|&(a, b, c)| Triangular::new(a, b, c))
                    .collect::<Result<Vec<_>, _>>()?;
                run(&ParameterSet::new(members)?, &samples, queries)
            }
            Family::Gaussian { centers, sigma } => {
                let members = centers
                    .iter()
                    .map(|&center| Gaussian::new(center, *sigma))
                    .collect::<Result<Vec<_>, _>>()?;
                run(&ParameterSet::new(members)?, &samples, queries)
            }
            Family::Bell {
                centers,
                width,
                shape,
            } => {
                let members = centers
                    .iter()
                    .map(|&center| Bell::new(*width, *shape, center))
                    .collect::<Result<Vec<_>, _>>()?;
                run(&ParameterSet::new(members)?, &samples, queries)
            }
        }
    }
}

fn run<M: Membership>(
    params: &ParameterSet<M>,
    samples: &SampleSeries,
    queries: &[f64],
) -> Result<Vec<Envelope>, ScenarioError> {
    let upper = forward_upper(params, samples);
    let lower = forward_lower(params, samples);

    queries
        .iter()
        .map(|&x| {
            Ok(Envelope {
                upper: inverse_upper(x, &upper, params)?,
                lower: inverse_lower(x, &lower, params)?,
            })
        })
        .collect()
}
