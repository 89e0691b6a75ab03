//! Parameter-vector splitting and validation.
//!
//! A fitted model is driven by a flat slice of `4 + 2k` scalars, where
//! `k` is the covariate count: three global scalars, the directionality
//! slot, then two `k`-length covariate modifier blocks.
//! [`Parameters::split`] validates the length and carves the slice into
//! named pieces; nothing downstream touches raw indices.

use nalgebra::DVector;

use crate::error::ModelError;

/// Named view of a flat parameter vector.
///
/// Layout: `[alpha, beta, gamma, s, b[0..k], p[0..k]]`. The `s` slot is
/// always present; its value is read only when the directionality flag
/// is enabled, otherwise the mix is fixed at `0.5`.
///
/// Domains are documented fitting ranges, not enforced bounds:
/// `alpha` in [0,5], `beta` in [0,5], `gamma` in [0,10], `s` in [0,1],
/// `b` and `p` entries in [-5,5].
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    s: f64,
    b: DVector<f64>,
    p: DVector<f64>,
}

impl Parameters {
    /// Split a flat parameter vector for a model with `ntypes` covariates.
    ///
    /// `directional` selects whether slot 3 is read as the
    /// anterograde/retrograde mix `s`; when false the slot is ignored and
    /// `s` is fixed at `0.5`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ParameterShape`] unless
    /// `raw.len() == 4 + 2 * ntypes`. A wrong-length vector is never
    /// truncated or padded.
    pub fn split(raw: &[f64], ntypes: usize, directional: bool) -> Result<Self, ModelError> {
        let expected = 4 + 2 * ntypes;
        if raw.len() != expected {
            return Err(ModelError::ParameterShape {
                expected,
                found: raw.len(),
            });
        }
        let s = if directional { raw[3] } else { 0.5 };
        Ok(Self {
            alpha: raw[0],
            beta: raw[1],
            gamma: raw[2],
            s,
            b: DVector::from_column_slice(&raw[4..4 + ntypes]),
            p: DVector::from_column_slice(&raw[4 + ntypes..]),
        })
    }

    /// Global connectome-independent growth rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Global diffusivity rate.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Seed rescale value applied to the seed vector at `t = 0`.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Directionality mix: `0` is purely anterograde (transpose of the
    /// connectivity matrix), `1` purely retrograde (as given).
    ///
    /// Values outside [0,1] are not rejected; they produce a well-defined
    /// blend that is the caller's responsibility to interpret.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Covariate spread modifiers, length `k`.
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Covariate growth modifiers, length `k`.
    pub fn p(&self) -> &DVector<f64> {
        &self.p
    }

    /// The covariate count `k` this split was made for.
    pub fn ntypes(&self) -> usize {
        self.b.len()
    }
}
