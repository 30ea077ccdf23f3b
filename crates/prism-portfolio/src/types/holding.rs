//! Canonical holding types.

use prism_core::numeric::clamp;
use prism_core::{AssetClass, Currency, Dimension, Factor, Region, Sector};
use prism_core::records::RawHolding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;
use crate::normalizer::normalize_holding;

/// Name given to holdings whose record has no usable name.
pub const UNNAMED_HOLDING: &str = "Unnamed holding";

/// Lower bound of a holding weight, in percent.
pub const MIN_WEIGHT: f64 = 0.0;

/// Upper bound of a holding weight, in percent.
pub const MAX_WEIGHT: f64 = 100.0;

/// Style-factor scores of a single holding.
///
/// Every score is kept within `[Factor::MIN_SCORE, Factor::MAX_SCORE]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FactorScores {
    value: f64,
    quality: f64,
    momentum: f64,
    size: f64,
    volatility: f64,
}

impl FactorScores {
    /// All scores zero.
    pub const ZERO: FactorScores = FactorScores {
        value: 0.0,
        quality: 0.0,
        momentum: 0.0,
        size: 0.0,
        volatility: 0.0,
    };

    /// Creates scores with the same value for every factor (clamped).
    #[must_use]
    pub fn uniform(score: f64) -> Self {
        let mut scores = Self::ZERO;
        for factor in Factor::ALL {
            scores.set(factor, score);
        }
        scores
    }

    /// Returns the score for a factor.
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Value => self.value,
            Factor::Quality => self.quality,
            Factor::Momentum => self.momentum,
            Factor::Size => self.size,
            Factor::Volatility => self.volatility,
        }
    }

    /// Sets the score for a factor, clamping it into range.
    pub fn set(&mut self, factor: Factor, score: f64) {
        let score = clamp(score, Factor::MIN_SCORE, Factor::MAX_SCORE);
        match factor {
            Factor::Value => self.value = score,
            Factor::Quality => self.quality = score,
            Factor::Momentum => self.momentum = score,
            Factor::Size => self.size = score,
            Factor::Volatility => self.volatility = score,
        }
    }

    /// Returns a copy with one factor changed.
    #[must_use]
    pub fn with(mut self, factor: Factor, score: f64) -> Self {
        self.set(factor, score);
        self
    }

    /// Iterates `(factor, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// One portfolio position.
///
/// Holdings are only ever built through the normalizer or the clamping
/// setters, so categorical fields are always enumeration members and
/// numeric fields are always in range and never `NaN`. Deserializing goes
/// through [`RawHolding`] and the normalizer for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawHolding")]
pub struct Holding {
    name: String,
    weight: f64,
    currency: Currency,
    region: Region,
    sector: Sector,
    asset_class: AssetClass,
    #[serde(flatten)]
    factors: FactorScores,
}

impl From<RawHolding> for Holding {
    fn from(raw: RawHolding) -> Self {
        normalize_holding(&raw)
    }
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> HoldingBuilder {
        HoldingBuilder::new().name(name)
    }

    /// The template appended by the "add holding" command.
    #[must_use]
    pub fn template() -> Self {
        HoldingBuilder::new().name("New Holding").build()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in percent, within `[0, 100]`.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Denomination currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Geographic region.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Industry sector.
    #[must_use]
    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// Asset class.
    #[must_use]
    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Style-factor scores.
    #[must_use]
    pub fn factors(&self) -> &FactorScores {
        &self.factors
    }

    /// Score for one factor.
    #[must_use]
    pub fn factor(&self, factor: Factor) -> f64 {
        self.factors.get(factor)
    }

    /// Returns the label of the holding's category in `dimension`.
    #[must_use]
    pub fn category_label(&self, dimension: Dimension) -> &'static str {
        use prism_core::Category;
        match dimension {
            Dimension::Currency => self.currency.label(),
            Dimension::Region => self.region.label(),
            Dimension::Sector => self.sector.label(),
            Dimension::AssetClass => self.asset_class.label(),
        }
    }

    /// Sets the name; blank names become [`UNNAMED_HOLDING`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            UNNAMED_HOLDING.to_string()
        } else {
            name
        };
    }

    /// Sets the weight, clamping it into `[0, 100]`.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = clamp(weight, MIN_WEIGHT, MAX_WEIGHT);
    }

    /// Sets the currency.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Sets the region.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Sets the sector.
    pub fn set_sector(&mut self, sector: Sector) {
        self.sector = sector;
    }

    /// Sets the asset class.
    pub fn set_asset_class(&mut self, asset_class: AssetClass) {
        self.asset_class = asset_class;
    }

    /// Sets one factor score, clamping it into range.
    pub fn set_factor(&mut self, factor: Factor, score: f64) {
        self.factors.set(factor, score);
    }
}

/// An editable holding field, addressed by its record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldingField {
    /// `name`
    Name,
    /// `weight`
    Weight,
    /// `currency`, `region`, `sector` or `assetClass`
    Category(Dimension),
    /// One of the factor score keys
    Factor(Factor),
}

impl HoldingField {
    /// Returns the record key of the field.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            HoldingField::Name => "name",
            HoldingField::Weight => "weight",
            HoldingField::Category(dim) => dim.key(),
            HoldingField::Factor(factor) => factor.key(),
        }
    }
}

impl FromStr for HoldingField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(HoldingField::Name),
            "weight" => Ok(HoldingField::Weight),
            _ => Dimension::ALL
                .into_iter()
                .find(|d| d.key() == s)
                .map(HoldingField::Category)
                .or_else(|| Factor::from_key(s).map(HoldingField::Factor))
                .ok_or_else(|| PortfolioError::unknown_field(s)),
        }
    }
}

impl fmt::Display for HoldingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Builder for constructing a [`Holding`] from typed values.
///
/// Numeric values are clamped on [`HoldingBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    name: Option<String>,
    weight: f64,
    currency: Currency,
    region: Region,
    sector: Sector,
    asset_class: AssetClass,
    factors: FactorScores,
}

impl HoldingBuilder {
    /// Creates a new builder (USD / North America / Technology / Equity,
    /// zero weight, neutral factors).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the weight in percent.
    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn sector(mut self, sector: Sector) -> Self {
        self.sector = sector;
        self
    }

    /// Sets the asset class.
    #[must_use]
    pub fn asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = asset_class;
        self
    }

    /// Sets one factor score.
    #[must_use]
    pub fn factor(mut self, factor: Factor, score: f64) -> Self {
        self.factors.set(factor, score);
        self
    }

    /// Sets all factor scores.
    #[must_use]
    pub fn factors(mut self, factors: FactorScores) -> Self {
        self.factors = factors;
        self
    }

    /// Builds the holding.
    #[must_use]
    pub fn build(self) -> Holding {
        let mut holding = Holding {
            name: String::new(),
            weight: 0.0,
            currency: self.currency,
            region: self.region,
            sector: self.sector,
            asset_class: self.asset_class,
            factors: self.factors,
        };
        holding.set_name(self.name.unwrap_or_default());
        holding.set_weight(self.weight);
        holding
    }
}
