//! Operator burn requests and how they are normalised before reaching the dynamics.

/// What the operator asked for on a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurnRequest {
    /// Empty input; burn nothing this tick.
    Skip,
    /// Input that is not a usable number.
    Invalid,
    /// Burn this many kilograms of propellant.
    Kg(f64),
}

impl BurnRequest {
    /// Interpret a line of operator text. Never fails: anything unusable becomes
    /// [`BurnRequest::Invalid`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return BurnRequest::Skip;
        }
        match trimmed.parse::<f64>() {
            Ok(kg) => BurnRequest::Kg(kg),
            Err(_) => BurnRequest::Invalid,
        }
    }
}

impl From<f64> for BurnRequest {
    fn from(kg: f64) -> Self {
        BurnRequest::Kg(kg)
    }
}

/// Why the applied burn differs from the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampReason {
    Skipped,
    InvalidInput,
    InsufficientFuel,
}

impl ClampReason {
    /// Short annotation shown next to the applied burn.
    pub fn label(self) -> &'static str {
        match self {
            ClampReason::Skipped => "skipped",
            ClampReason::InvalidInput => "invalid input",
            ClampReason::InsufficientFuel => "insufficient fuel",
        }
    }
}

/// Resolve a request against the fuel on board.
///
/// Returns the burn to apply and, if that is not what was asked for, the reason. A burn equal to
/// the remaining fuel is allowed.
pub(crate) fn clamp_burn(request: BurnRequest, fuel_kg: f64) -> (f64, Option<ClampReason>) {
    match request {
        BurnRequest::Skip => (0.0, Some(ClampReason::Skipped)),
        BurnRequest::Invalid => (0.0, Some(ClampReason::InvalidInput)),
        BurnRequest::Kg(kg) if !kg.is_finite() || kg < 0.0 => {
            (0.0, Some(ClampReason::InvalidInput))
        }
        BurnRequest::Kg(kg) if kg > fuel_kg => (0.0, Some(ClampReason::InsufficientFuel)),
        BurnRequest::Kg(kg) => (kg, None),
    }
}
