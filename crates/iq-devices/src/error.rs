/// Geometric preconditions a device formula cannot evaluate past.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    /// Oxide capacitance is undefined for a zero or negative oxide.
    #[error("oxide thickness must be positive, got {tox} m")]
    NonPositiveOxide { tox: f64 },
    /// (0, 0) has zero diameter and an unbounded bandgap.
    #[error("chirality ({n}, {m}) describes a nanotube of zero diameter")]
    DegenerateChirality { n: u32, m: u32 },
}
