// fee percentage is expressed in units of 1 / FEE_DENOMINATOR (basis points)
pub(crate) const FEE_DENOMINATOR: u32 = 10_000;
// configured fee percentage must fit into 24 bits
pub(crate) const FEE_PERCENTAGE_LIMIT: u32 = 1 << 24;

// maximum number of steps in a single execution
pub(crate) const MAX_STEPS: u32 = 16;
