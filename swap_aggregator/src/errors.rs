use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    PathIsEmpty = 307,
    TooManySteps = 308,
    ChainedAmountWithoutPredecessor = 309,
    ChainedTokenMismatch = 310,
    CannotSwapSameToken = 311,

    SlippageExceeded = 2006,
    InsufficientOutput = 2007,
    InsufficientNativeValue = 2008,

    SwapTypeUnsupported = 2901,
    RouterRegistryEmpty = 2902,
    SwapsKilled = 2903,
    FeeOutOfRange = 2904,
    AllowanceOperationFailed = 2905,
}
