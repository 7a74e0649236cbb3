/// Control actions supported by the epsilon searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the epsilon found so far.
    StopEarly,
}
