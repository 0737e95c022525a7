mod state;

pub(crate) use state::ResultsState;
