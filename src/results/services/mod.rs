pub mod results_view;

pub use results_view::{FetchTicket, ResultsState, ResultsView};
