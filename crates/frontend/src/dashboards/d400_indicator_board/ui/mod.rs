mod cards;
mod dashboard;

pub use dashboard::IndicatorBoard;
