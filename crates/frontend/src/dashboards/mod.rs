pub mod d400_indicator_board;

pub use d400_indicator_board::ui::IndicatorBoard;
