pub mod d400_indicator_board;
