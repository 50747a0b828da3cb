pub mod tictacgo;
