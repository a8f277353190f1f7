mod cell;
pub use cell::Cell;
pub use cell::Step;

mod shape;
pub use shape::BoardShape;
pub use shape::MAX_SIDE;

mod track;
pub use track::Track;

mod generator;
pub use generator::Board;
pub use generator::generate;

mod ascii;
pub use ascii::render_ascii;
